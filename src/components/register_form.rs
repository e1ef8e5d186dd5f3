//! 学生登録フォームコンポーネント

use gloo::dialogs::alert;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// 名前入力欄のid（ページ規約）
pub const NAME_INPUT_ID: &str = "name";

/// 名前欄の入力値を検証する（前後の空白を除去し、空なら不合格）
pub fn validate_name(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[component]
pub fn RegisterForm<F>(on_register: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // CSRのためネイティブ送信はせず、検証通過時のみ登録ハンドラを呼ぶ
        ev.prevent_default();

        let document = web_sys::window().unwrap().document().unwrap();
        let Some(field) = document
            .get_element_by_id(NAME_INPUT_ID)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        match validate_name(&field.value()) {
            Some(name) => {
                on_register(name.to_string());
                field.set_value("");
            }
            None => {
                alert("名前を入力してください。");
                let _ = field.focus();
            }
        }
        // 必須項目が増えたらここに検証を追加する
    };

    view! {
        <form class="register-form" on:submit=on_submit>
            <div class="form-group">
                <label for="name">"名前"</label>
                <input type="text" id=NAME_INPUT_ID placeholder="学生の名前を入力..." />
            </div>
            <button type="submit" class="btn btn-primary">"登録"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_plain() {
        assert_eq!(validate_name("Taro"), Some("Taro"));
    }

    #[test]
    fn test_validate_name_trims_whitespace() {
        assert_eq!(validate_name("  Taro Yamada  "), Some("Taro Yamada"));
    }

    #[test]
    fn test_validate_name_empty() {
        assert_eq!(validate_name(""), None);
    }

    #[test]
    fn test_validate_name_whitespace_only() {
        assert_eq!(validate_name("   \t  "), None);
    }
}
