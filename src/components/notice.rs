//! フラッシュ通知コンポーネント

use leptos::prelude::*;

/// 通知カテゴリ
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// ページ内に表示する通知
#[derive(Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// 直近の通知をカテゴリ付きで表示するバナー
#[component]
pub fn NoticeBanner(notice: ReadSignal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || {
            notice.get().map(|n| {
                view! {
                    <div class=format!("notice {}", n.kind.as_str())>
                        {n.text.clone()}
                    </div>
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_kind_as_str() {
        assert_eq!(NoticeKind::Success.as_str(), "success");
        assert_eq!(NoticeKind::Error.as_str(), "error");
    }

    #[test]
    fn test_notice_constructors() {
        let notice = Notice::success("学生を登録しました。");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "学生を登録しました。");

        let notice = Notice::error("bad");
        assert_eq!(notice.kind, NoticeKind::Error);
    }
}
