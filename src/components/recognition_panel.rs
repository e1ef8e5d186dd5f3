//! リアルタイム認識パネルコンポーネント
//!
//! マウント時にWebカメラを起動し、撮影ボタンで現在フレームを
//! Data URLとして保持、送信ボタンで認識エンドポイントへPOSTする。

use crate::api::recognition;
use crate::components::notice::Notice;
use crate::webcam;
use gloo::dialogs::alert;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

/// ビデオ表示要素のid（ページ規約）
pub const VIDEO_ELEMENT_ID: &str = "video";
/// キャプチャ画像を保持する隠しフィールドのid（ページ規約）
pub const CAPTURED_IMAGE_INPUT_ID: &str = "capturedImage";

/// 送信してよいペイロードか（未撮影の空文字列はリクエストを出さない）
fn payload_ready(payload: &str) -> bool {
    !payload.is_empty()
}

const CAPTURED_MESSAGE: &str = "画像を撮影しました。送信の準備ができました。";
const NO_IMAGE_MESSAGE: &str = "画像が未撮影です。もう一度撮影してください。";
const SUBMIT_FAILED_MESSAGE: &str = "画像の送信中にエラーが発生しました。";

#[component]
pub fn RecognitionPanel<F>(on_notice: F) -> impl IntoView
where
    F: Fn(Notice) + 'static + Clone,
{
    // キャプチャ済みペイロード。再撮影で上書きされる
    let (payload, set_payload) = signal(String::new());

    // マウント時にカメラ起動とモバイル調整
    Effect::new(move |_| {
        webcam::adjust_video_for_mobile(VIDEO_ELEMENT_ID);
        spawn_local(async {
            if let Err(message) = webcam::start_webcam(VIDEO_ELEMENT_ID).await {
                alert(&message);
            }
        });
    });

    let on_capture = move |_| match webcam::capture_frame(VIDEO_ELEMENT_ID) {
        Ok(data_url) => {
            set_payload.set(data_url);
            alert(CAPTURED_MESSAGE);
        }
        Err(message) => alert(&message),
    };

    let on_submit = {
        let on_notice = on_notice.clone();
        move |_| {
            let image_data = payload.get_untracked();
            if !payload_ready(&image_data) {
                alert(NO_IMAGE_MESSAGE);
                return;
            }

            // 多重クリックはガードしない（クリックごとに独立した1リクエスト）
            let on_notice = on_notice.clone();
            spawn_local(async move {
                match recognition::recognize(recognition::RECOGNITION_API_URL, &image_data).await
                {
                    Ok(response) => {
                        let text = response.notice_text().to_string();
                        if response.is_success() {
                            alert(&format!("認識成功: {}", text));
                            on_notice(Notice::success(text));
                        } else {
                            alert(&format!("認識失敗: {}", text));
                            on_notice(Notice::error(text));
                        }
                    }
                    Err(error) => {
                        web_sys::console::error_2(&JsValue::from_str("Error:"), &error);
                        alert(SUBMIT_FAILED_MESSAGE);
                        on_notice(Notice::error(SUBMIT_FAILED_MESSAGE));
                    }
                }
            });
        }
    };

    view! {
        <div class="recognition-panel">
            <h2>"リアルタイム認識"</h2>
            <video id=VIDEO_ELEMENT_ID autoplay=true width="640" height="480"></video>
            <input
                type="hidden"
                id=CAPTURED_IMAGE_INPUT_ID
                prop:value=move || payload.get()
            />
            <div class="recognition-actions">
                <button id="capture" class="btn btn-primary" on:click=on_capture>
                    "撮影"
                </button>
                <button id="submit" class="btn btn-secondary" on:click=on_submit>
                    "送信"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_ready_empty_issues_no_request() {
        // 空文字列はリクエストを出す前に弾く
        assert!(!payload_ready(""));
    }

    #[test]
    fn test_payload_ready_captured_payload() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert!(crate::webcam::is_image_payload(data_url));
        assert!(payload_ready(data_url));
    }
}
