//! Webカメラ制御（ストリーム取得・静止画キャプチャ・モバイル調整）

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints,
};

/// モバイル判定のビューポート幅しきい値（px）
pub const MOBILE_BREAKPOINT: f64 = 600.0;
/// モバイル表示時のビデオ幅（px）
pub const MOBILE_VIDEO_WIDTH: u32 = 320;
/// モバイル表示時のビデオ高さ（px）
pub const MOBILE_VIDEO_HEIGHT: u32 = 240;

/// キャプチャ画像のData URLプレフィックス
const IMAGE_DATA_URL_PREFIX: &str = "data:image/";

const UNSUPPORTED_MESSAGE: &str = "このブラウザはWebカメラに対応していません。";
const DENIED_MESSAGE: &str =
    "Webカメラにアクセスできませんでした。設定を確認してアクセスを許可してください。";
const CAPTURE_FAILED_MESSAGE: &str = "画像のキャプチャに失敗しました。";

/// id指定でDOM要素を取得して型変換する
fn element_by_id<T: JsCast>(id: &str) -> Result<T, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| format!("要素が見つかりません: {}", id))
}

fn denied(error: JsValue) -> String {
    web_sys::console::error_2(&JsValue::from_str("Webcam access error:"), &error);
    DENIED_MESSAGE.to_string()
}

fn capture_failed(error: JsValue) -> String {
    web_sys::console::error_2(&JsValue::from_str("Capture error:"), &error);
    CAPTURE_FAILED_MESSAGE.to_string()
}

/// Webカメラを起動してビデオ要素にストリームを割り当てる
///
/// 権限拒否・非対応ブラウザの場合はユーザー向けメッセージをErrで返す。
/// 許可ダイアログの結果を一度だけ待ち、タイムアウトや再試行はしない。
pub async fn start_webcam(video_element_id: &str) -> Result<(), String> {
    let video: HtmlVideoElement = element_by_id(video_element_id)?;

    let media_devices = web_sys::window()
        .ok_or_else(|| UNSUPPORTED_MESSAGE.to_string())?
        .navigator()
        .media_devices()
        .map_err(|_| UNSUPPORTED_MESSAGE.to_string())?;

    let mut constraints = MediaStreamConstraints::new();
    constraints.video(&JsValue::TRUE);

    let promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(denied)?;

    let stream: MediaStream = JsFuture::from(promise)
        .await
        .map_err(denied)?
        .dyn_into()
        .map_err(denied)?;

    video.set_src_object(Some(&stream));
    Ok(())
}

/// ビデオの現在フレームをPNGのData URLとしてキャプチャする
///
/// キャンバスはビデオのネイティブ解像度（videoWidth/videoHeight）に
/// 合わせる。ストリーミング中でないビデオに対する結果は未定義。
pub fn capture_frame(video_element_id: &str) -> Result<String, String> {
    let video: HtmlVideoElement = element_by_id(video_element_id)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CAPTURE_FAILED_MESSAGE.to_string())?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(capture_failed)?
        .dyn_into()
        .map_err(|_| CAPTURE_FAILED_MESSAGE.to_string())?;
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(capture_failed)?
        .ok_or_else(|| CAPTURE_FAILED_MESSAGE.to_string())?
        .dyn_into()
        .map_err(|_| CAPTURE_FAILED_MESSAGE.to_string())?;

    context
        .draw_image_with_html_video_element_and_dw_and_dh(
            &video,
            0.0,
            0.0,
            canvas.width() as f64,
            canvas.height() as f64,
        )
        .map_err(capture_failed)?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(capture_failed)?;

    // ストリーム未接続のビデオは0x0のキャンバスになり "data:," が返る
    if !is_image_payload(&data_url) {
        return Err(CAPTURE_FAILED_MESSAGE.to_string());
    }

    Ok(data_url)
}

/// キャプチャ済みの画像ペイロードかどうか（画像Data URLで始まるか）
pub fn is_image_payload(payload: &str) -> bool {
    payload.starts_with(IMAGE_DATA_URL_PREFIX)
}

/// ビューポート幅がしきい値以下ならビデオをモバイルサイズに縮小する
pub fn adjust_video_for_mobile(video_element_id: &str) {
    let Ok(video) = element_by_id::<HtmlVideoElement>(video_element_id) else {
        return;
    };

    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64());

    if let Some(width) = width {
        if is_mobile_viewport(width) {
            video.set_width(MOBILE_VIDEO_WIDTH);
            video.set_height(MOBILE_VIDEO_HEIGHT);
        }
    }
}

/// ビューポート幅がモバイル扱いかどうか
pub fn is_mobile_viewport(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mobile_viewport_narrow() {
        assert!(is_mobile_viewport(320.0));
    }

    #[test]
    fn test_is_mobile_viewport_at_breakpoint() {
        // しきい値ちょうどはモバイル扱い
        assert!(is_mobile_viewport(600.0));
    }

    #[test]
    fn test_is_mobile_viewport_wide() {
        assert!(!is_mobile_viewport(601.0));
        assert!(!is_mobile_viewport(1280.0));
    }

    #[test]
    fn test_is_image_payload_png() {
        assert!(is_image_payload("data:image/png;base64,iVBORw0KGgo="));
    }

    #[test]
    fn test_is_image_payload_rejects_empty() {
        assert!(!is_image_payload(""));
    }

    #[test]
    fn test_is_image_payload_rejects_pixelless_data_url() {
        // 0x0キャンバスのtoDataURLが返す値
        assert!(!is_image_payload("data:,"));
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_canvas_data_url_is_image_payload() {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        canvas.set_width(2);
        canvas.set_height(2);

        let data_url = canvas.to_data_url_with_type("image/png").unwrap();
        assert!(data_url.starts_with("data:image/png"));
        assert!(is_image_payload(&data_url));
    }

    #[wasm_bindgen_test]
    fn wasm_capture_frame_rejects_idle_video() {
        let document = web_sys::window().unwrap().document().unwrap();
        let video = document.create_element("video").unwrap();
        video.set_id("idle-video");
        document.body().unwrap().append_child(&video).unwrap();

        let result = capture_frame("idle-video");
        assert!(result.is_err());

        video.remove();
    }
}
