//! 顔認識API連携
//!
//! キャプチャ済みのData URLペイロードをJSONでPOSTし、
//! `{"status": ..., "message": ...}` 形式の結果を受け取る。

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 認識エンドポイント（同一オリジン）
pub const RECOGNITION_API_URL: &str = "/real_time_recognition";

/// 認識成功を表すstatus値
pub const STATUS_SUCCESS: &str = "success";

/// 認識リクエスト
#[derive(Serialize)]
pub struct RecognitionRequest {
    pub image: String,
}

/// 認識レスポンス
///
/// バックエンドはエラー時に `{"status":"error","message":...}`、
/// 成功時に `{"status":"success","name":...,"confidence":...}` を返す
/// 実装もあるため、messageとnameはどちらも任意とする。
#[derive(Deserialize)]
pub struct RecognitionResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl RecognitionResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// 表示用メッセージ（message優先、なければname）
    pub fn notice_text(&self) -> &str {
        self.message
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("（メッセージなし）")
    }
}

/// ペイロードを認識エンドポイントへPOSTする
///
/// HTTPステータスコードは見ない。エラー応答もJSONボディで返るため、
/// JSONとして解釈できたレスポンスはstatusフィールドで成否を判定する。
pub async fn recognize(api_url: &str, image_data: &str) -> Result<RecognitionResponse, JsValue> {
    let body = serde_json::to_string(&RecognitionRequest {
        image: image_data.to_string(),
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(&body)));

    let request = Request::new_with_str_and_init(api_url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let json = JsFuture::from(resp.json()?).await?;
    let response: RecognitionResponse = serde_wasm_bindgen::from_value(json)?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // リクエスト/レスポンス シリアライズテスト
    // =============================================

    #[test]
    fn test_recognition_request_serialize() {
        let request = RecognitionRequest {
            image: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        };

        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"image":"data:image/png;base64,iVBORw0KGgo="}"#);
    }

    #[test]
    fn test_recognition_response_deserialize_success() {
        // 成功時はname/confidenceを返すバックエンドがある
        let json = r#"{"status":"success","name":"Taro","confidence":42.5}"#;

        let response: RecognitionResponse =
            serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(response.is_success());
        assert_eq!(response.notice_text(), "Taro");
    }

    #[test]
    fn test_recognition_response_deserialize_error() {
        let json = r#"{"status":"error","message":"No faces detected."}"#;

        let response: RecognitionResponse =
            serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(!response.is_success());
        assert_eq!(response.notice_text(), "No faces detected.");
    }

    #[test]
    fn test_is_success_requires_exact_status() {
        let json = r#"{"status":"Success","message":"OK"}"#;

        let response: RecognitionResponse =
            serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(!response.is_success());
    }

    #[test]
    fn test_notice_text_prefers_message() {
        let response = RecognitionResponse {
            status: "success".to_string(),
            message: Some("OK".to_string()),
            name: Some("Taro".to_string()),
        };

        assert_eq!(response.notice_text(), "OK");
    }

    #[test]
    fn test_notice_text_fallback_when_empty() {
        let response = RecognitionResponse {
            status: "error".to_string(),
            message: None,
            name: None,
        };

        assert_eq!(response.notice_text(), "（メッセージなし）");
    }
}
