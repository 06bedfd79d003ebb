//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 送信フローの失敗を分類する:
/// - Input: 入力不足（リクエスト発行前に検出）
/// - Server: `/match` がerrorフィールドで報告した失敗
/// - Fetch: ネットワーク層の失敗（URL取得・POST送信）
/// - Json: レスポンス本文の解析失敗
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Input(String),

    #[error("{0}")]
    Server(String),

    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_input() {
        let error = Error::Input("Please upload a file or enter an image URL.".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Please upload a file or enter an image URL.");
    }

    #[test]
    fn test_error_display_server() {
        let error = Error::Server("No image received".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "No image received");
    }

    #[test]
    fn test_error_display_fetch() {
        let error = Error::Fetch("NetworkError when attempting to fetch resource".to_string());
        let display = format!("{}", error);
        assert!(display.contains("fetch error"));
        assert!(display.contains("NetworkError"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Server("internal".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Server"));
        assert!(debug.contains("internal"));
    }
}
