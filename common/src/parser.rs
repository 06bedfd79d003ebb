//! `/match` レスポンス本文の解析
//!
//! サーバはエラー時もJSON（errorフィールド入り）を返すため、
//! 解析とerrorフィールドの判定をここでまとめて行う。

use crate::error::{Error, Result};
use crate::types::MatchResponse;

/// レスポンス本文を解析し、errorフィールドがあればError::Serverへ変換する
pub fn parse_match_response(body: &str) -> Result<MatchResponse> {
    let mut response: MatchResponse = serde_json::from_str(body)?;
    if let Some(message) = response.error.take() {
        return Err(Error::Server(message));
    }
    Ok(response)
}
