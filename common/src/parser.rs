//! APIレスポンスパーサー
//!
//! `/split_bill` と `/heartbeat` のレスポンス本文をパースする。
//! ステータスの判定はここでは行わない（outcome::classify を参照）。

use crate::error::{Error, Result};
use crate::types::{HeartbeatResponse, SplitResponse};

/// `/split_bill` のレスポンス本文をパース
///
/// JSONオブジェクトでない本文や `calculation` の形が崩れている本文はエラー。
///
/// # Examples
/// ```
/// use splitzie_common::parse_split_response;
///
/// let body = br#"{"status": "error", "calculation": null}"#;
/// let response = parse_split_response(body).unwrap();
/// assert_eq!(response.status, "error");
/// ```
pub fn parse_split_response(body: &[u8]) -> Result<SplitResponse> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(Error::Parse("レスポンス本文が空です".into()));
    }

    serde_json::from_slice(body)
        .map_err(|e| Error::Parse(format!("split_bill JSONパースエラー: {}", e)))
}

/// `/heartbeat` のレスポンス本文をパース
pub fn parse_heartbeat_response(body: &[u8]) -> Result<HeartbeatResponse> {
    serde_json::from_slice(body)
        .map_err(|e| Error::Parse(format!("heartbeat JSONパースエラー: {}", e)))
}
