//! reqwestによるHTTPクライアント

use super::SplitService;
use crate::error::{Result, SplitzieError};
use reqwest::multipart::{Form, Part};
use splitzie_common::{
    parse_heartbeat_response, parse_split_response, BillImage, CallOutcome, TransportFailure,
};
use std::time::Duration;
use tracing::{debug, info, warn};

const SPLIT_BILL_PATH: &str = "split_bill";
const HEARTBEAT_PATH: &str = "heartbeat";

const FIELD_IMAGE: &str = "image";
const FIELD_CONTEXT: &str = "user_bill_context";

/// 割り勘APIクライアント
#[derive(Debug, Clone)]
pub struct HttpSplitClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSplitClient {
    /// タイムアウトはリクエスト全体（接続から本文の受信まで）の上限
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{path}` を組み立てる（末尾のスラッシュは無視）
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// バックエンドの死活確認
    ///
    /// レスポンスの `status` をそのまま返す（正常なら "ok"）。
    pub async fn heartbeat(&self) -> Result<String> {
        let url = self.endpoint(HEARTBEAT_PATH);
        debug!("POST {}", url);

        let response = self.http.post(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SplitzieError::ApiCall(format!("{} が HTTP {} を返しました", url, status)));
        }

        let body = response.bytes().await?;
        let heartbeat = parse_heartbeat_response(&body)?;
        info!("heartbeat: {}", heartbeat.status);
        Ok(heartbeat.status)
    }

    fn build_form(image: &BillImage, context: &str) -> Form {
        let part = Part::bytes(image.data.clone()).file_name(image.file_name.clone());
        let part = match part.mime_str(&image.mime_type) {
            Ok(part) => part,
            Err(e) => {
                warn!("MIMEタイプが不正のため省略します ({}): {}", image.mime_type, e);
                Part::bytes(image.data.clone()).file_name(image.file_name.clone())
            }
        };

        Form::new()
            .part(FIELD_IMAGE, part)
            .text(FIELD_CONTEXT, context.to_string())
    }
}

/// reqwestのエラーを分類（タイムアウトを接続エラーより優先）
fn transport_failure(error: &reqwest::Error) -> TransportFailure {
    if error.is_timeout() {
        TransportFailure::Timeout
    } else if error.is_connect() {
        TransportFailure::Network(error.to_string())
    } else {
        TransportFailure::Other(error.to_string())
    }
}

impl SplitService for HttpSplitClient {
    async fn split_bill(&self, image: &BillImage, context: &str) -> CallOutcome {
        let url = self.endpoint(SPLIT_BILL_PATH);
        debug!(
            "POST {} (image: {}, {} bytes, {}; context: {} chars)",
            url,
            image.file_name,
            image.len(),
            image.mime_type,
            context.chars().count()
        );

        let form = Self::build_form(image, context);
        let response = match self.http.post(&url).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("リクエスト失敗: {}", e);
                return CallOutcome::Failed(transport_failure(&e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("HTTPエラー: {}", status);
            return CallOutcome::Failed(TransportFailure::Other(format!("HTTP {}", status)));
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!("レスポンス本文の読み込み失敗: {}", e);
                return CallOutcome::Failed(transport_failure(&e));
            }
        };
        debug!("レスポンス: {} bytes", body.len());

        match parse_split_response(&body) {
            Ok(parsed) => {
                debug!("status: {:?}, calculation: {}", parsed.status, parsed.calculation.is_some());
                CallOutcome::Response(parsed)
            }
            Err(e) => {
                warn!("{}", e);
                CallOutcome::Malformed(e.to_string())
            }
        }
    }
}
