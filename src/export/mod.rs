//! 割り勘結果の保存
//!
//! - JSON: 画像名・コンテキスト・受信日時つきで保存し、`show` で再表示できる
//! - Excel: excel.rs

pub mod excel;

use crate::error::{Result, SplitzieError};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use splitzie_common::SplitResult;
use std::path::Path;

/// 保存形式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSplit {
    /// 送信した画像のファイル名
    pub image: String,
    /// 送信したコンテキスト
    pub context: String,
    /// 受信日時（RFC3339）
    pub received_at: String,
    pub result: SplitResult,
}

impl SavedSplit {
    pub fn new(image: impl Into<String>, context: impl Into<String>, result: SplitResult) -> Self {
        Self::with_timestamp(image, context, result, Local::now())
    }

    pub fn with_timestamp(
        image: impl Into<String>,
        context: impl Into<String>,
        result: SplitResult,
        received_at: DateTime<Local>,
    ) -> Self {
        Self {
            image: image.into(),
            context: context.into(),
            received_at: received_at.to_rfc3339(),
            result,
        }
    }
}

pub fn save_json(saved: &SavedSplit, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(saved)?;
    std::fs::write(output, json)?;
    Ok(())
}

pub fn load_saved(input: &Path) -> Result<SavedSplit> {
    if !input.is_file() {
        return Err(SplitzieError::FileNotFound(input.display().to_string()));
    }
    let content = std::fs::read_to_string(input)?;
    let saved = serde_json::from_str(&content)?;
    Ok(saved)
}
