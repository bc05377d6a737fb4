//! レシート画像の読み込み

use crate::error::{Result, SplitzieError};
use image::ImageFormat;
use splitzie_common::BillImage;
use std::path::Path;
use tracing::debug;

const FALLBACK_MIME: &str = "application/octet-stream";

/// 拡張子からMIMEタイプを推定（不明ならoctet-stream）
pub fn guess_mime_type(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

/// 画像ファイルを読み込む
///
/// 中身が画像かどうかは確認しない。
pub fn load_bill_image(path: &Path) -> Result<BillImage> {
    if !path.is_file() {
        return Err(SplitzieError::FileNotFound(path.display().to_string()));
    }

    let data = std::fs::read(path)
        .map_err(|e| SplitzieError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    let mime_type = guess_mime_type(path);

    debug!("画像を読み込み: {} ({} bytes, {})", file_name, data.len(), mime_type);

    Ok(BillImage::new(file_name, mime_type, data))
}
