//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを作り、ファイルに書き出す

use crate::error::{Result, SplitzieError};
use splitzie_common::export::excel_core::generate_excel_buffer;
use splitzie_common::SplitResult;
use std::path::Path;

pub fn generate_excel(result: &SplitResult, output_path: &Path, currency: &str) -> Result<()> {
    let buffer = generate_excel_buffer(result, currency).map_err(SplitzieError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
