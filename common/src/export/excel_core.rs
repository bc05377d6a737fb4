//! Excel生成（共通ライブラリ）
//!
//! 1シートに「名前 / 金額 / 共有品目」の表と合計行を書き出す。

use crate::render::render;
use crate::types::SplitResult;
use rust_xlsxwriter::*;

const NAME_COL_WIDTH: f64 = 18.0;
const AMOUNT_COL_WIDTH: f64 = 14.0;
const ITEMS_COL_WIDTH: f64 = 36.0;

/// Excelをバッファに生成
///
/// # Arguments
/// * `result` - 割り勘結果
/// * `currency` - 通貨記号（金額セルの表示形式に使う）
pub fn generate_excel_buffer(result: &SplitResult, currency: &str) -> Result<Vec<u8>, String> {
    let rendered = render(result, currency);
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    // 数値のまま保存し、表示だけ通貨記号付きにする
    let amount_format = Format::new()
        .set_num_format(format!("\"{}\"0.00", currency))
        .set_align(FormatAlign::Top)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let total_label_format = Format::new().set_bold().set_align(FormatAlign::Right);
    let total_format = Format::new()
        .set_bold()
        .set_num_format(format!("\"{}\"0.00", currency));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Split")
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    worksheet
        .set_column_width(0, NAME_COL_WIDTH)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;
    worksheet
        .set_column_width(1, AMOUNT_COL_WIDTH)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;
    worksheet
        .set_column_width(2, ITEMS_COL_WIDTH)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;

    for (col, header) in rendered.headers().iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, header, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }

    let mut row: u32 = 1;
    for person in &result.per_person_split {
        worksheet
            .write_string_with_format(row, 0, &person.name, &text_format)
            .map_err(|e| format!("名前書き込みエラー: {}", e))?;
        worksheet
            .write_number_with_format(row, 1, person.amount, &amount_format)
            .map_err(|e| format!("金額書き込みエラー: {}", e))?;
        worksheet
            .write_string_with_format(row, 2, person.shared_items.join("\n"), &text_format)
            .map_err(|e| format!("品目書き込みエラー: {}", e))?;
        row += 1;
    }

    worksheet
        .write_string_with_format(row, 0, "Total Amount", &total_label_format)
        .map_err(|e| format!("合計書き込みエラー: {}", e))?;
    worksheet
        .write_number_with_format(row, 1, result.total_amount, &total_format)
        .map_err(|e| format!("合計書き込みエラー: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
