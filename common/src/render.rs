//! 割り勘結果の表示用変換
//!
//! SplitResult を表の行と合計行に変換する。副作用なし。

use crate::types::SplitResult;
use std::fmt;

/// デフォルトの通貨記号
pub const DEFAULT_CURRENCY: &str = "₹";

const ITEM_BULLET: &str = "• ";
const NO_ITEMS: &str = "-";

/// 金額を「記号 + 小数2桁」で整形
///
/// ちょうど半分の端数は0から遠い方へ丸める（12.125 → 12.13）。
///
/// ```
/// use splitzie_common::render::format_amount;
///
/// assert_eq!(format_amount(100.0, "₹"), "₹100.00");
/// assert_eq!(format_amount(2.5, "$"), "$2.50");
/// ```
pub fn format_amount(amount: f64, currency: &str) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let mut digits = format!("{:.2}", rounded);
    if digits == "-0.00" {
        digits.remove(0);
    }
    format!("{}{}", currency, digits)
}

/// 表の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub name: String,
    pub amount: String,
    pub shared_items: Vec<String>,
}

/// 表示用に変換した結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSplit {
    pub currency: String,
    pub rows: Vec<RenderedRow>,
    pub total: String,
}

/// 結果を表示用に変換
pub fn render(result: &SplitResult, currency: &str) -> RenderedSplit {
    let rows = result
        .per_person_split
        .iter()
        .map(|person| RenderedRow {
            name: person.name.clone(),
            amount: format_amount(person.amount, currency),
            shared_items: person.shared_items.clone(),
        })
        .collect();

    RenderedSplit {
        currency: currency.to_string(),
        rows,
        total: format_amount(result.total_amount, currency),
    }
}

/// 結果がなければ何も描画しない
pub fn render_optional(result: Option<&SplitResult>, currency: &str) -> Option<RenderedSplit> {
    result.map(|r| render(r, currency))
}

impl RenderedSplit {
    pub fn headers(&self) -> [String; 3] {
        [
            "Name".to_string(),
            format!("Amount ({})", self.currency),
            "Shared Items".to_string(),
        ]
    }

    pub fn total_line(&self) -> String {
        format!("Total Amount: {}", self.total)
    }

    /// テキストの表を生成（品目は1行に1つ）
    pub fn to_table(&self) -> String {
        let headers = self.headers();

        let item_lines = |row: &RenderedRow| -> Vec<String> {
            if row.shared_items.is_empty() {
                vec![NO_ITEMS.to_string()]
            } else {
                row.shared_items
                    .iter()
                    .map(|item| format!("{}{}", ITEM_BULLET, item))
                    .collect()
            }
        };

        let name_width = self
            .rows
            .iter()
            .map(|r| r.name.chars().count())
            .chain(std::iter::once(headers[0].chars().count()))
            .max()
            .unwrap_or(0);
        let amount_width = self
            .rows
            .iter()
            .map(|r| r.amount.chars().count())
            .chain(std::iter::once(headers[1].chars().count()))
            .max()
            .unwrap_or(0);
        let items_width = self
            .rows
            .iter()
            .flat_map(|r| item_lines(r))
            .map(|line| line.chars().count())
            .chain(std::iter::once(headers[2].chars().count()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!(
            "{:<nw$} | {:<aw$} | {}\n",
            headers[0],
            headers[1],
            headers[2],
            nw = name_width,
            aw = amount_width,
        ));
        out.push_str(&format!(
            "{}-+-{}-+-{}\n",
            "-".repeat(name_width),
            "-".repeat(amount_width),
            "-".repeat(items_width),
        ));

        for row in &self.rows {
            for (i, line) in item_lines(row).iter().enumerate() {
                let (name, amount) = if i == 0 {
                    (row.name.as_str(), row.amount.as_str())
                } else {
                    ("", "")
                };
                out.push_str(&format!(
                    "{:<nw$} | {:<aw$} | {}\n",
                    name,
                    amount,
                    line,
                    nw = name_width,
                    aw = amount_width,
                ));
            }
        }

        out.push_str(&self.total_line());
        out
    }
}

impl fmt::Display for RenderedSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_table())
    }
}
