//! 割り勘APIの型定義
//!
//! - BillImage: 送信するレシート画像
//! - SplitResponse: `/split_bill` のレスポンス全体
//! - SplitResult / PersonShare: 計算結果（`calculation`）
//! - SplitBill: バックエンドが抽出した品目・人・割当（参考情報）

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// 成功を表すステータス値
pub const STATUS_OK: &str = "ok";

/// 選択されたレシート画像
///
/// 種類やサイズの検証はしない。そのままマルチパートで送る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillImage {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl BillImage {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// 1人分の負担額
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonShare {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub shared_items: Vec<String>,
}

/// 割り勘の計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    pub total_amount: f64,
    pub per_person_split: Vec<PersonShare>,

    /// 品目ごとの共有人数（古いバックエンドは返さない）
    #[serde(default, deserialize_with = "lenient_map", skip_serializing_if = "BTreeMap::is_empty")]
    pub shared_item_counts: BTreeMap<String, u32>,
}

impl SplitResult {
    pub fn person(&self, name: &str) -> Option<&PersonShare> {
        self.per_person_split.iter().find(|p| p.name == name)
    }
}

/// バックエンドが読み取った品目と価格
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillItems {
    pub items: BTreeMap<String, f64>,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct People {
    pub people: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assignment {
    pub assignment: BTreeMap<String, Vec<String>>,
}

/// 計算前の中間データ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitBill {
    pub bill_item: BillItems,
    pub person: People,
    pub mapping: Assignment,
}

/// `/split_bill` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitResponse {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub calculation: Option<SplitResult>,

    /// 形が崩れていても None として扱い、レスポンス全体は棄却しない
    #[serde(default, deserialize_with = "lenient_option")]
    pub split_bill: Option<SplitBill>,
}

impl SplitResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// `/heartbeat` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeartbeatResponse {
    #[serde(default)]
    pub status: String,
}

fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn lenient_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_option(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_response_full() {
        let json = r#"{
            "status": "ok",
            "split_bill": {
                "bill_item": {"items": {"pizza": 300.0}, "currency": "Rupees"},
                "person": {"people": ["Alice", "Bob", "Carol"]},
                "mapping": {"assignment": {"Alice": ["pizza"], "Bob": ["pizza"], "Carol": ["pizza"]}}
            },
            "calculation": {
                "per_person_split": [
                    {"name": "Alice", "amount": 100.0, "shared_items": ["pizza"]},
                    {"name": "Bob", "amount": 100.0, "shared_items": ["pizza"]},
                    {"name": "Carol", "amount": 100.0, "shared_items": ["pizza"]}
                ],
                "total_amount": 300.0,
                "shared_item_counts": {"pizza": 3}
            }
        }"#;
        let response: SplitResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_ok());

        let calc = response.calculation.unwrap();
        assert_eq!(calc.per_person_split.len(), 3);
        assert_eq!(calc.shared_item_counts.get("pizza"), Some(&3));
        assert_eq!(calc.person("Bob").map(|p| p.amount), Some(100.0));

        let bill = response.split_bill.unwrap();
        assert_eq!(bill.bill_item.currency, "Rupees");
        assert_eq!(bill.person.people.len(), 3);
    }

    #[test]
    fn test_split_response_error_status() {
        let json = r#"{"status": "error", "split_bill": null, "calculation": null}"#;
        let response: SplitResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_ok());
        assert!(response.calculation.is_none());
        assert!(response.split_bill.is_none());
    }

    #[test]
    fn test_malformed_split_bill_is_ignored() {
        let json = r#"{
            "status": "ok",
            "split_bill": "not an object",
            "calculation": {"per_person_split": [], "total_amount": 0.0, "shared_item_counts": [1, 2]}
        }"#;
        let response: SplitResponse = serde_json::from_str(json).unwrap();
        assert!(response.split_bill.is_none());
        assert!(response.calculation.unwrap().shared_item_counts.is_empty());
    }

    #[test]
    fn test_shared_item_counts_skipped_when_empty() {
        let result = SplitResult {
            total_amount: 10.0,
            per_person_split: vec![],
            shared_item_counts: BTreeMap::new(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("shared_item_counts"));
    }

    #[test]
    fn test_bill_image_len() {
        let image = BillImage::new("receipt.jpg", "image/jpeg", vec![1, 2, 3]);
        assert_eq!(image.len(), 3);
        assert!(!image.is_empty());
    }
}
