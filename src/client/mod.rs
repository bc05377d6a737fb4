//! 割り勘サービスとの通信
//!
//! SplitService は送信処理から見たサービスの境界。
//! 本番は HttpSplitClient、テストでは台本どおりに応答する実装に差し替える。

mod http;

pub use http::HttpSplitClient;

use splitzie_common::{BillImage, CallOutcome};
use std::future::Future;

/// 割り勘サービス
pub trait SplitService {
    /// 画像とコンテキストを送って結果を受け取る
    ///
    /// 失敗もエラーではなく CallOutcome として返す。
    fn split_bill(
        &self,
        image: &BillImage,
        context: &str,
    ) -> impl Future<Output = CallOutcome> + Send;
}
