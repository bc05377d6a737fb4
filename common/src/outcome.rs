//! 送信結果の分類
//!
//! トランスポート層の結果（CallOutcome）を、画面に出す判定（Verdict）へ変換する。
//! I/Oを含まない純粋関数のみ。

use crate::types::{SplitResponse, SplitResult};

/// トランスポート層の失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// 接続できない（サーバー未起動など）
    Network(String),
    /// タイムアウト
    Timeout,
    /// それ以外（非2xxステータス、本文の読み込み失敗など）
    Other(String),
}

/// 1回のAPI呼び出しの結果
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// 2xxでパースできたレスポンス（ステータスは問わない）
    Response(SplitResponse),
    /// 2xxだが本文がパースできない
    Malformed(String),
    /// 呼び出し自体の失敗
    Failed(TransportFailure),
}

/// 失敗の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// レスポンスは来たが成功条件を満たさない
    Protocol,
    /// 接続エラー
    Network,
    /// タイムアウト
    Timeout,
    /// その他のトランスポートエラー
    Transport,
}

/// 送信の最終判定
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Success(SplitResult),
    Failure(FailureKind),
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Verdict::Success(_) => None,
            Verdict::Failure(kind) => Some(*kind),
        }
    }
}

/// 呼び出し結果を判定に変換
///
/// 成功は `status == "ok"` かつ `calculation` ありの場合のみ。
pub fn classify(outcome: CallOutcome) -> Verdict {
    match outcome {
        CallOutcome::Response(response) => {
            let ok = response.is_ok();
            match response.calculation {
                Some(calculation) if ok => Verdict::Success(calculation),
                _ => Verdict::Failure(FailureKind::Protocol),
            }
        }
        CallOutcome::Malformed(_) => Verdict::Failure(FailureKind::Protocol),
        CallOutcome::Failed(TransportFailure::Network(_)) => Verdict::Failure(FailureKind::Network),
        CallOutcome::Failed(TransportFailure::Timeout) => Verdict::Failure(FailureKind::Timeout),
        CallOutcome::Failed(TransportFailure::Other(_)) => Verdict::Failure(FailureKind::Transport),
    }
}
