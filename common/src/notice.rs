//! 通知の決定
//!
//! どの通知を出すかだけを決める。表示は呼び出し側（Notifier）が行う。

use crate::outcome::{FailureKind, Verdict};
use crate::state::{SubmitRejection, ValidationError};

pub const MSG_VALIDATION: &str = "Please select an image and provide bill context";
pub const MSG_PROCESSING: &str = "Processing your bill...";
pub const MSG_SUCCESS: &str = "Bill split successfully!";
pub const MSG_PROTOCOL_FAILURE: &str = "Failed to process the bill";
pub const MSG_NETWORK_ERROR: &str = "Network error: Please check if the server is running";
pub const MSG_GENERIC_ERROR: &str = "An error occurred while processing the bill";
pub const MSG_ALREADY_IN_FLIGHT: &str = "Your bill is still being processed";

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// 手動で閉じるまで表示し続ける
    Loading,
    Success,
    Error,
}

/// 利用者に見せる通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Notice {
    const fn new(kind: NoticeKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    /// 送信中の通知
    pub const fn processing() -> Self {
        Self::new(NoticeKind::Loading, MSG_PROCESSING)
    }

    /// 入力不足の通知（画像・コンテキストどちらが欠けても同じ文言）
    pub fn for_validation(_error: &ValidationError) -> Self {
        Self::new(NoticeKind::Error, MSG_VALIDATION)
    }

    pub fn for_rejection(rejection: &SubmitRejection) -> Self {
        match rejection {
            SubmitRejection::Invalid(error) => Self::for_validation(error),
            SubmitRejection::AlreadyInFlight => Self::new(NoticeKind::Error, MSG_ALREADY_IN_FLIGHT),
        }
    }

    /// 判定に対応する通知
    ///
    /// タイムアウトはプロトコルエラーと区別せず汎用メッセージ。
    pub fn for_verdict(verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Success(_) => Self::new(NoticeKind::Success, MSG_SUCCESS),
            Verdict::Failure(FailureKind::Protocol) => {
                Self::new(NoticeKind::Error, MSG_PROTOCOL_FAILURE)
            }
            Verdict::Failure(FailureKind::Network) => {
                Self::new(NoticeKind::Error, MSG_NETWORK_ERROR)
            }
            Verdict::Failure(FailureKind::Timeout | FailureKind::Transport) => {
                Self::new(NoticeKind::Error, MSG_GENERIC_ERROR)
            }
        }
    }
}
