//! 送信フォームの状態機械
//!
//! ```text
//! Idle --request_submit--> (検証NG: 状態は変わらず Idle)
//! Idle --request_submit--> InFlight --complete--> Succeeded --settle--> Idle
//!                                   --complete--> Failed    --settle--> Idle
//! ```
//!
//! 状態は値として扱い、遷移ごとに新しい SubmissionState を返す。
//! 不正な遷移は StateError になる。

use crate::outcome::Verdict;
use crate::types::{BillImage, SplitResult};
use thiserror::Error;

/// 送信フェーズ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// 入力検証エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("bill image is not selected")]
    MissingImage,

    #[error("bill context is empty")]
    MissingContext,
}

/// 送信を受け付けなかった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),

    #[error("a submission is already in flight")]
    AlreadyInFlight,
}

/// 不正な状態遷移
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("call completed while not in flight (phase: {0:?})")]
    NotInFlight(Phase),

    #[error("nothing to settle (phase: {0:?})")]
    NotSettleable(Phase),
}

/// 送信に使う入力のスナップショット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub image: BillImage,
    pub context: String,
}

/// フォームの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    selected_image: Option<BillImage>,
    bill_context: String,
    phase: Phase,
    last_result: Option<SplitResult>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_image(&self) -> Option<&BillImage> {
        self.selected_image.as_ref()
    }

    pub fn bill_context(&self) -> &str {
        &self.bill_context
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_result(&self) -> Option<&SplitResult> {
        self.last_result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::InFlight
    }

    /// 画像を選択（以前の画像は置き換え）
    pub fn with_image(self, image: BillImage) -> Self {
        Self {
            selected_image: Some(image),
            ..self
        }
    }

    /// コンテキストをそのまま保存
    pub fn with_context(self, text: impl Into<String>) -> Self {
        Self {
            bill_context: text.into(),
            ..self
        }
    }

    /// 画像と空でないコンテキストが揃っているか
    ///
    /// 空白だけのコンテキストは空とみなさない。
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.selected_image.is_none() {
            return Err(ValidationError::MissingImage);
        }
        if self.bill_context.is_empty() {
            return Err(ValidationError::MissingContext);
        }
        Ok(())
    }

    /// 送信開始: Idle → InFlight
    ///
    /// 拒否された場合、呼び出し側は元の状態をそのまま使い続ける。
    pub fn request_submit(&self) -> Result<(Self, PendingSubmission), SubmitRejection> {
        if self.is_loading() {
            return Err(SubmitRejection::AlreadyInFlight);
        }
        self.validate()?;

        let image = self
            .selected_image
            .clone()
            .ok_or(SubmitRejection::Invalid(ValidationError::MissingImage))?;
        let pending = PendingSubmission {
            image,
            context: self.bill_context.clone(),
        };

        let next = Self {
            phase: Phase::InFlight,
            ..self.clone()
        };
        Ok((next, pending))
    }

    /// 呼び出し完了: InFlight → Succeeded / Failed
    ///
    /// 失敗時は last_result を変更しない。
    pub fn complete(self, verdict: &Verdict) -> Result<Self, StateError> {
        if self.phase != Phase::InFlight {
            return Err(StateError::NotInFlight(self.phase));
        }

        Ok(match verdict {
            Verdict::Success(result) => Self {
                phase: Phase::Succeeded,
                last_result: Some(result.clone()),
                ..self
            },
            Verdict::Failure(_) => Self {
                phase: Phase::Failed,
                ..self
            },
        })
    }

    /// 後始末: Succeeded / Failed → Idle
    pub fn settle(self) -> Result<Self, StateError> {
        match self.phase {
            Phase::Succeeded | Phase::Failed => Ok(Self {
                phase: Phase::Idle,
                ..self
            }),
            other => Err(StateError::NotSettleable(other)),
        }
    }
}
