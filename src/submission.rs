//! 割り勘フォームの送信処理
//!
//! 状態（SubmissionState）の遷移と、サービス呼び出し・通知表示をつなぐ。
//! submit() は失敗をエラーとして返さず、必ず読み込み中を解除して戻る。

use crate::client::SplitService;
use crate::notifier::Notifier;
use splitzie_common::{
    classify, BillImage, Notice, SplitResult, SubmissionState, SubmitRejection, Verdict,
};
use tracing::{debug, info, warn};

/// submit() の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitReport {
    /// 送信しなかった（入力不足・送信中）
    Rejected(SubmitRejection),
    /// 送信して判定まで終わった
    Completed(Verdict),
}

impl SubmitReport {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitReport::Completed(v) if v.is_success())
    }

    /// 最後に表示した通知（拒否・成功・失敗）
    pub fn notice(&self) -> Notice {
        match self {
            SubmitReport::Rejected(rejection) => Notice::for_rejection(rejection),
            SubmitReport::Completed(verdict) => Notice::for_verdict(verdict),
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            SubmitReport::Completed(verdict) => Some(verdict),
            SubmitReport::Rejected(_) => None,
        }
    }
}

pub struct BillSplitSubmission<S, N> {
    service: S,
    notifier: N,
    state: SubmissionState,
}

impl<S: SplitService, N: Notifier> BillSplitSubmission<S, N> {
    pub fn new(service: S, notifier: N) -> Self {
        Self {
            service,
            notifier,
            state: SubmissionState::new(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn last_result(&self) -> Option<&SplitResult> {
        self.state.last_result()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn select_image(&mut self, image: BillImage) {
        debug!("画像を選択: {}", image.file_name);
        self.state = std::mem::take(&mut self.state).with_image(image);
    }

    pub fn edit_context(&mut self, text: impl Into<String>) {
        self.state = std::mem::take(&mut self.state).with_context(text);
    }

    /// 画像とコンテキストを送信する
    pub async fn submit(&mut self) -> SubmitReport {
        let (in_flight, pending) = match self.state.request_submit() {
            Ok(next) => next,
            Err(rejection) => {
                info!("送信しません: {}", rejection);
                self.notifier.show(&Notice::for_rejection(&rejection));
                return SubmitReport::Rejected(rejection);
            }
        };

        self.state = in_flight;
        let loading = self.notifier.loading(&Notice::processing());

        let outcome = self.service.split_bill(&pending.image, &pending.context).await;
        let verdict = classify(outcome);
        match verdict.failure_kind() {
            None => info!("割り勘成功"),
            Some(kind) => info!("割り勘失敗: {:?}", kind),
        }

        // ここから先は判定に関わらず必ず通る
        self.finish(&verdict);
        self.notifier.dismiss(loading);
        self.notifier.show(&Notice::for_verdict(&verdict));

        SubmitReport::Completed(verdict)
    }

    /// InFlight → Succeeded/Failed → Idle
    fn finish(&mut self, verdict: &Verdict) {
        let current = std::mem::take(&mut self.state);
        let phase = current.phase();
        self.state = match current.complete(verdict).and_then(SubmissionState::settle) {
            Ok(next) => next,
            Err(e) => {
                warn!("状態遷移に失敗 (phase: {:?}): {}", phase, e);
                SubmissionState::new()
            }
        };
    }
}
