//! 送信処理のテスト
//!
//! 台本どおりに応答するサービスと RecordingNotifier を使い、
//! 状態遷移と通知を検証する

use splitzie::client::SplitService;
use splitzie::notifier::{NoticeEvent, RecordingNotifier};
use splitzie::submission::{BillSplitSubmission, SubmitReport};
use splitzie_common::notice::{
    MSG_GENERIC_ERROR, MSG_NETWORK_ERROR, MSG_PROCESSING, MSG_PROTOCOL_FAILURE, MSG_SUCCESS,
    MSG_VALIDATION,
};
use splitzie_common::{
    render, BillImage, CallOutcome, FailureKind, PersonShare, Phase, SplitResponse, SplitResult,
    SubmitRejection, TransportFailure, ValidationError, Verdict, DEFAULT_CURRENCY,
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// 順番に決まった結果を返すサービス
#[derive(Default)]
struct ScriptedService {
    outcomes: Mutex<VecDeque<CallOutcome>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedService {
    fn with(outcomes: Vec<CallOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl SplitService for ScriptedService {
    async fn split_bill(&self, image: &BillImage, context: &str) -> CallOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((image.file_name.clone(), context.to_string()));
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(CallOutcome::Failed(TransportFailure::Timeout))
    }
}

fn receipt() -> BillImage {
    BillImage::new("receipt.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0])
}

fn share(name: &str, amount: f64, items: &[&str]) -> PersonShare {
    PersonShare {
        name: name.to_string(),
        amount,
        shared_items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn pizza_split() -> SplitResult {
    SplitResult {
        total_amount: 300.0,
        per_person_split: vec![
            share("Alice", 100.0, &["pizza"]),
            share("Bob", 100.0, &["pizza"]),
            share("Carol", 100.0, &["pizza"]),
        ],
        shared_item_counts: Default::default(),
    }
}

fn ok_response(result: SplitResult) -> CallOutcome {
    CallOutcome::Response(SplitResponse {
        status: "ok".into(),
        calculation: Some(result),
        split_bill: None,
    })
}

fn new_submission(outcomes: Vec<CallOutcome>) -> BillSplitSubmission<ScriptedService, RecordingNotifier> {
    BillSplitSubmission::new(ScriptedService::with(outcomes), RecordingNotifier::new())
}

/// 画像なしでは送信しない
#[tokio::test]
async fn test_missing_image_makes_no_request() {
    let mut submission = new_submission(vec![ok_response(pizza_split())]);
    submission.edit_context("test");

    let report = submission.submit().await;

    assert_eq!(
        report,
        SubmitReport::Rejected(SubmitRejection::Invalid(ValidationError::MissingImage))
    );
    assert_eq!(submission.service().call_count(), 0);
    assert_eq!(submission.notifier().shown_messages(), vec![MSG_VALIDATION]);
    assert!(submission.notifier().active_loading().is_empty());
    assert_eq!(submission.state().phase(), Phase::Idle);
    assert!(submission.last_result().is_none());
}

/// 拒否・失敗どちらも表示した通知と同じ文言を返す
#[tokio::test]
async fn test_report_notice_matches_shown_message() {
    let mut submission = new_submission(vec![CallOutcome::Failed(TransportFailure::Network(
        "connection refused".into(),
    ))]);
    submission.select_image(receipt());

    let rejected = submission.submit().await;
    assert_eq!(rejected.notice().message, MSG_VALIDATION);

    submission.edit_context("split evenly");
    let failed = submission.submit().await;
    assert_eq!(failed.notice().message, MSG_NETWORK_ERROR);

    assert_eq!(
        submission.notifier().shown_messages(),
        vec![MSG_VALIDATION, MSG_NETWORK_ERROR]
    );
}

/// 空のコンテキストでは送信しない
#[tokio::test]
async fn test_empty_context_makes_no_request() {
    let mut submission = new_submission(vec![ok_response(pizza_split())]);
    submission.select_image(receipt());
    submission.edit_context("");

    let report = submission.submit().await;

    assert!(matches!(
        report,
        SubmitReport::Rejected(SubmitRejection::Invalid(ValidationError::MissingContext))
    ));
    assert_eq!(submission.service().call_count(), 0);
    assert_eq!(submission.notifier().shown_messages(), vec![MSG_VALIDATION]);
}

/// 3人で均等割り
#[tokio::test]
async fn test_successful_split_is_stored_and_rendered() {
    let mut submission = new_submission(vec![ok_response(pizza_split())]);
    submission.select_image(receipt());
    submission.edit_context("split evenly among 3 people");

    let report = submission.submit().await;

    assert!(report.is_success());
    assert_eq!(submission.last_result(), Some(&pizza_split()));
    assert!(!submission.state().is_loading());
    assert_eq!(submission.state().phase(), Phase::Idle);

    let calls = submission.service().calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![("receipt.jpg".to_string(), "split evenly among 3 people".to_string())]
    );

    // loading → dismiss → success の順
    let events = &submission.notifier().events;
    assert_eq!(events.len(), 3);
    let loading_id = match &events[0] {
        NoticeEvent::Loading(id, notice) => {
            assert_eq!(notice.message, MSG_PROCESSING);
            *id
        }
        other => panic!("最初はloading通知のはず: {:?}", other),
    };
    assert_eq!(events[1], NoticeEvent::Dismissed(loading_id));
    assert_eq!(submission.notifier().shown_messages(), vec![MSG_SUCCESS]);

    let rendered = render(submission.last_result().unwrap(), DEFAULT_CURRENCY);
    assert_eq!(rendered.total, "₹300.00");
    assert_eq!(rendered.rows.len(), 3);
    assert!(rendered.rows.iter().all(|row| row.amount == "₹100.00"));
}

/// 成功条件を満たさないレスポンスでは前回の結果を残す
#[tokio::test]
async fn test_soft_failure_keeps_previous_result() {
    let mut submission = new_submission(vec![
        ok_response(pizza_split()),
        CallOutcome::Response(SplitResponse {
            status: "error".into(),
            calculation: None,
            split_bill: None,
        }),
        CallOutcome::Response(SplitResponse {
            status: "ok".into(),
            calculation: None,
            split_bill: None,
        }),
        CallOutcome::Malformed("expected value at line 1 column 1".into()),
    ]);
    submission.select_image(receipt());
    submission.edit_context("split evenly among 3 people");

    assert!(submission.submit().await.is_success());

    submission.edit_context("Alice had no pizza");
    for _ in 0..3 {
        let report = submission.submit().await;
        assert_eq!(
            report.verdict(),
            Some(&Verdict::Failure(FailureKind::Protocol))
        );
        assert_eq!(submission.last_result(), Some(&pizza_split()));
        assert!(!submission.state().is_loading());
    }

    assert_eq!(
        submission.notifier().shown_messages(),
        vec![MSG_SUCCESS, MSG_PROTOCOL_FAILURE, MSG_PROTOCOL_FAILURE, MSG_PROTOCOL_FAILURE]
    );
    assert!(submission.notifier().active_loading().is_empty());
}

/// 接続エラーはネットワーク用のメッセージ
#[tokio::test]
async fn test_network_error_message_and_cleanup() {
    let mut submission = new_submission(vec![CallOutcome::Failed(TransportFailure::Network(
        "connection refused".into(),
    ))]);
    submission.select_image(receipt());
    submission.edit_context("split evenly");

    let report = submission.submit().await;

    assert_eq!(report.verdict(), Some(&Verdict::Failure(FailureKind::Network)));
    assert_eq!(submission.notifier().shown_messages(), vec![MSG_NETWORK_ERROR]);
    assert!(!submission.state().is_loading());
    assert!(submission.notifier().active_loading().is_empty());
    assert!(submission.last_result().is_none());
}

/// タイムアウト・その他の失敗は汎用メッセージで、後始末は同じ
#[tokio::test]
async fn test_timeout_and_transport_errors_are_generic() {
    let mut submission = new_submission(vec![
        CallOutcome::Failed(TransportFailure::Timeout),
        CallOutcome::Failed(TransportFailure::Other("HTTP 502 Bad Gateway".into())),
    ]);
    submission.select_image(receipt());
    submission.edit_context("split evenly");

    let first = submission.submit().await;
    let second = submission.submit().await;

    assert_eq!(first.verdict(), Some(&Verdict::Failure(FailureKind::Timeout)));
    assert_eq!(second.verdict(), Some(&Verdict::Failure(FailureKind::Transport)));
    assert_eq!(
        submission.notifier().shown_messages(),
        vec![MSG_GENERIC_ERROR, MSG_GENERIC_ERROR]
    );
    assert!(submission.notifier().active_loading().is_empty());
    assert_eq!(submission.service().call_count(), 2);
}

/// 自動リトライはしない
#[tokio::test]
async fn test_no_automatic_retry() {
    let mut submission = new_submission(vec![
        CallOutcome::Failed(TransportFailure::Timeout),
        ok_response(pizza_split()),
    ]);
    submission.select_image(receipt());
    submission.edit_context("split evenly");

    submission.submit().await;
    assert_eq!(submission.service().call_count(), 1);
    assert!(submission.last_result().is_none());

    // 利用者が再送信すれば2回目の応答を受け取る
    assert!(submission.submit().await.is_success());
    assert_eq!(submission.service().call_count(), 2);
}

/// 新しい結果は前回の結果を置き換える
#[tokio::test]
async fn test_new_result_replaces_previous() {
    let uneven = SplitResult {
        total_amount: 150.0,
        per_person_split: vec![share("Alice", 100.0, &["pizza", "coke"]), share("Bob", 50.0, &["pizza"])],
        shared_item_counts: Default::default(),
    };
    let mut submission = new_submission(vec![ok_response(pizza_split()), ok_response(uneven.clone())]);
    submission.select_image(receipt());
    submission.edit_context("split evenly");

    submission.submit().await;
    submission.select_image(BillImage::new("second.png", "image/png", vec![1, 2]));
    submission.submit().await;

    assert_eq!(submission.last_result(), Some(&uneven));
    let calls = submission.service().calls.lock().unwrap().clone();
    assert_eq!(calls[1].0, "second.png");
}
