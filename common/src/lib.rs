//! Splitzie Common Library
//!
//! CLIから使うI/Oなしのコア:
//! 型、レスポンスパーサー、送信の状態機械、通知の決定、結果の表示変換

pub mod types;
pub mod error;
pub mod parser;
pub mod outcome;
pub mod state;
pub mod notice;
pub mod render;
pub mod export;

pub use types::{
    BillImage, HeartbeatResponse, PersonShare, SplitBill, SplitResponse, SplitResult, STATUS_OK,
};
pub use error::{Error, Result};
pub use parser::{parse_heartbeat_response, parse_split_response};
pub use outcome::{classify, CallOutcome, FailureKind, TransportFailure, Verdict};
pub use state::{PendingSubmission, Phase, StateError, SubmissionState, SubmitRejection, ValidationError};
pub use notice::{Notice, NoticeKind};
pub use render::{format_amount, render, render_optional, RenderedRow, RenderedSplit, DEFAULT_CURRENCY};
