//! ログ初期化
//!
//! 利用者向けの出力は println! と通知で行い、診断ログは tracing で stderr に出す。

use tracing_subscriber::{fmt, EnvFilter};

/// サブスクライバを初期化
///
/// RUST_LOG があればそれを使い、なければ `--verbose` で debug、通常は warn。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // テストなどで二重に初期化されても無視する
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
