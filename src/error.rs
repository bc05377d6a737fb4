use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitzieError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),

    #[error("割り勘に失敗しました: {0}")]
    SubmissionFailed(String),

    #[error(transparent)]
    Common(#[from] splitzie_common::Error),
}

pub type Result<T> = std::result::Result<T, SplitzieError>;
