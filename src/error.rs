use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("入力エラー: {0}")]
    Input(String),

    #[error("引数エラー: {0}")]
    Usage(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSVエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Common(#[from] onto_coverage_common::Error),
}

pub type Result<T> = std::result::Result<T, CoverageError>;
