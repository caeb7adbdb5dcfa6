//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// オントロジーが存在しない、またはパースできない
    #[error("Failed to load ontology '{path}': {message}")]
    Load { path: String, message: String },

    /// 結果の書き出しに失敗
    #[error("Output error: {0}")]
    Output(String),

    #[error("No comparison rows: enable at least one extraction method or supply custom keywords")]
    EmptyComparison,
}

impl Error {
    pub fn load(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Error::Load {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
