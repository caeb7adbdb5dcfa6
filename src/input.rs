//! 入力ファイル読み込み
//!
//! - テキストファイル（抽出済みのプレーンテキスト）
//! - 固定キーワードCSV（Keyword,Score）

use crate::error::{CoverageError, Result};
use onto_coverage_common::FixedKeywords;
use std::path::Path;

const KEYWORD_COLUMN: &str = "Keyword";
const SCORE_COLUMN: &str = "Score";

/// テキストファイルを読み込み
pub fn read_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(CoverageError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// 固定キーワードCSVを読み込み
///
/// 列順は問わない。同じキーワードは後のスコアで上書き（位置は最初のまま）。
pub fn load_fixed_keywords(path: &Path) -> Result<FixedKeywords> {
    if !path.is_file() {
        return Err(CoverageError::FileNotFound(path.display().to_string()));
    }
    let reader = csv::Reader::from_path(path)?;
    parse_fixed_keywords(reader, &path.display().to_string())
}

/// CSV文字列から読み込み
pub fn parse_fixed_keywords_str(content: &str) -> Result<FixedKeywords> {
    parse_fixed_keywords(csv::Reader::from_reader(content.as_bytes()), "<memory>")
}

fn parse_fixed_keywords<R: std::io::Read>(
    mut reader: csv::Reader<R>,
    source: &str,
) -> Result<FixedKeywords> {
    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| CoverageError::Input(format!("{}: 列 '{}' がありません", source, name)))
    };
    let keyword_idx = column(KEYWORD_COLUMN)?;
    let score_idx = column(SCORE_COLUMN)?;

    let mut keywords = FixedKeywords::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let keyword = record.get(keyword_idx).unwrap_or_default();
        let raw_score = record.get(score_idx).unwrap_or_default().trim();
        let score: f64 = raw_score.parse().map_err(|_| {
            CoverageError::Input(format!(
                "{}: {}行目のスコアが数値ではありません: '{}'",
                source,
                line + 2,
                raw_score
            ))
        })?;
        if !score.is_finite() {
            return Err(CoverageError::Input(format!(
                "{}: {}行目のスコアが有限の数値ではありません: '{}'",
                source,
                line + 2,
                raw_score
            )));
        }
        keywords.insert(keyword, score);
    }

    tracing::debug!(source, count = keywords.len(), "固定キーワード読み込み完了");
    Ok(keywords)
}
