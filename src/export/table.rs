//! CSV出力
//!
//! ヘッダー行は0件でも必ず出力する。インデックス列なし。

use crate::error::Result;
use onto_coverage_common::{ComparisonRow, MatchRow, ResultSink, ScoredKeyword};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 比較表・一致表をCSVファイルに書き出す出力先
#[derive(Debug, Clone)]
pub struct CsvSink {
    comparison_path: PathBuf,
    match_path: PathBuf,
}

impl CsvSink {
    pub fn new(comparison_path: impl Into<PathBuf>, match_path: impl Into<PathBuf>) -> Self {
        Self {
            comparison_path: comparison_path.into(),
            match_path: match_path.into(),
        }
    }
}

impl ResultSink for CsvSink {
    fn write_comparison(&mut self, rows: &[ComparisonRow]) -> onto_coverage_common::Result<()> {
        write_table(&self.comparison_path, &ComparisonRow::HEADERS, rows).map_err(into_output)
    }

    fn write_matches(&mut self, rows: &[MatchRow]) -> onto_coverage_common::Result<()> {
        write_table(&self.match_path, &MatchRow::HEADERS, rows).map_err(into_output)
    }
}

fn into_output(err: crate::error::CoverageError) -> onto_coverage_common::Error {
    onto_coverage_common::Error::Output(err.to_string())
}

/// ヘッダー + 各行をシリアライズ
pub fn write_table<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "CSV出力");
    Ok(())
}

#[derive(Serialize)]
struct KeywordRecord<'a> {
    #[serde(rename = "Keyword")]
    keyword: &'a str,
    #[serde(rename = "Score")]
    score: f64,
}

pub fn write_keywords(keywords: &[ScoredKeyword], path: &Path) -> Result<()> {
    let records: Vec<KeywordRecord> = keywords
        .iter()
        .map(|k| KeywordRecord {
            keyword: &k.keyword,
            score: k.score,
        })
        .collect();
    write_table(path, &["Keyword", "Score"], &records)
}
