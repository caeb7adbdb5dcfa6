pub mod table;

pub use table::CsvSink;

use onto_coverage_common::KeywordSource;
use onto_coverage_common::ScoredKeyword;
use std::path::Path;

use crate::error::Result;

/// 抽出結果を Keyword,Score のCSVに書き出す（固定キーワードとして再利用できる形式）
pub fn export_keywords(keywords: &[ScoredKeyword], output: &Path) -> Result<()> {
    table::write_keywords(keywords, output)?;
    tracing::info!(path = %output.display(), count = keywords.len(), "キーワードを出力");
    Ok(())
}

/// 抽出結果を標準出力向けの行に整形
pub fn format_keywords(method: &KeywordSource, keywords: &[ScoredKeyword]) -> Vec<String> {
    let mut lines = vec![format!("# {} ({}件)", method.name(), keywords.len())];
    lines.extend(keywords.iter().map(|k| format!("{}\t{}", k.score, k.keyword)));
    lines
}
