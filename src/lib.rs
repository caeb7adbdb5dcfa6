pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod input;

use onto_coverage_common::{ComparisonMatrix, ComparisonRow, FixedKeywords, KeywordConfig};
use tracing_subscriber::EnvFilter;

/// 比較を実行し、CSVを書き出して最高被覆率の行を返す
pub fn run_comparison(
    paths: &cli::ComparePaths,
    methods: &[onto_coverage_common::KeywordSource],
    custom_keywords_file: Option<&std::path::Path>,
    config: &KeywordConfig,
) -> error::Result<ComparisonRow> {
    let text = input::read_text(&paths.text)?;
    let fixed_keywords = match custom_keywords_file {
        Some(path) => input::load_fixed_keywords(path)?,
        None => FixedKeywords::new(),
    };

    let mut sink = export::CsvSink::new(&paths.comparison_output, &paths.match_output);
    let matrix = ComparisonMatrix::new(config.clone());
    let winner = matrix.run(&text, &paths.ontologies, methods, &fixed_keywords, &mut sink)?;
    Ok(winner)
}

/// ログフィルタ
///
/// `--verbose` なら debug。それ以外は RUST_LOG の指定を優先し、未指定・不正なら warn。
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// 標準出力に出す1行サマリ
pub fn summary_line(winner: &ComparisonRow) -> String {
    format!(
        "Ontology '{}' achieved the highest score with method '{}'.",
        winner.ontology_id, winner.strategy_name
    )
}
