//! オントロジー × 抽出手法の比較マトリクス
//!
//! ## 処理フロー
//! 1. オントロジーごと（外側）、手法ごと（内側）にキーワード抽出 → 読み込み → 照合
//! 2. 固定キーワードがあれば、各オントロジーを "Custom Keywords" として照合
//! 3. 被覆率最大の行を選択（同点は先の行）
//! 4. 比較表・一致表を ResultSink に渡す
//!
//! オントロジーは組ごとに読み直す（キャッシュなし）。読み込み失敗で全体を中断する。

use crate::error::{Error, Result};
use crate::keywords::{KeywordConfig, KeywordSource};
use crate::ontology::OntologyStore;
use crate::scorer;
use crate::types::{ComparisonRow, FixedKeywords, MatchRow, ScoredKeyword};
use std::path::PathBuf;

/// 比較結果の出力先
pub trait ResultSink {
    fn write_comparison(&mut self, rows: &[ComparisonRow]) -> Result<()>;
    fn write_matches(&mut self, rows: &[MatchRow]) -> Result<()>;
}

/// メモリ上に保持するだけの出力先
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub comparison: Vec<ComparisonRow>,
    pub matches: Vec<MatchRow>,
}

impl ResultSink for MemorySink {
    fn write_comparison(&mut self, rows: &[ComparisonRow]) -> Result<()> {
        self.comparison = rows.to_vec();
        Ok(())
    }

    fn write_matches(&mut self, rows: &[MatchRow]) -> Result<()> {
        self.matches = rows.to_vec();
        Ok(())
    }
}

/// 比較表と一致表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTables {
    pub comparison: Vec<ComparisonRow>,
    pub matches: Vec<MatchRow>,
}

impl ComparisonTables {
    fn push(&mut self, ontology_id: &str, strategy_name: &str, keywords: &[ScoredKeyword], ontology: &OntologyStore) {
        let result = scorer::score(keywords, ontology);
        tracing::debug!(
            ontology = ontology_id,
            method = strategy_name,
            keywords = keywords.len(),
            hits = result.keyword_hits.len(),
            weighted_percentage = result.weighted_percentage,
            "照合完了"
        );

        self.comparison.push(ComparisonRow {
            ontology_id: ontology_id.to_string(),
            strategy_name: strategy_name.to_string(),
            weighted_percentage: result.weighted_percentage,
        });
        for (keyword, &count) in result.keyword_hits.iter() {
            self.matches.push(MatchRow {
                ontology_id: ontology_id.to_string(),
                strategy_name: strategy_name.to_string(),
                keyword: keyword.to_string(),
                occurrence_count: count,
            });
        }
    }
}

/// 比較マトリクス
#[derive(Debug, Clone, Default)]
pub struct ComparisonMatrix {
    config: KeywordConfig,
}

impl ComparisonMatrix {
    pub fn new(config: KeywordConfig) -> Self {
        Self { config }
    }

    /// 全組み合わせを評価して2つの表を作る
    pub fn build(
        &self,
        text: &str,
        ontology_paths: &[PathBuf],
        strategies: &[KeywordSource],
        fixed_keywords: &FixedKeywords,
    ) -> Result<ComparisonTables> {
        let mut tables = ComparisonTables::default();

        for path in ontology_paths {
            let ontology_id = path.display().to_string();
            for strategy in strategies {
                let keywords = strategy.extract(text, &self.config);
                let ontology = OntologyStore::load(path)?;
                tables.push(&ontology_id, strategy.name(), &keywords, &ontology);
            }
        }

        if !fixed_keywords.is_empty() {
            let keywords = KeywordSource::from_fixed_mapping(fixed_keywords);
            for path in ontology_paths {
                let ontology = OntologyStore::load(path)?;
                tables.push(
                    &path.display().to_string(),
                    KeywordSource::CUSTOM_KEYWORDS,
                    &keywords,
                    &ontology,
                );
            }
        }

        Ok(tables)
    }

    /// 評価して出力先に渡し、最高被覆率の行を返す
    pub fn run(
        &self,
        text: &str,
        ontology_paths: &[PathBuf],
        strategies: &[KeywordSource],
        fixed_keywords: &FixedKeywords,
        sink: &mut dyn ResultSink,
    ) -> Result<ComparisonRow> {
        tracing::info!(
            ontologies = ontology_paths.len(),
            methods = strategies.len(),
            custom_keywords = fixed_keywords.len(),
            "比較開始"
        );

        let tables = self.build(text, ontology_paths, strategies, fixed_keywords)?;
        let winner = select_winner(&tables.comparison)
            .cloned()
            .ok_or(Error::EmptyComparison)?;

        sink.write_comparison(&tables.comparison)?;
        sink.write_matches(&tables.matches)?;

        tracing::info!(
            ontology = %winner.ontology_id,
            method = %winner.strategy_name,
            weighted_percentage = winner.weighted_percentage,
            "比較完了"
        );
        Ok(winner)
    }
}

/// 被覆率最大の行（同点は表の先頭側）
pub fn select_winner(rows: &[ComparisonRow]) -> Option<&ComparisonRow> {
    let mut best: Option<&ComparisonRow> = None;
    for row in rows {
        match best {
            Some(current) if row.weighted_percentage <= current.weighted_percentage => {}
            _ => best = Some(row),
        }
    }
    best
}
