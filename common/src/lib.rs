//! Ontology Coverage Common Library
//!
//! キーワード抽出・オントロジー照合・比較マトリクスの共通エンジン

pub mod error;
pub mod keywords;
pub mod matrix;
pub mod ontology;
pub mod scorer;
pub mod types;

pub use error::{Error, Result};
pub use keywords::{KeywordConfig, KeywordSource};
pub use matrix::{select_winner, ComparisonMatrix, ComparisonTables, MemorySink, ResultSink};
pub use ontology::OntologyStore;
pub use types::{
    ComparisonRow, FixedKeywords, KeywordHits, MatchResult, MatchRow, OrderedMap, ScoredKeyword,
};
