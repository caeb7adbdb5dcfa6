//! キーワード抽出手法
//!
//! 抽出手法は閉じた列挙型 `KeywordSource` で表す。各手法は独自の後処理フィルタを持ち、
//! スコアは手法内でのみ意味を持つ（正規化はスコアラー側で手法ごとに行う）。

pub mod embedding;
pub mod rake;
pub mod rake_nltk;
pub mod stopwords;

use crate::types::{FixedKeywords, ScoredKeyword};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // \d は Unicode の10進数字（Nd）のみ。分数やローマ数字は含まない
    static ref DECIMAL_DIGITS: Regex = Regex::new(r"^\d+$").unwrap();
}

/// 抽出手法のパラメータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// RAKE: 句の最大語数
    pub rake_max_words: usize,
    /// RAKE: 句の最大文字数
    pub rake_max_chars: usize,
    /// Rake-NLTK: 句の最小語数
    pub rake_nltk_min_words: usize,
    /// Rake-NLTK: 句の最大語数
    pub rake_nltk_max_words: usize,
    /// Rake-NLTK: 候補の最小文字数
    pub rake_nltk_min_chars: usize,
    /// KeyBERT: 返す候補数
    pub keybert_top_n: usize,
    /// KeyBERT: n-gramの最大語数
    pub keybert_max_ngram: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            rake_max_words: 3,
            rake_max_chars: 35,
            rake_nltk_min_words: 1,
            rake_nltk_max_words: 2,
            rake_nltk_min_chars: 3,
            keybert_top_n: 10,
            keybert_max_ngram: 2,
        }
    }
}

/// キーワード抽出手法
#[derive(Debug, Clone, PartialEq)]
pub enum KeywordSource {
    /// 頻度ベース
    Rake,
    /// 統計的共起
    RakeNltk,
    /// 埋め込みベース
    KeyBert,
    /// 外部指定の固定リスト（テキストは使わない）
    Fixed(FixedKeywords),
}

impl KeywordSource {
    pub const CUSTOM_KEYWORDS: &'static str = "Custom Keywords";

    /// 比較表に出力する手法名
    pub fn name(&self) -> &'static str {
        match self {
            KeywordSource::Rake => "RAKE",
            KeywordSource::RakeNltk => "Rake-NLTK",
            KeywordSource::KeyBert => "KeyBERT",
            KeywordSource::Fixed(_) => Self::CUSTOM_KEYWORDS,
        }
    }

    pub fn extract(&self, text: &str, config: &KeywordConfig) -> Vec<ScoredKeyword> {
        match self {
            KeywordSource::Rake => rake::extract(text, config),
            KeywordSource::RakeNltk => rake_nltk::extract(text, config),
            KeywordSource::KeyBert => embedding::extract(text, config),
            KeywordSource::Fixed(mapping) => Self::from_fixed_mapping(mapping),
        }
    }

    /// 固定マッピングをそのまま（挿入順・フィルタなし）変換
    pub fn from_fixed_mapping(mapping: &FixedKeywords) -> Vec<ScoredKeyword> {
        mapping
            .iter()
            .map(|(keyword, &score)| ScoredKeyword::new(keyword, score))
            .collect()
    }
}

impl std::str::FromStr for KeywordSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "rake" => Ok(KeywordSource::Rake),
            "rake-nltk" | "nltk" => Ok(KeywordSource::RakeNltk),
            "keybert" | "embedding" => Ok(KeywordSource::KeyBert),
            _ => Err(format!(
                "Unknown method: {}. Use rake, rake-nltk, or keybert",
                s
            )),
        }
    }
}

impl std::fmt::Display for KeywordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 空でなく、全て10進数字の文字列
pub(crate) fn is_numeric(s: &str) -> bool {
    DECIMAL_DIGITS.is_match(s)
}
