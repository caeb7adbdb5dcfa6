//! 比較エンジンの型定義
//!
//! - ScoredKeyword: 抽出手法が出力するキーワード候補
//! - MatchResult: 1つのキーワード集合 × 1つのオントロジーの照合結果
//! - ComparisonRow / MatchRow: 比較表・一致表の1行

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// スコア付きキーワード
///
/// スコアは抽出手法ごとのローカルな値で、手法間では比較しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    pub keyword: String,
    pub score: f64,
}

impl ScoredKeyword {
    pub fn new(keyword: impl Into<String>, score: f64) -> Self {
        Self {
            keyword: keyword.into(),
            score,
        }
    }
}

/// 挿入順を保持する文字列キーのマップ
///
/// 既存キーへの再挿入は値を上書きし、位置は最初の挿入位置のまま。
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// 挿入（重複キーは上書き）
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// 外部指定のキーワード → スコア
pub type FixedKeywords = OrderedMap<f64>;

/// キーワード → 出現アノテーション数
pub type KeywordHits = OrderedMap<usize>;

/// 照合結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult {
    /// 0〜100
    pub weighted_percentage: f64,
    /// 出現数 > 0 のキーワードのみ
    pub keyword_hits: KeywordHits,
}

/// 比較表の1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    #[serde(rename = "Ontology")]
    pub ontology_id: String,
    #[serde(rename = "Method")]
    pub strategy_name: String,
    #[serde(rename = "Weighted Percentage")]
    pub weighted_percentage: f64,
}

impl ComparisonRow {
    pub const HEADERS: [&'static str; 3] = ["Ontology", "Method", "Weighted Percentage"];
}

/// 一致表の1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    #[serde(rename = "Ontology")]
    pub ontology_id: String,
    #[serde(rename = "Method")]
    pub strategy_name: String,
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Count")]
    pub occurrence_count: usize,
}

impl MatchRow {
    pub const HEADERS: [&'static str; 4] = ["Ontology", "Method", "Keyword", "Count"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_keeps_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("water", 0.0625);
        map.insert("Member States", 0.0525);
        map.insert("surface water", 0.0475);

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["water", "Member States", "surface water"]);
    }

    #[test]
    fn test_ordered_map_overwrite_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("water", 1);
        map.insert("river", 2);
        map.insert("water", 3);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("water"), Some(&3));
        let entries: Vec<(&str, &i32)> = map.iter().collect();
        assert_eq!(entries, vec![("water", &3), ("river", &2)]);
    }

    #[test]
    fn test_ordered_map_from_iter() {
        let map: FixedKeywords = vec![("a", 0.5), ("b", 0.25), ("a", 0.1)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&0.1));
        assert!(map.contains_key("b"));
        assert!(!map.contains_key("c"));
    }

    #[test]
    fn test_comparison_row_serializes_with_column_names() {
        let row = ComparisonRow {
            ontology_id: "doce.ttl".into(),
            strategy_name: "RAKE".into(),
            weighted_percentage: 50.0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Ontology"], "doce.ttl");
        assert_eq!(json["Method"], "RAKE");
        assert_eq!(json["Weighted Percentage"], 50.0);
    }
}
