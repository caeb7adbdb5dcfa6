//! RAKE（頻度ベース）キーワード抽出
//!
//! 文をストップワードで区切って候補句を作り、
//! 単語スコア = 次数 / 頻度 の合計で句を順位付けする。

use super::{is_numeric, stopwords, KeywordConfig};
use crate::types::{OrderedMap, ScoredKeyword};
use regex::Regex;
use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref SENTENCE_DELIMITERS: Regex =
        Regex::new(r#"[.!?,;:\t\\"()'\x{2019}\x{2013}]|\s-\s"#).unwrap();
    static ref PHRASE_TOKEN: Regex = Regex::new(r"[\w'+/\-]+").unwrap();
    static ref WORD_SPLITTER: Regex = Regex::new(r"[^\w+/\-]+").unwrap();
}

/// RAKEで抽出し、句の長さ・文字数・数値のみの候補を除外する
pub fn extract(text: &str, config: &KeywordConfig) -> Vec<ScoredKeyword> {
    let text = text.replace('\n', " ");
    rank_phrases(&text)
        .into_iter()
        .filter(|k| {
            k.keyword.split_whitespace().count() <= config.rake_max_words
                && k.keyword.chars().count() <= config.rake_max_chars
                && !is_numeric(&k.keyword)
        })
        .collect()
}

/// フィルタ前の順位付き候補句
pub fn rank_phrases(text: &str) -> Vec<ScoredKeyword> {
    let phrases: Vec<String> = SENTENCE_DELIMITERS
        .split(text)
        .flat_map(candidate_phrases)
        .collect();

    let word_scores = word_scores(&phrases);

    let mut candidates: OrderedMap<f64> = OrderedMap::new();
    for phrase in &phrases {
        let score = separate_words(phrase)
            .iter()
            .map(|w| word_scores.get(w.as_str()).copied().unwrap_or(0.0))
            .sum();
        candidates.insert(phrase.clone(), score);
    }

    let mut ranked: Vec<ScoredKeyword> = candidates
        .iter()
        .map(|(phrase, &score)| ScoredKeyword::new(phrase, score))
        .collect();
    // 安定ソート（同点は出現順）
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// 1文からストップワード区切りの候補句を生成
fn candidate_phrases(sentence: &str) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in PHRASE_TOKEN.find_iter(sentence).map(|m| m.as_str()) {
        if stopwords::SMART.contains(token.to_lowercase().as_str()) {
            if !current.is_empty() {
                phrases.push(current.join(" ").to_lowercase());
                current.clear();
            }
        } else {
            current.push(token);
        }
    }
    if !current.is_empty() {
        phrases.push(current.join(" ").to_lowercase());
    }

    phrases
}

/// 句を単語に分割（数値のみの単語は除外）
fn separate_words(phrase: &str) -> Vec<String> {
    WORD_SPLITTER
        .split(phrase)
        .filter(|w| !w.is_empty() && !looks_like_number(w))
        .map(|w| w.to_lowercase())
        .collect()
}

fn looks_like_number(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '+')
}

fn word_scores(phrases: &[String]) -> HashMap<String, f64> {
    let mut frequency: HashMap<String, f64> = HashMap::new();
    let mut degree: HashMap<String, f64> = HashMap::new();

    for phrase in phrases {
        let words = separate_words(phrase);
        let phrase_degree = words.len().saturating_sub(1) as f64;
        for word in words {
            *frequency.entry(word.clone()).or_insert(0.0) += 1.0;
            *degree.entry(word).or_insert(0.0) += phrase_degree;
        }
    }

    frequency
        .into_iter()
        .map(|(word, freq)| {
            let deg = degree.get(&word).copied().unwrap_or(0.0) + freq;
            (word, deg / freq)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(text: &str) -> Vec<String> {
        extract(text, &KeywordConfig::default())
            .into_iter()
            .map(|k| k.keyword)
            .collect()
    }

    #[test]
    fn test_extract_basic() {
        let found = keywords("Water quality in the river basin is monitored.");
        assert!(found.contains(&"water quality".to_string()), "{:?}", found);
        assert!(found.contains(&"river basin".to_string()), "{:?}", found);
        assert!(found.contains(&"monitored".to_string()), "{:?}", found);
    }

    #[test]
    fn test_multiword_phrases_rank_higher() {
        let ranked = extract(
            "Water quality in the river basin is monitored.",
            &KeywordConfig::default(),
        );
        assert_eq!(ranked.last().map(|k| k.keyword.as_str()), Some("monitored"));
        assert!((ranked[0].score - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_filters_long_and_numeric_phrases() {
        let found = keywords(
            "Surface water chemical status monitoring programme review, 2024. Pollution.",
        );
        assert!(found.iter().all(|k| k.split_whitespace().count() <= 3));
        assert!(!found.contains(&"2024".to_string()));
        assert!(found.contains(&"pollution".to_string()));
    }

    #[test]
    fn test_filters_long_characters() {
        let config = KeywordConfig {
            rake_max_chars: 5,
            ..KeywordConfig::default()
        };
        let found: Vec<String> = extract("groundwater, river.", &config)
            .into_iter()
            .map(|k| k.keyword)
            .collect();
        assert_eq!(found, vec!["river".to_string()]);
    }

    #[test]
    fn test_default_word_limit_edge() {
        let found = keywords("River basin district. River basin district plan.");
        assert!(found.contains(&"river basin district".to_string()), "{:?}", found);
        assert!(!found.contains(&"river basin district plan".to_string()), "{:?}", found);
    }

    #[test]
    fn test_default_char_limit_edge() {
        // 35文字は残り、36文字は除外
        let found = keywords("Transboundary groundwater monitored. Transboundary groundwater monitoring.");
        assert_eq!("transboundary groundwater monitored".chars().count(), 35);
        assert!(found.contains(&"transboundary groundwater monitored".to_string()), "{:?}", found);
        assert!(!found.contains(&"transboundary groundwater monitoring".to_string()), "{:?}", found);
    }

    #[test]
    fn test_empty_text() {
        assert!(keywords("").is_empty());
        assert!(keywords("the and of").is_empty());
    }
}
