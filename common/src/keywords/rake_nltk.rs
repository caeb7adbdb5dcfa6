//! Rake-NLTK（統計的共起）キーワード抽出
//!
//! 文 → 単語に分割し、ストップワード・記号で区切った1〜2語の句を候補とする。
//! 重複句は最初の出現のみ残し、次数/頻度比で順位付けする。

use super::{is_numeric, stopwords, KeywordConfig};
use crate::types::ScoredKeyword;
use regex::Regex;
use std::collections::{HashMap, HashSet};

lazy_static::lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+(?:\s+|$)|\n+").unwrap();
    static ref WORD_TOKEN: Regex = Regex::new(r"\w+(?:['\-]\w+)*|[^\w\s]").unwrap();
}

pub fn extract(text: &str, config: &KeywordConfig) -> Vec<ScoredKeyword> {
    let phrases = generate_phrases(text, config);

    let mut frequency: HashMap<&str, f64> = HashMap::new();
    let mut degree: HashMap<&str, f64> = HashMap::new();
    for phrase in &phrases {
        let len = phrase.len() as f64;
        for word in phrase {
            *frequency.entry(word.as_str()).or_insert(0.0) += 1.0;
            *degree.entry(word.as_str()).or_insert(0.0) += len;
        }
    }

    let mut ranked: Vec<ScoredKeyword> = phrases
        .iter()
        .map(|phrase| {
            let score = phrase
                .iter()
                .map(|w| {
                    let freq = frequency.get(w.as_str()).copied().unwrap_or(1.0);
                    degree.get(w.as_str()).copied().unwrap_or(0.0) / freq
                })
                .sum();
            ScoredKeyword::new(phrase.join(" "), score)
        })
        .collect();

    // スコア降順、同点は句の降順
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.keyword.cmp(&a.keyword))
    });

    ranked
        .into_iter()
        .filter(|k| k.keyword.chars().count() >= config.rake_nltk_min_chars && !is_numeric(&k.keyword))
        .collect()
}

/// 語数でフィルタし、重複を除いた候補句
fn generate_phrases(text: &str, config: &KeywordConfig) -> Vec<Vec<String>> {
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut phrases = Vec::new();

    for sentence in SENTENCE_END.split(text) {
        let mut current: Vec<String> = Vec::new();
        let tokens = WORD_TOKEN
            .find_iter(sentence)
            .map(|m| m.as_str().to_lowercase());

        for token in tokens.chain(std::iter::once(String::new())) {
            let is_separator = token.is_empty()
                || stopwords::NLTK_ENGLISH.contains(token.as_str())
                || token.chars().all(|c| c.is_ascii_punctuation());
            if !is_separator {
                current.push(token);
                continue;
            }
            if current.is_empty() {
                continue;
            }
            let phrase = std::mem::take(&mut current);
            if phrase.len() < config.rake_nltk_min_words || phrase.len() > config.rake_nltk_max_words {
                continue;
            }
            if seen.insert(phrase.clone()) {
                phrases.push(phrase);
            }
        }
    }

    phrases
}
