//! 埋め込みベース（KeyBERT方式）キーワード抽出
//!
//! 文書中の1〜2語のn-gramを候補とし、文書全体の埋め込みとの
//! コサイン類似度が高い順に上位N件を返す。ストップワード除去はしない。
//!
//! 埋め込みは文字n-gram・単語のハッシュ特徴量（決定的、モデル不要）。

use super::KeywordConfig;
use crate::types::ScoredKeyword;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static::lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// 埋め込み次元（2の冪）
pub const EMBEDDING_DIM: usize = 512;

pub fn extract(text: &str, config: &KeywordConfig) -> Vec<ScoredKeyword> {
    let candidates = candidate_ngrams(text, config.keybert_max_ngram);
    if candidates.is_empty() {
        return Vec::new();
    }

    let embedder = HashedNgramEmbedder::default();
    let doc = embedder.embed(text);

    let mut scored: Vec<ScoredKeyword> = candidates
        .into_iter()
        .map(|candidate| {
            let similarity = cosine_similarity(&doc, &embedder.embed(&candidate));
            ScoredKeyword::new(candidate, round4(similarity as f64))
        })
        .collect();

    // 候補はアルファベット順なので、安定ソートで同点はアルファベット順
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(config.keybert_top_n);
    scored
}

/// 小文字化したトークンから1〜max_ngram語のn-gramを重複なしで生成
pub fn candidate_ngrams(text: &str, max_ngram: usize) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = TOKEN.find_iter(&lowered).map(|m| m.as_str()).collect();

    let mut ngrams = BTreeSet::new();
    for n in 1..=max_ngram.max(1) {
        for window in tokens.windows(n) {
            ngrams.insert(window.join(" "));
        }
    }
    ngrams
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// 文字n-gramと単語をハッシュして固定長ベクトルにする埋め込み
#[derive(Debug, Clone)]
pub struct HashedNgramEmbedder {
    pub min_n: usize,
    pub max_n: usize,
}

impl Default for HashedNgramEmbedder {
    fn default() -> Self {
        Self { min_n: 3, max_n: 4 }
    }
}

impl HashedNgramEmbedder {
    /// L2正規化済みベクトルを返す（空文字列はゼロベクトル）
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; EMBEDDING_DIM];

        for word in TOKEN.find_iter(&text.to_lowercase()) {
            let word = word.as_str();
            add_feature(&mut vector, word.as_bytes(), 2.0);

            let padded: Vec<char> = format!(" {} ", word).chars().collect();
            for n in self.min_n..=self.max_n {
                for gram in padded.windows(n) {
                    let gram: String = gram.iter().collect();
                    add_feature(&mut vector, gram.as_bytes(), 1.0);
                }
            }
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

fn add_feature(vector: &mut [f32], bytes: &[u8], weight: f32) {
    let h = fnv1a(bytes);
    let index = (mix(h) as usize) & (EMBEDDING_DIM - 1);
    // 上位ビットで符号を決め、衝突の偏りを打ち消す
    let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
    vector[index] += sign * weight;
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    h
}

fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
