//! 重み付き被覆率の計算
//!
//! 被覆率 = オントロジーに1回以上出現したキーワードのスコア合計 / 全スコア合計 × 100

use crate::ontology::OntologyStore;
use crate::types::{KeywordHits, MatchResult, ScoredKeyword};

/// キーワード集合とオントロジーを照合する
///
/// 全スコア合計が0以下または有限でなければ被覆率は0。同じキーワードが複数回あれば
/// 出現数は後のもので上書きされる（加算しない）。
pub fn score(keywords: &[ScoredKeyword], ontology: &OntologyStore) -> MatchResult {
    let total: f64 = keywords.iter().map(|k| k.score).sum();
    let mut found = 0.0;
    let mut keyword_hits = KeywordHits::new();

    for keyword in keywords {
        let count = ontology.lookup(&keyword.keyword);
        if count > 0 {
            found += keyword.score;
            keyword_hits.insert(keyword.keyword.clone(), count);
        }
    }

    let ratio = found / total * 100.0;
    let weighted_percentage = if total > 0.0 && total.is_finite() && !ratio.is_nan() {
        ratio.clamp(0.0, 100.0)
    } else {
        0.0
    };

    MatchResult {
        weighted_percentage,
        keyword_hits,
    }
}
