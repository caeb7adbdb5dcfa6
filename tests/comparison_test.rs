//! 比較マトリクスの統合テスト
//!
//! 一時ディレクトリにオントロジー・テキスト・キーワードCSVを作成して検証

use onto_coverage::cli::ComparePaths;
use onto_coverage::{run_comparison, summary_line};
use onto_coverage_common::{
    ComparisonMatrix, FixedKeywords, KeywordConfig, KeywordSource, MemorySink,
};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const TEXT: &str = "Water quality in the river basin is monitored.";

const WATER_TTL: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex: <http://example.org/water#> .

ex:WFD rdfs:label "Water Framework Directive" .
"#;

const FULL_TTL: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex: <http://example.org/full#> .

ex:Quality rdfs:label "Water quality" ;
    rdfs:comment "Water quality is monitored in each river basin." .
ex:Basin rdfs:label "River basin" .
"#;

const EMPTY_TTL: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex: <http://example.org/empty#> .

ex:Car rdfs:label "Automobile" ;
    rdfs:comment "A road vehicle." .
"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("書き込み失敗");
    path
}

fn fixed(entries: &[(&str, f64)]) -> FixedKeywords {
    entries.iter().map(|&(k, s)| (k, s)).collect()
}

/// シナリオ1: 固定キーワード1件が完全一致
#[test]
fn test_custom_keyword_full_coverage() {
    let dir = tempdir().expect("Failed to create temp dir");
    let onto = write(dir.path(), "water.ttl", WATER_TTL);

    let matrix = ComparisonMatrix::default();
    let tables = matrix
        .build(TEXT, &[onto.clone()], &[], &fixed(&[("water", 0.0625)]))
        .unwrap();

    assert_eq!(tables.comparison.len(), 1);
    assert_eq!(tables.comparison[0].strategy_name, "Custom Keywords");
    assert_eq!(tables.comparison[0].weighted_percentage, 100.0);
    assert_eq!(tables.matches.len(), 1);
    assert_eq!(tables.matches[0].keyword, "water");
    assert_eq!(tables.matches[0].occurrence_count, 1);
}

/// シナリオ2: 半分だけ一致
#[test]
fn test_custom_keywords_half_coverage() {
    let dir = tempdir().expect("Failed to create temp dir");
    let onto = write(dir.path(), "water.ttl", WATER_TTL);

    let tables = ComparisonMatrix::default()
        .build(
            TEXT,
            &[onto],
            &[],
            &fixed(&[("water", 0.05), ("unrelatedterm", 0.05)]),
        )
        .unwrap();

    assert!((tables.comparison[0].weighted_percentage - 50.0).abs() < 1e-9);
    let keywords: Vec<&str> = tables.matches.iter().map(|m| m.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["water"]);
}

/// シナリオ3: 候補なしの手法でも行は残る
#[test]
fn test_strategy_without_candidates_keeps_row() {
    let dir = tempdir().expect("Failed to create temp dir");
    let onto = write(dir.path(), "water.ttl", WATER_TTL);

    // ストップワードのみ → RAKE候補なし
    let tables = ComparisonMatrix::default()
        .build("the and of", &[onto], &[KeywordSource::Rake], &FixedKeywords::new())
        .unwrap();

    assert_eq!(tables.comparison.len(), 1);
    assert_eq!(tables.comparison[0].strategy_name, "RAKE");
    assert_eq!(tables.comparison[0].weighted_percentage, 0.0);
    assert!(tables.matches.is_empty());
}

/// 行数 = オントロジー数 × 手法数 + オントロジー数（固定キーワードあり）
#[test]
fn test_row_count_and_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let a = write(dir.path(), "a.ttl", FULL_TTL);
    let b = write(dir.path(), "b.ttl", EMPTY_TTL);
    let methods = vec![KeywordSource::Rake, KeywordSource::RakeNltk, KeywordSource::KeyBert];

    let tables = ComparisonMatrix::default()
        .build(TEXT, &[a.clone(), b.clone()], &methods, &fixed(&[("water", 1.0)]))
        .unwrap();

    assert_eq!(tables.comparison.len(), 2 * 3 + 2);
    let order: Vec<(String, &str)> = tables
        .comparison
        .iter()
        .map(|r| (r.ontology_id.clone(), r.strategy_name.as_str()))
        .collect();
    let a_id = a.display().to_string();
    let b_id = b.display().to_string();
    assert_eq!(
        order,
        vec![
            (a_id.clone(), "RAKE"),
            (a_id.clone(), "Rake-NLTK"),
            (a_id.clone(), "KeyBERT"),
            (b_id.clone(), "RAKE"),
            (b_id.clone(), "Rake-NLTK"),
            (b_id.clone(), "KeyBERT"),
            (a_id, "Custom Keywords"),
            (b_id, "Custom Keywords"),
        ]
    );
    assert!(tables
        .comparison
        .iter()
        .all(|r| (0.0..=100.0).contains(&r.weighted_percentage)));
}

/// 全キーワードを含むオントロジーが勝つ
#[test]
fn test_multi_ontology_winner() {
    let dir = tempdir().expect("Failed to create temp dir");
    let empty = write(dir.path(), "empty.ttl", EMPTY_TTL);
    let full = write(dir.path(), "full.ttl", FULL_TTL);

    let mut sink = MemorySink::default();
    let winner = ComparisonMatrix::default()
        .run(
            TEXT,
            &[full.clone(), empty.clone()],
            &[KeywordSource::Rake, KeywordSource::RakeNltk],
            &FixedKeywords::new(),
            &mut sink,
        )
        .unwrap();

    assert_eq!(winner.ontology_id, full.display().to_string());
    assert_eq!(winner.strategy_name, "RAKE");
    assert_eq!(winner.weighted_percentage, 100.0);
    for row in sink.comparison.iter().filter(|r| r.ontology_id == empty.display().to_string()) {
        assert_eq!(row.weighted_percentage, 0.0);
    }
}

/// 同一入力なら同一出力
#[test]
fn test_deterministic_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let text = write(dir.path(), "text.txt", TEXT);
    let onto = write(dir.path(), "full.ttl", FULL_TTL);
    let keywords = write(dir.path(), "kw.csv", "Keyword,Score\nwater,0.0625\nriver basin,0.0375\n");
    let methods = vec![KeywordSource::Rake, KeywordSource::RakeNltk, KeywordSource::KeyBert];

    let mut outputs = Vec::new();
    for run in 0..2 {
        let paths = ComparePaths {
            text: text.clone(),
            ontologies: vec![onto.clone()],
            comparison_output: dir.path().join(format!("cmp{}.csv", run)),
            match_output: dir.path().join(format!("match{}.csv", run)),
        };
        let winner =
            run_comparison(&paths, &methods, Some(&keywords), &KeywordConfig::default()).unwrap();
        outputs.push((
            std::fs::read(&paths.comparison_output).unwrap(),
            std::fs::read(&paths.match_output).unwrap(),
            winner,
        ));
    }

    assert_eq!(outputs[0], outputs[1]);
}

/// CSV出力とサマリ行
#[test]
fn test_run_comparison_writes_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let text = write(dir.path(), "text.txt", TEXT);
    let onto = write(dir.path(), "water.ttl", WATER_TTL);
    let keywords = write(dir.path(), "kw.csv", "Keyword,Score\nwater,0.0625\n");
    let paths = ComparePaths {
        text,
        ontologies: vec![onto.clone()],
        comparison_output: dir.path().join("comparison.csv"),
        match_output: dir.path().join("matches.csv"),
    };

    let winner = run_comparison(&paths, &[], Some(&keywords), &KeywordConfig::default()).unwrap();

    let onto_id = onto.display().to_string();
    assert_eq!(
        summary_line(&winner),
        format!(
            "Ontology '{}' achieved the highest score with method 'Custom Keywords'.",
            onto_id
        )
    );
    let comparison = std::fs::read_to_string(&paths.comparison_output).unwrap();
    assert_eq!(
        comparison,
        format!(
            "Ontology,Method,Weighted Percentage\n{},Custom Keywords,100.0\n",
            onto_id
        )
    );
    let matches = std::fs::read_to_string(&paths.match_output).unwrap();
    assert_eq!(
        matches,
        format!(
            "Ontology,Method,Keyword,Count\n{},Custom Keywords,water,1\n",
            onto_id
        )
    );
}
