//! オントロジー読み込みとキーワード検索
//!
//! オントロジーは rdfs:label / rdfs:comment の値の集合としてのみ扱う。
//! 検索は大文字小文字を無視した部分文字列一致（"water" は "groundwater" にも一致）。

use crate::error::{Error, Result};
use oxrdf::vocab::rdfs;
use oxrdf::{Term, Triple};
use oxttl::{NTriplesParser, TurtleParser};
use std::collections::HashSet;
use std::path::Path;

/// 読み込み済みオントロジーのアノテーション
#[derive(Debug, Clone, Default)]
pub struct OntologyStore {
    /// 小文字化済みの rdfs:label 値
    labels: Vec<String>,
    /// 小文字化済みの rdfs:comment 値
    comments: Vec<String>,
}

impl OntologyStore {
    /// ファイルから読み込み（拡張子 .nt は N-Triples、それ以外は Turtle）
    pub fn load(path: &Path) -> Result<Self> {
        let source = path.display().to_string();
        if !path.is_file() {
            return Err(Error::load(&source, "file not found"));
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::load(&source, e))?;

        let is_ntriples = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("nt"))
            .unwrap_or(false);

        let store = if is_ntriples {
            Self::from_ntriples_str(&content, &source)?
        } else {
            let base = path
                .canonicalize()
                .ok()
                .map(|abs| format!("file://{}", abs.display()));
            Self::parse_turtle(&content, &source, base.as_deref())?
        };

        tracing::debug!(
            ontology = %source,
            labels = store.labels.len(),
            comments = store.comments.len(),
            "オントロジー読み込み完了"
        );
        Ok(store)
    }

    /// Turtle文字列から読み込み
    pub fn from_turtle_str(content: &str, source: &str) -> Result<Self> {
        Self::parse_turtle(content, source, None)
    }

    /// N-Triples文字列から読み込み
    pub fn from_ntriples_str(content: &str, source: &str) -> Result<Self> {
        Self::from_triples(NTriplesParser::new().for_reader(content.as_bytes()), source)
    }

    fn parse_turtle(content: &str, source: &str, base_iri: Option<&str>) -> Result<Self> {
        let parser = match base_iri {
            Some(base) => TurtleParser::new()
                .with_base_iri(base)
                .unwrap_or_else(|_| TurtleParser::new()),
            None => TurtleParser::new(),
        };
        Self::from_triples(parser.for_reader(content.as_bytes()), source)
    }

    fn from_triples<E: std::fmt::Display>(
        triples: impl Iterator<Item = std::result::Result<Triple, E>>,
        source: &str,
    ) -> Result<Self> {
        let mut store = Self::default();
        // グラフはトリプルの集合（同じトリプルの重複記述は1件）
        let mut seen: HashSet<Triple> = HashSet::new();

        for triple in triples {
            let triple = triple.map_err(|e| Error::load(source, e))?;
            let predicate = triple.predicate.as_ref();
            if predicate != rdfs::LABEL && predicate != rdfs::COMMENT {
                continue;
            }
            if seen.contains(&triple) {
                continue;
            }
            if predicate == rdfs::LABEL {
                store.labels.push(term_text(&triple.object).to_lowercase());
            } else if predicate == rdfs::COMMENT {
                store.comments.push(term_text(&triple.object).to_lowercase());
            }
            seen.insert(triple);
        }

        Ok(store)
    }

    /// キーワードを含むアノテーション数（label + comment）
    pub fn lookup(&self, keyword: &str) -> usize {
        let keyword = keyword.to_lowercase();
        let in_labels = self.labels.iter().filter(|l| l.contains(&keyword)).count();
        let in_comments = self.comments.iter().filter(|c| c.contains(&keyword)).count();
        in_labels + in_comments
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// 目的語の文字列表現（リテラルは値、IRIは文字列、空白ノードはID）
fn term_text(term: &Term) -> String {
    match term {
        Term::Literal(literal) => literal.value().to_string(),
        Term::NamedNode(node) => node.as_str().to_string(),
        Term::BlankNode(node) => node.as_str().to_string(),
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    }
}
