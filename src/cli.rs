use crate::error::{CoverageError, Result};
use clap::{Parser, Subcommand};
use onto_coverage_common::KeywordSource;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keyword-comparison")]
#[command(about = "オントロジーとキーワード抽出手法を比較する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// テキスト × オントロジー × 抽出手法の被覆率を比較
    Compare {
        /// テキストファイル、オントロジー（1つ以上）、比較結果CSV、一致結果CSV の順
        #[arg(required = true, num_args = 4.., value_name = "PATHS")]
        paths: Vec<PathBuf>,

        /// RAKEで抽出
        #[arg(long, alias = "use_rake")]
        use_rake: bool,

        /// Rake-NLTKで抽出
        #[arg(long, alias = "use_rake_nltk")]
        use_rake_nltk: bool,

        /// KeyBERTで抽出
        #[arg(long, alias = "use_keybert")]
        use_keybert: bool,

        /// 固定キーワードCSV（Keyword,Score）
        #[arg(long, alias = "custom_keywords_file")]
        custom_keywords_file: Option<PathBuf>,
    },

    /// 1つの手法でキーワードを抽出して表示
    Extract {
        /// テキストファイル
        #[arg(required = true)]
        text: PathBuf,

        /// 抽出手法 (rake/rake-nltk/keybert)
        #[arg(short, long, default_value = "rake")]
        method: KeywordSource,

        /// Keyword,Score 形式のCSVに出力
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/初期化
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// デフォルト設定を書き出す
        #[arg(long)]
        init: bool,
    },
}

/// compare の位置引数
#[derive(Debug, Clone, PartialEq)]
pub struct ComparePaths {
    pub text: PathBuf,
    pub ontologies: Vec<PathBuf>,
    pub comparison_output: PathBuf,
    pub match_output: PathBuf,
}

impl ComparePaths {
    /// 先頭=テキスト、末尾2つ=出力、間=オントロジー
    pub fn split(paths: &[PathBuf]) -> Result<Self> {
        match paths {
            [text, ontologies @ .., comparison_output, match_output] if !ontologies.is_empty() => {
                Ok(Self {
                    text: text.clone(),
                    ontologies: ontologies.to_vec(),
                    comparison_output: comparison_output.clone(),
                    match_output: match_output.clone(),
                })
            }
            _ => Err(CoverageError::Usage(
                "テキスト、オントロジー（1つ以上）、比較結果CSV、一致結果CSV を指定してください".into(),
            )),
        }
    }
}

/// 有効化された抽出手法（RAKE → Rake-NLTK → KeyBERT の順）
pub fn selected_methods(use_rake: bool, use_rake_nltk: bool, use_keybert: bool) -> Vec<KeywordSource> {
    let mut methods = Vec::new();
    if use_rake {
        methods.push(KeywordSource::Rake);
    }
    if use_rake_nltk {
        methods.push(KeywordSource::RakeNltk);
    }
    if use_keybert {
        methods.push(KeywordSource::KeyBert);
    }
    methods
}
