use clap::Parser;
use onto_coverage::{cli, config, error, export, input};
use cli::{Cli, Commands, ComparePaths};
use config::Config;
use error::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ログは標準エラーへ（標準出力はサマリ行のみ）
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(onto_coverage::log_filter(cli.verbose, rust_log.as_deref()))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Compare { paths, use_rake, use_rake_nltk, use_keybert, custom_keywords_file } => {
            let paths = ComparePaths::split(&paths)?;
            let methods = cli::selected_methods(use_rake, use_rake_nltk, use_keybert);

            let winner = onto_coverage::run_comparison(
                &paths,
                &methods,
                custom_keywords_file.as_deref(),
                &config.keywords,
            )?;
            println!("{}", onto_coverage::summary_line(&winner));
        }

        Commands::Extract { text, method, output } => {
            let content = input::read_text(&text)?;
            let keywords = method.extract(&content, &config.keywords);

            match output {
                Some(path) => export::export_keywords(&keywords, &path)?,
                None => {
                    for line in export::format_keywords(&method, &keywords) {
                        println!("{}", line);
                    }
                }
            }
        }

        Commands::Config { show, init } => {
            if init {
                let path = Config::default().save()?;
                println!("✔ デフォルト設定を書き出しました: {}", path.display());
            }

            if show || !init {
                println!("設定: {}", Config::config_path()?.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
