use caguuu_assist::{browse, cli, config, error, generate, list, logging, render};
use caguuu_common::{load_catalog, PageBody};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("エラー: {e}");
            ExitCode::FAILURE
        }
    }
}

/// 引数があればそれを使い、なければ設定から決める
fn csv_path(cli_override: Option<PathBuf>) -> PathBuf {
    match cli_override {
        Some(path) => path,
        None => Config::load_or_default().resolve_csv_path(None),
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Generate { output } => {
            let (path, rows) = generate::generate_sample(&csv_path(output))?;
            println!("✅ Generated: {}  (rows={})", path.display(), rows);
        }

        Commands::List { csv, category, search, open, json } => {
            let loaded = load_catalog(&csv_path(csv));
            let (session, page) = list::list_page(&loaded, &category, &search, open.as_deref());

            if json {
                let products = loaded?;
                println!("{}", list::list_json(&products, &session)?);
                return Ok(ExitCode::SUCCESS);
            }

            print!("{}", render::render_text(&page));
            // エラーは画面に表示済み
            if let PageBody::Failed(_) = page.body {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Browse { csv } => {
            let path = csv_path(csv);
            tracing::info!(path = %path.display(), "接客モードを開始");
            browse::run_browse(&path)?;
        }

        Commands::Config { set_csv, show } => {
            let mut config = Config::load_or_default();

            if let Some(path) = set_csv {
                config.set_csv_path(path)?;
                println!("✔ 商品カタログCSVを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  商品カタログCSV: {}", config.csv_path.display());
                println!("  実際に使うCSV: {}", config.resolve_csv_path(None).display());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
