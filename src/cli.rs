use caguuu_common::ALL_CATEGORIES;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "caguuu")]
#[command(about = "CAGUUU 接客サポート・商品トーク表示＆EC誘導ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// サンプルの products.csv を生成（既存ファイルは上書き）
    Generate {
        /// 出力CSV（デフォルト: 設定の csv_path）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 商品一覧を1回表示
    List {
        /// 商品カタログCSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// カテゴリ
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,

        /// 商品名で検索（指定時はカテゴリを無視）
        #[arg(short, long, default_value = "")]
        search: String,

        /// 詳細を開く商品名
        #[arg(long)]
        open: Option<String>,

        /// 表示対象の商品をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話的に商品を探す（接客モード）
    Browse {
        /// 商品カタログCSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 商品カタログCSVのパスを設定
        #[arg(long)]
        set_csv: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
