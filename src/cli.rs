use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-gallery")]
#[command(about = "ポートフォリオギャラリーのデータセット検証・閲覧ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// データセットを読み込み、IDの一意性などを検証
    Check {
        /// プロジェクトJSONファイル（省略または "-" で同梱データ）
        projects: Option<PathBuf>,
    },

    /// カード一覧を表示
    List {
        /// プロジェクトJSONファイル（省略または "-" で同梱データ）
        projects: Option<PathBuf>,
    },

    /// 1プロジェクトのビューア表示内容を出力
    Show {
        /// プロジェクトID
        #[arg(required = true)]
        id: String,

        /// プロジェクトJSONファイル（省略または "-" で同梱データ）
        #[arg(short, long)]
        projects: Option<PathBuf>,
    },

    /// 設定の表示・初期化
    Config {
        /// 現在の設定を表示
        #[arg(long)]
        show: bool,

        /// デフォルト設定をファイルに書き出す
        #[arg(long)]
        init: bool,
    },
}
