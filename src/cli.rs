use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "persona-ai")]
#[command(about = "ペルソナ指向ドキュメント解析クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 解析サーバのURL（省略時は環境変数 PERSONA_AI_SERVER → 設定ファイル）
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// PDFを送信して解析結果を表示
    Analyze {
        /// PDFファイル、またはPDFを含むフォルダ
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// ペルソナ（省略時は対話入力）
        #[arg(short, long)]
        persona: Option<String>,

        /// 目的 (job to be done)（省略時は対話入力）
        #[arg(short, long)]
        job: Option<String>,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 詳細を表示するセクション番号（1始まり）
        #[arg(short, long)]
        detail: Option<usize>,

        /// 事前のヘルスチェックを省略
        #[arg(long)]
        no_health_check: bool,
    },

    /// サーバの状態を確認
    Health,

    /// 保存済みの結果JSONを表示
    Show {
        /// 結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 詳細を表示するセクション番号（1始まり）
        #[arg(short, long)]
        detail: Option<usize>,
    },

    /// テーマを表示/切替
    Theme {
        /// dark ⇔ light を切り替えて保存
        #[arg(long)]
        toggle: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 解析サーバのURLを設定
        #[arg(long)]
        set_server: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
