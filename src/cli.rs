use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splitzie")]
#[command(about = "レシート写真と説明文から割り勘を計算するCLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// タイムアウト秒数（1以上）
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// レシート画像を送信して割り勘を計算
    Split {
        /// レシート画像のパス
        #[arg(required = true)]
        image: PathBuf,

        /// 誰が何を食べたかなどの説明
        #[arg(short, long)]
        context: String,

        /// 結果をJSONで保存
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 結果をExcelで保存
        #[arg(long)]
        excel: Option<PathBuf>,
    },

    /// 対話的に画像と説明を入力して送信
    Form,

    /// 保存したJSONの結果を表示
    Show {
        /// `split --output` で保存したJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// Excelにも書き出す
        #[arg(long)]
        excel: Option<PathBuf>,
    },

    /// サーバーの死活確認
    Heartbeat,

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 通貨記号を設定
        #[arg(long)]
        set_currency: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
