use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "livestock-scanner")]
#[command(about = "家畜写真の模擬AI解析・スキャン履歴管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 保存先ディレクトリ（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真をスキャンして結果を履歴に保存
    Scan {
        /// 画像の参照（パスやURL）。省略時はプレースホルダ
        #[arg(short, long)]
        image: Option<String>,

        /// 家畜の種類を固定 (cow/buffalo/bull/calf)
        #[arg(short = 't', long = "type")]
        animal_type: Option<String>,

        /// 待ち時間を省略
        #[arg(long)]
        no_wait: bool,
    },

    /// スキャン履歴の操作
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// 設定の表示・変更
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// 初回セットアップ（言語を選んでオンボーディング完了）
    Onboard {
        /// 言語コード。省略時は対話的に選択
        language: Option<String>,
    },

    /// 音声コマンドを照合
    Voice {
        /// 認識されたテキスト
        #[arg(required = true)]
        transcript: Vec<String>,
    },

    /// CLI設定ファイルの操作
    Config {
        /// 保存先ディレクトリを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// 一覧（新しい順）
    List,

    /// 詳細を表示
    Show {
        id: String,

        /// 共有用テキストで出力
        #[arg(long)]
        share: bool,
    },

    /// 1件削除
    Remove { id: String },

    /// 全件削除
    Clear {
        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },

    /// デモ用のサンプルを追加
    Seed {
        /// 件数（省略時は設定ファイルの値）
        count: Option<usize>,
    },

    /// 履歴をJSONで出力
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    Show,

    /// 表示言語を変更 (en/hi/gu/mr/pa/te)
    Language { code: String },

    /// 音声読み上げの有効/無効
    Voice { state: Toggle },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        matches!(self, Toggle::On)
    }
}
