// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use log_analyzer_domain::options::DEFAULT_RESULT_FILE;

use super::{parsers, value_enum::CliReportFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "log_analyzer",
    version = crate::VERSION,
    about = "アクセスログの集計ツール (IP別リクエスト数 / 最多エンドポイント / 不正ログイン検知)"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 解析するアクセスログファイル
    #[arg(value_name = "LOGFILE", value_hint = ValueHint::FilePath)]
    pub logfile: PathBuf,

    /// コンソールに表示する上位IP件数（未指定は全件、0 は空の表）
    #[arg(
        long = "top-ips",
        alias = "Top_ips",
        value_parser = parsers::parse_limit,
        help_heading = "出力"
    )]
    pub top_ips: Option<usize>,

    /// コンソールに表示する上位エンドポイント件数（未指定は全件、0 は空の表）
    #[arg(
        long = "top-endpoints",
        alias = "Top_endpoints",
        value_parser = parsers::parse_limit,
        help_heading = "出力"
    )]
    pub top_endpoints: Option<usize>,

    /// レポートの出力先ファイル
    #[arg(
        long = "result-file",
        alias = "result_file",
        default_value = DEFAULT_RESULT_FILE,
        value_hint = ValueHint::FilePath,
        help_heading = "出力"
    )]
    pub result_file: PathBuf,

    /// レポートの出力フォーマット
    #[arg(long, value_enum, default_value = "csv", help_heading = "出力")]
    pub format: CliReportFormat,

    /// レポートファイルを書き出さない（コンソール出力のみ）
    #[arg(long, help_heading = "出力")]
    pub no_report: bool,

    /// 不正ログイン検知のしきい値（失敗回数がこの値を超えたIPを検知）
    #[arg(long, default_value_t = 10, help_heading = "検知")]
    pub threshold: usize,

    /// クライアントIDのない行をスキップせずエラーにする
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// 集計を並列化せず逐次実行する
    #[arg(long, help_heading = "動作")]
    pub sequential: bool,

    /// ログ出力を詳細にする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, conflicts_with = "verbose", help_heading = "動作")]
    pub quiet: bool,
}
