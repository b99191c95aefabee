// ==========================================
// 采购明细汇总 - 命令行入口
// ==========================================
// 用法:
//   procurement-summary --min-count 3 --min-quantity 100 --min-suppliers 2 --export
// ==========================================

use anyhow::Context;
use clap::Parser;
use procurement_summary::config::PipelineConfig;
use procurement_summary::report::render_table;
use procurement_summary::{logging, SummaryApi};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "procurement-summary", version, about = "コストダウン対象品目 抽出ツール")]
struct Cli {
    /// 最小発注回数（年）
    #[arg(long = "min-count", default_value_t = 3)]
    min_count: u32,

    /// 最小発注数量（年）
    #[arg(long = "min-quantity", default_value_t = 100)]
    min_quantity: u32,

    /// 最小仕入先数（年）
    #[arg(long = "min-suppliers", default_value_t = 2)]
    min_suppliers: u32,

    /// 输入文件（省略时在配置的输入目录中定位唯一 CSV）
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// 配置文件（JSON）
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 输出目录（覆盖配置）
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// 输出语言（ja / en / zh-CN）
    #[arg(long)]
    locale: Option<String>,

    /// 导出 Excel
    #[arg(long, short = 'e')]
    export: bool,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.json);

    tracing::debug!(version = procurement_summary::VERSION, "启动");

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = PipelineConfig::load(cli.config.as_deref()).context("配置加载失败")?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    config.validate().context("配置校验失败")?;

    let api = SummaryApi::new(config).context("初始化失败")?;
    let outcome = api.run(
        cli.input.as_deref(),
        cli.min_count,
        cli.min_quantity,
        cli.min_suppliers,
        cli.export,
    );

    if cli.json {
        let text = serde_json::to_string_pretty(&outcome).context("结果序列化失败")?;
        println!("{text}");
    } else {
        if let Some(report) = &outcome.report {
            println!("{}", render_table(&report.items, &api.config().locale));
            println!();
        }
        if outcome.success {
            println!("{}", outcome.message);
        } else {
            eprintln!("{}", outcome.message);
        }
    }

    Ok(outcome.success)
}
