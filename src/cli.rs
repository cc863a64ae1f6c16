use std::path::PathBuf;

use clap::Parser;
use httpcollect::collection::{BatchConverter, ReportPrinter};
use httpcollect::config::{ConfigLoader, ConverterConfig};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 源目录（默认 ./source/）
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// 输出目录（默认 ./target/）
    #[arg(long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// 配置文件路径，未指定时自动查找 httpcollect.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 按名称排序 collection 和文件
    #[arg(long)]
    pub sort: bool,

    /// 跳过无法解析的文件而不是中止
    #[arg(long)]
    pub skip_invalid: bool,

    /// 禁用彩色输出
    #[arg(long)]
    pub no_color: bool,

    /// 输出 debug 日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 合并配置文件与命令行参数，命令行优先
    pub fn resolve_config(&self) -> Result<ConverterConfig> {
        let mut config = ConfigLoader::load(self.config.as_deref())?;

        if let Some(source) = &self.source {
            config.source_dir = source.clone();
        }
        if let Some(target) = &self.target {
            config.target_dir = target.clone();
        }
        if self.sort {
            config.sort_entries = true;
        }
        if self.skip_invalid {
            config.skip_invalid = true;
        }

        Ok(config)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    tracing::debug!(?config, "Resolved configuration");

    let mut converter = BatchConverter::new(config);
    let report = converter.run()?;

    ReportPrinter::new(!cli.no_color).print(&report);
    Ok(())
}
