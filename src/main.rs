mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    httpcollect::logger::init_logger(cli.verbose);

    cli::run(cli)
}
