mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    // 初始化日志系统
    track_reporter::logger::init_logger();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { plan } => {
            let stats = cli::run(plan)?;
            if stats.has_failures() {
                tracing::info!(failures = stats.failures, "Run finished with failures");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Check { plan } => {
            let (suites, tests) = cli::check(plan)?;
            println!("{} suites, {} tests", suites, tests);
        }
    }
    Ok(ExitCode::SUCCESS)
}
