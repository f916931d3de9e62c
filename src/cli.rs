use std::path::PathBuf;

use clap::{Parser, Subcommand};
use track_reporter::plan::{PlanLoader, RunPlan};
use track_reporter::{RunStats, Runner, TrackReporter};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 按运行计划执行并输出报告，存在失败时退出码为 1
    Run {
        /// 计划文件路径，缺省时自动查找 track.toml
        plan: Option<PathBuf>,
    },
    /// 校验运行计划并打印 suite / 测试数量
    Check { plan: Option<PathBuf> },
}

fn load_plan(path: Option<PathBuf>) -> Result<RunPlan> {
    let plan = match path {
        Some(path) => PlanLoader::load_from_path(path)?,
        None => PlanLoader::find_and_load()?,
    };
    Ok(plan)
}

/// 执行计划，返回最终统计
pub fn run(path: Option<PathBuf>) -> Result<RunStats> {
    let suite = load_plan(path)?.into_suite();

    let mut reporter = TrackReporter::stdout();
    let mut runner = Runner::new(suite);
    runner.add_listener(&mut reporter);
    Ok(runner.run()?)
}

/// 校验计划，返回 (suite 数量, 测试数量)
pub fn check(path: Option<PathBuf>) -> Result<(usize, usize)> {
    let suite = load_plan(path)?.into_suite();
    Ok((suite.total_suites(), suite.total_tests()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_plan() {
        let cli = Cli::try_parse_from(["track-reporter", "run", "plan.toml"]).unwrap();
        match cli.command {
            Commands::Run { plan } => assert_eq!(plan, Some(PathBuf::from("plan.toml"))),
            _ => panic!("Expected run"),
        }
    }

    #[test]
    fn test_parse_check_without_plan() {
        let cli = Cli::try_parse_from(["track-reporter", "check"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { plan: None }));
    }

    #[test]
    fn test_check_counts_demo_plan() {
        let plan = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("demos")
            .join("track.toml");
        assert_eq!(check(Some(plan)).unwrap(), (2, 3));
    }

    #[test]
    fn test_missing_plan_file_is_error() {
        let result = run(Some(PathBuf::from("/nonexistent/track.toml")));
        assert!(result.is_err());
    }
}
