use crate::Result;
use crate::error::ReporterError;
use crate::plan::types::RunPlan;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 运行计划加载器
pub struct PlanLoader;

impl PlanLoader {
    /// 默认计划文件名
    pub const PLAN_FILE: &'static str = "track.toml";

    /// 从指定路径加载，`.json` 按 JSON 解析，其他按 TOML 解析
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<RunPlan> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ReporterError::PlanError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "Loading run plan");

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_toml(&content)
        }
    }

    pub fn parse_toml(content: &str) -> Result<RunPlan> {
        Ok(toml::from_str(content)?)
    }

    pub fn parse_json(content: &str) -> Result<RunPlan> {
        Ok(serde_json::from_str(content)?)
    }

    /// 查找并加载计划文件
    /// 查找顺序：
    /// 1. 当前目录及其父目录
    /// 2. 用户配置目录 ~/.config/track-reporter/
    pub fn find_and_load() -> Result<RunPlan> {
        let current = std::env::current_dir()?;
        Self::find_and_load_from(&current)
    }

    /// 从 start 开始查找并加载，找不到时返回 PlanNotFound
    pub fn find_and_load_from(start: &Path) -> Result<RunPlan> {
        let path = Self::find_from(start).ok_or_else(|| {
            ReporterError::PlanNotFound(format!(
                "{} not found in {}, its parents or ~/.config/track-reporter",
                Self::PLAN_FILE,
                start.display()
            ))
        })?;
        Self::load_from_path(path)
    }

    /// 返回找到的计划文件路径
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        Self::find_upwards(start).or_else(Self::user_plan_path)
    }

    /// 从 start 开始向上逐级查找
    pub fn find_upwards(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let plan_path = current.join(Self::PLAN_FILE);
            if plan_path.exists() {
                return Some(plan_path);
            }

            // 尝试父目录
            if !current.pop() {
                return None;
            }
        }
    }

    fn user_plan_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        let plan_path = home
            .join(".config")
            .join("track-reporter")
            .join(Self::PLAN_FILE);

        plan_path.exists().then_some(plan_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_nested() {
        let plan = PlanLoader::parse_toml(
            r#"
[[test]]
title = "root level"

[[suite]]
title = "[basic]"

[[suite.test]]
title = "testcase #1"

[[suite.test]]
title = "error"
fail = "expected 1 to deeply equal 2"

[[suite.suite]]
title = "nested"

[[suite.suite.test]]
title = "deep"
"#,
        )
        .unwrap();

        assert_eq!(plan.tests.len(), 1);
        assert_eq!(plan.suites[0].title, "[basic]");
        assert_eq!(plan.suites[0].tests.len(), 2);
        assert_eq!(
            plan.suites[0].tests[1].fail.as_deref(),
            Some("expected 1 to deeply equal 2")
        );
        assert_eq!(plan.suites[0].suites[0].tests[0].title, "deep");
    }

    #[test]
    fn test_parse_toml_missing_suite_title_is_empty() {
        let plan = PlanLoader::parse_toml(
            r#"
[[suite]]
[[suite.test]]
title = "[basic] success"
"#,
        )
        .unwrap();

        assert_eq!(plan.suites[0].title, "");
    }

    #[test]
    fn test_parse_json_with_plural_keys() {
        let plan = PlanLoader::parse_json(
            r#"{"suites": [{"title": "[basic]", "tests": [{"title": "a"}, {"title": "b", "fail": "no"}]}]}"#,
        )
        .unwrap();

        assert_eq!(plan.suites[0].tests.len(), 2);
        assert!(plan.suites[0].tests[0].fail.is_none());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = PlanLoader::parse_toml(
            r#"
[[suite]]
title = "x"
[[suite.test]]
title = "a"
failed = "typo"
"#,
        );
        assert!(matches!(result, Err(ReporterError::TomlError(_))));
    }

    #[test]
    fn test_missing_test_title_is_rejected() {
        let result = PlanLoader::parse_json(r#"{"suite": [{"test": [{}]}]}"#);
        assert!(matches!(result, Err(ReporterError::JsonError(_))));
    }
}
