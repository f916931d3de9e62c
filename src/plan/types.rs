use crate::runner::{Suite, Test, TestError};
use serde::Deserialize;

/// 单个测试的预设结果
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TestPlan {
    pub title: String,

    /// 失败消息，缺省表示通过
    #[serde(default)]
    pub fail: Option<String>,

    /// 失败时附带的调用栈
    #[serde(default)]
    pub stack: Option<String>,
}

impl TestPlan {
    fn into_test(self) -> Test {
        match self.fail {
            Some(message) => {
                let mut err = TestError::new(message);
                err.stack = self.stack;
                Test::failing(self.title, err)
            }
            None => Test::passing(self.title),
        }
    }
}

/// suite 描述，可以嵌套
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SuitePlan {
    /// 允许为空字符串
    #[serde(default)]
    pub title: String,

    #[serde(default, rename = "test", alias = "tests")]
    pub tests: Vec<TestPlan>,

    #[serde(default, rename = "suite", alias = "suites")]
    pub suites: Vec<SuitePlan>,
}

impl SuitePlan {
    fn into_suite(self) -> Suite {
        Suite {
            title: Some(self.title),
            tests: self.tests.into_iter().map(TestPlan::into_test).collect(),
            suites: self.suites.into_iter().map(SuitePlan::into_suite).collect(),
        }
    }
}

/// 完整的运行计划
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RunPlan {
    /// 直接挂在根 suite 下的测试
    #[serde(default, rename = "test", alias = "tests")]
    pub tests: Vec<TestPlan>,

    #[serde(default, rename = "suite", alias = "suites")]
    pub suites: Vec<SuitePlan>,
}

impl RunPlan {
    /// 转换为 Runner 使用的根 suite
    pub fn into_suite(self) -> Suite {
        Suite {
            title: None,
            tests: self.tests.into_iter().map(TestPlan::into_test).collect(),
            suites: self.suites.into_iter().map(SuitePlan::into_suite).collect(),
        }
    }
}
