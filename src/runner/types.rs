use std::fmt;

/// 失败测试携带的错误对象
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestError {
    /// 错误消息（可能包含多行）
    pub message: String,

    /// 调用栈，报告器不会输出这一部分
    pub stack: Option<String>,
}

impl TestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// 单个测试的执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail(TestError),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

/// 一个测试用例
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Test {
    /// 测试自身的描述
    pub title: String,

    /// 外层 suite 标题，从外到内（不含根 suite）
    pub parents: Vec<String>,

    /// 预设的执行结果
    pub outcome: Outcome,
}

impl Test {
    pub fn new(title: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            title: title.into(),
            parents: Vec::new(),
            outcome,
        }
    }

    pub fn passing(title: impl Into<String>) -> Self {
        Self::new(title, Outcome::Pass)
    }

    pub fn failing(title: impl Into<String>, error: TestError) -> Self {
        Self::new(title, Outcome::Fail(error))
    }

    /// 完整标题：所有外层 suite 标题加上测试描述，用单个空格连接。
    ///
    /// 空的 suite 标题同样参与拼接，因此结果可能带有多余的空格，
    /// 由调用方决定是否 trim。
    pub fn full_title(&self) -> String {
        let mut parts: Vec<&str> = self.parents.iter().map(String::as_str).collect();
        parts.push(&self.title);
        parts.join(" ")
    }
}

/// 测试集合，可以嵌套
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suite {
    /// suite 标题，根 suite 为 None
    pub title: Option<String>,
    pub tests: Vec<Test>,
    pub suites: Vec<Suite>,
}

impl Suite {
    /// 创建根 suite
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_test(mut self, test: Test) -> Self {
        self.tests.push(test);
        self
    }

    pub fn with_suite(mut self, suite: Suite) -> Self {
        self.suites.push(suite);
        self
    }

    /// 递归统计测试数量
    pub fn total_tests(&self) -> usize {
        self.tests.len() + self.suites.iter().map(Suite::total_tests).sum::<usize>()
    }

    /// 递归统计 suite 数量（不含自身）
    pub fn total_suites(&self) -> usize {
        self.suites.len() + self.suites.iter().map(Suite::total_suites).sum::<usize>()
    }
}

/// 运行统计，由 Runner 维护
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub suites: usize,
    pub tests: usize,
    pub passes: usize,
    pub failures: usize,
}

impl RunStats {
    /// 已完成测试数（通过 + 失败）
    pub fn total(&self) -> usize {
        self.passes + self.failures
    }

    pub fn has_failures(&self) -> bool {
        self.failures > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_title_joins_parents() {
        let mut test = Test::passing("testcase #1");
        test.parents = vec!["[outer]".to_string(), "[inner]".to_string()];
        assert_eq!(test.full_title(), "[outer] [inner] testcase #1");
    }

    #[test]
    fn test_full_title_keeps_empty_suite_separator() {
        let mut test = Test::passing("[basic] success");
        test.parents = vec![String::new()];
        assert_eq!(test.full_title(), " [basic] success");
    }

    #[test]
    fn test_suite_counts() {
        let suite = Suite::root()
            .with_suite(
                Suite::new("a")
                    .with_test(Test::passing("1"))
                    .with_suite(Suite::new("b").with_test(Test::passing("2"))),
            )
            .with_suite(Suite::new("c").with_test(Test::passing("3")));

        assert_eq!(suite.total_tests(), 3);
        assert_eq!(suite.total_suites(), 3);
    }

    #[test]
    fn test_stats_total() {
        let stats = RunStats {
            suites: 1,
            tests: 3,
            passes: 2,
            failures: 1,
        };
        assert_eq!(stats.total(), 3);
        assert!(stats.has_failures());
    }

    #[test]
    fn test_error_display_hides_stack() {
        let err = TestError::new("expected 1 to deeply equal 2").with_stack("AssertionError: at foo");
        assert_eq!(err.to_string(), "expected 1 to deeply equal 2");
    }
}
