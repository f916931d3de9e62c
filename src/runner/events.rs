use crate::Result;
use crate::runner::types::{RunStats, Test, TestError};

/// Runner 发出的生命周期事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    TestEnd,
    TestPass,
    TestFail,
    RunEnd,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::TestEnd => "test end",
            Event::TestPass => "pass",
            Event::TestFail => "fail",
            Event::RunEnd => "end",
        }
    }
}

/// 测试生命周期监听器
///
/// Runner 在单线程中依次调用，同一个测试总是先收到
/// `on_test_pass` / `on_test_fail`，然后才是 `on_test_end`。
/// `on_run_end` 在所有测试事件之后调用一次，实现方可以忽略重复调用。
pub trait RunListener {
    fn on_test_end(&mut self, _test: &Test) -> Result<()> {
        Ok(())
    }

    fn on_test_pass(&mut self, _test: &Test) -> Result<()> {
        Ok(())
    }

    fn on_test_fail(&mut self, _test: &Test, _err: &TestError) -> Result<()> {
        Ok(())
    }

    fn on_run_end(&mut self, _stats: &RunStats) -> Result<()> {
        Ok(())
    }
}
