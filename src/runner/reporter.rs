use crate::Result;
use crate::runner::events::RunListener;
use crate::runner::types::{RunStats, Test, TestError};
use std::io::{self, Write};
use tracing::trace;

/// 简化版 TAP 报告器
///
/// 输出格式:
///
/// ```text
/// ok 1 [basic] testcase #1
/// not ok 2 [basic] testcase #2
///   expected 1 to deeply equal 2
/// # tests 2
/// # pass 1
/// # fail 1
/// ```
///
/// 编号从 1 开始，每个 test end 事件加一，与通过/失败无关，跨 suite 连续。
/// 只在 Runner 的单线程回调中访问，不需要加锁。
pub struct TrackReporter<W: Write> {
    target: W,
    /// 下一个完成的测试所使用的编号
    counter: usize,
    /// 摘要只输出一次
    finished: bool,
}

impl TrackReporter<io::Stdout> {
    /// 输出到标准输出
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TrackReporter<W> {
    pub fn new(target: W) -> Self {
        Self {
            target,
            counter: 1,
            finished: false,
        }
    }

    /// 当前编号（尚未被 test end 递增）
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// 取回输出目标
    pub fn into_inner(self) -> W {
        self.target
    }
}

impl<W: Write> RunListener for TrackReporter<W> {
    fn on_test_end(&mut self, _test: &Test) -> Result<()> {
        self.counter += 1;
        Ok(())
    }

    fn on_test_pass(&mut self, test: &Test) -> Result<()> {
        trace!(n = self.counter, "test passed");
        writeln!(self.target, "ok {} {}", self.counter, test.full_title().trim())?;
        Ok(())
    }

    fn on_test_fail(&mut self, test: &Test, err: &TestError) -> Result<()> {
        trace!(n = self.counter, "test failed");
        writeln!(
            self.target,
            "not ok {} {}",
            self.counter,
            test.full_title().trim()
        )?;
        // 只输出 message，不输出 stack
        for line in err.message.split('\n') {
            writeln!(self.target, "  {}", line)?;
        }
        Ok(())
    }

    fn on_run_end(&mut self, stats: &RunStats) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        writeln!(self.target, "# tests {}", stats.total())?;
        writeln!(self.target, "# pass {}", stats.passes)?;
        writeln!(self.target, "# fail {}", stats.failures)?;
        self.target.flush()?;
        Ok(())
    }
}
