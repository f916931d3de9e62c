use crate::Result;
use crate::runner::events::{Event, RunListener};
use crate::runner::types::{Outcome, RunStats, Suite, Test};
use tracing::{debug, trace};

/// 同步的测试运行器
///
/// 按声明顺序深度优先遍历 suite，先执行 suite 自身的测试，再进入子 suite。
/// 每个测试依次发出 pass/fail 和 test end 事件，最后发出一次 run end。
pub struct Runner<'a> {
    root: Suite,
    listeners: Vec<&'a mut dyn RunListener>,
}

impl<'a> Runner<'a> {
    pub fn new(root: Suite) -> Self {
        Self {
            root,
            listeners: Vec::new(),
        }
    }

    /// 注册监听器，按注册顺序接收事件
    pub fn add_listener(&mut self, listener: &'a mut dyn RunListener) -> &mut Self {
        self.listeners.push(listener);
        self
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// 执行所有测试并返回最终统计
    ///
    /// 任一监听器返回错误时立即中止，不再发出后续事件（包括 run end）。
    pub fn run(self) -> Result<RunStats> {
        let Runner {
            root,
            mut listeners,
        } = self;

        debug!(
            tests = root.total_tests(),
            listeners = listeners.len(),
            "Starting run"
        );

        let mut stats = RunStats::default();
        let mut parents = Vec::new();
        run_suite(&root, &mut parents, &mut stats, &mut listeners)?;

        emit(&mut listeners, Event::RunEnd, |l| l.on_run_end(&stats))?;

        debug!(
            passes = stats.passes,
            failures = stats.failures,
            "Run finished"
        );
        Ok(stats)
    }
}

fn run_suite(
    suite: &Suite,
    parents: &mut Vec<String>,
    stats: &mut RunStats,
    listeners: &mut [&mut dyn RunListener],
) -> Result<()> {
    let pushed = match &suite.title {
        Some(title) => {
            stats.suites += 1;
            parents.push(title.clone());
            true
        }
        None => false,
    };

    for declared in &suite.tests {
        let test = Test {
            parents: parents.clone(),
            ..declared.clone()
        };
        run_test(&test, stats, listeners)?;
    }

    for child in &suite.suites {
        run_suite(child, parents, stats, listeners)?;
    }

    if pushed {
        parents.pop();
    }
    Ok(())
}

fn run_test(
    test: &Test,
    stats: &mut RunStats,
    listeners: &mut [&mut dyn RunListener],
) -> Result<()> {
    match &test.outcome {
        Outcome::Pass => {
            stats.passes += 1;
            emit(listeners, Event::TestPass, |l| l.on_test_pass(test))?;
        }
        Outcome::Fail(err) => {
            stats.failures += 1;
            emit(listeners, Event::TestFail, |l| l.on_test_fail(test, err))?;
        }
    }

    stats.tests += 1;
    emit(listeners, Event::TestEnd, |l| l.on_test_end(test))
}

fn emit<'a, F>(
    listeners: &mut [&'a mut (dyn RunListener + 'a)],
    event: Event,
    mut notify: F,
) -> Result<()>
where
    F: FnMut(&mut (dyn RunListener + 'a)) -> Result<()>,
{
    trace!(event = event.name(), "Emitting event");
    for listener in listeners.iter_mut() {
        notify(&mut **listener)?;
    }
    Ok(())
}
