use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::search::SearchReport;

/// Wall clock timer for a solver run.
pub struct RunTimer {
    start_time: Instant,
}

impl RunTimer {
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }
}

/// Result of a finished run, printed as one line or as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub target: i64,
    pub best: i64,
    pub delta: i64,
    /// Number of pizzas chosen.
    pub count: usize,
    pub iterations: usize,
    pub exact_match_iteration: Option<usize>,
    pub output: PathBuf,
    pub elapsed_ms: u64,
}

impl RunSummary {
    pub fn new(target: i64, report: &SearchReport, output: PathBuf, timer: &RunTimer) -> Self {
        Self {
            target,
            best: report.best.sum,
            delta: target.saturating_sub(report.best.sum),
            count: report.best.len(),
            iterations: report.iterations_run,
            exact_match_iteration: report.exact_match,
            output,
            elapsed_ms: timer.elapsed_ms(),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Target is {}, best is {}, delta is {}, the number of pizzas is {}",
            self.target, self.best, self.delta, self.count
        )
    }
}
