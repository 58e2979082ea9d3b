//! Randomized greedy solver for the pizza ordering puzzle.
//!
//! Given a slice budget (the target) and the slice counts of each pizza type
//! (the candidates), pick a set of pizzas whose total comes as close to the
//! budget as possible without going over it.

pub mod config;
pub mod error;
pub mod input;
pub mod io_utils;
pub mod output;
pub mod report;
pub mod search;

pub use config::Config;
pub use error::{PizzaError, Result};
pub use input::{parse_problem, read_problem, Problem};
pub use output::{format_selection, write_selection, Emit};
pub use report::{RunSummary, RunTimer};
pub use search::{
    greedy_pass, search, Fit, InputOrder, Pass, RandomOrder, SearchOptions, SearchReport,
    SearchState, Searcher, Selection, Shuffler,
};

use tracing::info;

/// Read, search, write.
///
/// `on_pass` is called with the number of passes run after every step. The
/// output file is only touched once the input has parsed.
pub fn solve<S, F>(config: &Config, shuffler: S, mut on_pass: F) -> Result<RunSummary>
where
    S: Shuffler,
    F: FnMut(usize),
{
    let timer = RunTimer::start();
    let problem = read_problem(&config.input)?;

    let mut searcher = Searcher::new(&problem, config.search_options(), shuffler);
    while searcher.step() == SearchState::Searching {
        on_pass(searcher.iterations_run());
    }
    on_pass(searcher.iterations_run());
    let report = searcher.into_report();

    let output = config.output_path();
    write_selection(&output, &report.best, &problem.candidates, config.emit)?;
    info!(path = %output.display(), "solution written");

    Ok(RunSummary::new(problem.target, &report, output, &timer))
}
