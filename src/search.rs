//! Randomized greedy search.
//!
//! Each iteration permutes the candidate order, walks it once accumulating
//! every candidate that still fits under the target, and keeps the best pass
//! seen so far. A pass that hits the target exactly ends the search.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::input::Problem;

/// Source of candidate orderings for each greedy pass.
pub trait Shuffler {
    /// Permute `order` in place. `order` holds candidate indices; an
    /// implementation must only reorder them, never rewrite them.
    fn shuffle(&mut self, order: &mut [usize]);
}

/// Leaves candidates in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl Shuffler for InputOrder {
    fn shuffle(&mut self, _order: &mut [usize]) {}
}

/// Uniform random permutations drawn from `R`.
#[derive(Debug, Clone)]
pub struct RandomOrder<R> {
    rng: R,
}

impl<R: Rng> RandomOrder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOrder<StdRng> {
    /// Seed from the wall clock. Runs are not reproducible.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        debug!(seed, "seeded shuffler from clock");
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shuffler for RandomOrder<R> {
    fn shuffle(&mut self, order: &mut [usize]) {
        order.shuffle(&mut self.rng);
    }
}

/// Admission test for adding a candidate to the running sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fit {
    /// `sum + candidate <= target`; the target itself is reachable.
    #[default]
    Inclusive,
    /// `sum + candidate < target`; the pass always stays below the target.
    Exclusive,
}

impl Fit {
    pub fn fits(self, sum: i64, candidate: i64, target: i64) -> bool {
        match sum.checked_add(candidate) {
            Some(next) => match self {
                Fit::Inclusive => next <= target,
                Fit::Exclusive => next < target,
            },
            None => false,
        }
    }
}

/// What a pass does with a candidate that does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pass {
    /// Skip it and keep walking.
    #[default]
    Skip,
    /// End the pass.
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub iterations: usize,
    pub fit: Fit,
    pub pass: Pass,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            iterations: 3,
            fit: Fit::default(),
            pass: Pass::default(),
        }
    }
}

/// Chosen candidates, as ascending input indices, and their total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub indices: Vec<usize>,
    pub sum: i64,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Candidate values in index order.
    pub fn values(&self, candidates: &[i64]) -> Vec<i64> {
        self.indices
            .iter()
            .filter_map(|&i| candidates.get(i).copied())
            .collect()
    }

    /// Whether `self` is a better answer than `other` for `target`. A
    /// selection within the target beats one over it, then the larger sum
    /// wins; ties keep `other`.
    pub fn beats(&self, other: &Selection, target: i64) -> bool {
        (self.sum <= target, self.sum) > (other.sum <= target, other.sum)
    }
}

/// Single greedy walk over `candidates` in the given `order`. Indices outside
/// `candidates` are ignored.
pub fn greedy_pass(
    candidates: &[i64],
    order: &[usize],
    target: i64,
    fit: Fit,
    pass: Pass,
) -> Selection {
    let mut selection = Selection::default();

    for &idx in order {
        let Some(&value) = candidates.get(idx) else {
            continue;
        };
        if !fit.fits(selection.sum, value, target) {
            match pass {
                Pass::Skip => continue,
                Pass::Stop => break,
            }
        }
        selection.sum += value;
        selection.indices.push(idx);
        if selection.sum == target {
            break;
        }
    }

    selection.indices.sort_unstable();
    selection
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Done,
}

/// Outcome of a finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub best: Selection,
    /// Number of greedy passes actually run.
    pub iterations_run: usize,
    /// 0-based iteration whose pass hit the target exactly.
    pub exact_match: Option<usize>,
}

impl SearchReport {
    pub fn is_exact(&self) -> bool {
        self.exact_match.is_some()
    }
}

/// Best-of-N driver over repeated greedy passes.
pub struct Searcher<'a, S> {
    problem: &'a Problem,
    options: SearchOptions,
    shuffler: S,
    order: Vec<usize>,
    best: Option<Selection>,
    iteration: usize,
    exact_match: Option<usize>,
    state: SearchState,
}

impl<'a, S: Shuffler> Searcher<'a, S> {
    pub fn new(problem: &'a Problem, options: SearchOptions, shuffler: S) -> Self {
        Self {
            problem,
            options,
            shuffler,
            order: Vec::with_capacity(problem.candidates.len()),
            best: None,
            iteration: 0,
            exact_match: None,
            state: SearchState::Searching,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Best selection so far; `None` before the first pass.
    pub fn best(&self) -> Option<&Selection> {
        self.best.as_ref()
    }

    pub fn iterations_run(&self) -> usize {
        self.iteration
    }

    /// Run one greedy pass, or finish if the budget is spent.
    pub fn step(&mut self) -> SearchState {
        if self.state == SearchState::Done {
            return SearchState::Done;
        }
        if self.iteration >= self.options.iterations {
            self.state = SearchState::Done;
            return self.state;
        }

        self.order.clear();
        self.order.extend(0..self.problem.candidates.len());
        // A single pass stays in input order.
        if self.options.iterations != 1 {
            self.shuffler.shuffle(&mut self.order);
        }

        let target = self.problem.target;
        let selection = greedy_pass(
            &self.problem.candidates,
            &self.order,
            target,
            self.options.fit,
            self.options.pass,
        );
        trace!(
            iteration = self.iteration,
            sum = selection.sum,
            picked = selection.len(),
            "greedy pass"
        );

        let exact = selection.sum == target;
        let improved = match &self.best {
            Some(best) => selection.beats(best, target),
            None => true,
        };
        if improved {
            debug!(
                iteration = self.iteration,
                sum = selection.sum,
                delta = target.saturating_sub(selection.sum),
                "new best"
            );
            self.best = Some(selection);
        }

        if exact {
            info!("found exact match in {} iterations", self.iteration + 1);
            self.exact_match = Some(self.iteration);
            self.state = SearchState::Done;
        }
        self.iteration += 1;
        if self.iteration >= self.options.iterations {
            self.state = SearchState::Done;
        }
        self.state
    }

    /// Drive the search to completion.
    pub fn run(mut self) -> SearchReport {
        while self.step() == SearchState::Searching {}
        self.into_report()
    }

    pub fn into_report(self) -> SearchReport {
        SearchReport {
            best: self.best.unwrap_or_default(),
            iterations_run: self.iteration,
            exact_match: self.exact_match,
        }
    }
}

/// Run a complete search with the given shuffler.
pub fn search<S: Shuffler>(problem: &Problem, options: SearchOptions, shuffler: S) -> SearchReport {
    Searcher::new(problem, options, shuffler).run()
}
