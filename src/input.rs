//! Problem file parsing.
//!
//! The first token of line 1 is the target; any further tokens on that line
//! are ignored. Every whitespace separated token on the following lines is a
//! candidate, kept in file order so its position doubles as its index.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{PizzaError, Result};

/// Target capacity and candidate slice counts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Problem {
    pub target: i64,
    pub candidates: Vec<i64>,
}

fn parse_token(token: &str, line: usize) -> Result<i64> {
    token.parse::<i64>().map_err(|source| PizzaError::Parse {
        line,
        token: token.to_string(),
        source,
    })
}

/// Parse problem text. Empty text yields target 0 with no candidates.
pub fn parse_problem(text: &str) -> Result<Problem> {
    let mut lines = text.lines().enumerate();
    let mut problem = Problem::default();

    if let Some((idx, first)) = lines.next() {
        if let Some(token) = first.split_whitespace().next() {
            problem.target = parse_token(token, idx + 1)?;
        }
    }

    for (idx, line) in lines {
        for token in line.split_whitespace() {
            problem.candidates.push(parse_token(token, idx + 1)?);
        }
    }

    Ok(problem)
}

/// Read and parse a problem file.
pub fn read_problem<P: AsRef<Path>>(path: P) -> Result<Problem> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| PizzaError::read(path, e))?;
    let problem = parse_problem(&text)?;
    debug!(
        path = %path.display(),
        target = problem.target,
        candidates = problem.candidates.len(),
        "parsed problem"
    );
    Ok(problem)
}
