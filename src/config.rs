use std::ffi::OsString;
use std::path::PathBuf;

use crate::output::Emit;
use crate::search::{Fit, Pass, SearchOptions};

/// Suffix appended to the input path when no output path is given.
pub const OUTPUT_SUFFIX: &str = ".out";

/// Runtime configuration for a single solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Problem file to read.
    pub input: PathBuf,
    /// Solution file to write; derived from `input` when unset.
    pub output: Option<PathBuf>,
    /// Number of randomized greedy passes.
    pub iterations: usize,
    pub fit: Fit,
    pub pass: Pass,
    pub emit: Emit,
}

impl Default for Config {
    fn default() -> Self {
        let search = SearchOptions::default();
        Self {
            input: PathBuf::from("a_example.in"),
            output: None,
            iterations: search.iterations,
            fit: search.fit,
            pass: search.pass,
            emit: Emit::default(),
        }
    }
}

impl Config {
    /// Explicit output path, or the input path with [`OUTPUT_SUFFIX`] appended.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let mut name = OsString::from(self.input.as_os_str());
                name.push(OUTPUT_SUFFIX);
                PathBuf::from(name)
            }
        }
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            iterations: self.iterations,
            fit: self.fit,
            pass: self.pass,
        }
    }
}
