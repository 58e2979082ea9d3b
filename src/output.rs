//! Solution file writer: a count line, then the chosen items on one line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::search::Selection;
use crate::{PizzaError, Result};

/// What the second output line lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emit {
    /// 0-based input positions.
    #[default]
    Indices,
    /// Candidate values.
    Values,
}

/// Render a selection in the solution file format.
pub fn format_selection(selection: &Selection, candidates: &[i64], emit: Emit) -> String {
    let items: Vec<String> = match emit {
        Emit::Indices => selection.indices.iter().map(|i| i.to_string()).collect(),
        Emit::Values => selection
            .values(candidates)
            .iter()
            .map(|v| v.to_string())
            .collect(),
    };
    format!("{}\n{}\n", items.len(), items.join(" "))
}

/// Create or truncate `path` and write the selection to it.
pub fn write_selection<P: AsRef<Path>>(
    path: P,
    selection: &Selection,
    candidates: &[i64],
    emit: Emit,
) -> Result<()> {
    let path = path.as_ref();
    let text = format_selection(selection, candidates, emit);
    let file = File::create(path).map_err(|e| PizzaError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| PizzaError::write(path, e))?;
    debug!(path = %path.display(), items = selection.len(), "wrote solution");
    Ok(())
}
