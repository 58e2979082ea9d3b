//! User facing rendering of solver errors for the command line.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::PizzaError;

/// Solver error paired with the message shown to the user.
#[derive(Error, Debug)]
#[error("{msg}")]
pub struct CliError {
    pub msg: String,
    #[source]
    pub source: PizzaError,
}

impl From<PizzaError> for CliError {
    fn from(err: PizzaError) -> Self {
        Self {
            msg: cli_message(&err),
            source: err,
        }
    }
}

/// Suggested next step for an I/O failure of the given kind.
fn io_suggestion(err: &io::Error) -> &'static str {
    match err.kind() {
        io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        io::ErrorKind::PermissionDenied => "Check permissions or run as a different user.",
        io::ErrorKind::InvalidData => "The file must be plain UTF-8 text.",
        io::ErrorKind::WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check the path and try again.",
    }
}

fn io_message(operation: &str, path: &Path, err: &io::Error) -> String {
    format!(
        "Error {operation} '{}': {err}. {}",
        path.display(),
        io_suggestion(err)
    )
}

/// Full message for an error, naming the failed operation and a fix.
pub fn cli_message(err: &PizzaError) -> String {
    match err {
        PizzaError::Read { path, source } => io_message("reading input file", path, source),
        PizzaError::Write { path, source } => io_message("writing output file", path, source),
        PizzaError::Parse { line, token, .. } => format!(
            "Error parsing input file: '{token}' on line {line} is not an integer. \
             Input must be the target on line 1 followed by whitespace separated integers."
        ),
    }
}

/// Convert a library error into a CLI error.
pub fn pizza_cli_error(err: PizzaError) -> CliError {
    CliError::from(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_not_found_suggests_checking_path() {
        let err = PizzaError::Read {
            path: "a.in".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let msg = cli_message(&err);
        assert!(msg.starts_with("Error reading input file 'a.in'"));
        assert!(msg.contains("Check that the file exists"));
    }

    #[test]
    fn parse_hint_names_token_and_line() {
        let source = "x1".parse::<i64>().unwrap_err();
        let err = PizzaError::Parse {
            line: 2,
            token: "x1".into(),
            source,
        };
        let cli = pizza_cli_error(err);
        assert!(cli.msg.starts_with("Error parsing input file: "));
        assert!(cli.msg.contains("'x1' on line 2 is not an integer"));
        assert!(std::error::Error::source(&cli).is_some());
    }

    #[test]
    fn write_to_input_path_is_still_a_write_error() {
        let err = PizzaError::Write {
            path: "a.in".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let cli = pizza_cli_error(err);
        assert!(cli.msg.contains("Error writing output file 'a.in'"));
        assert!(cli.msg.contains("Check permissions"));
        assert_eq!(cli.to_string(), cli.msg);
    }
}
