//! CLI support for simplelisp
//!
//! Everything the `simplelisp` binary does is reachable from here, so the
//! interpreter can be driven from other tools without spawning a process.

mod check;
mod convert;
mod docs;
mod repl;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::value_to_json;
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use repl::{BANNER, run_repl};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Parser error
    Parse(crate::ParseError),
    /// Evaluation error
    Eval(crate::EvalError),
    /// IO error
    Io(io::Error),
    /// No program given and nothing piped to stdin
    NoInput,
    /// Unknown documentation category
    UnknownCategory(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Eval(e) => write!(f, "Evaluation error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No input provided. Pass a file or pipe a program to stdin.")
            }
            CliError::UnknownCategory(c) => {
                write!(f, "Unknown category: '{}'\nRun 'simplelisp docs' to see available categories.", c)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Eval(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::EvalError> for CliError {
    fn from(e: crate::EvalError) -> Self {
        CliError::Eval(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
