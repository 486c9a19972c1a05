//! Demo error types.

use miette::Diagnostic;
use thiserror::Error;

/// Errors the demo can end with.
#[derive(Error, Diagnostic, Debug)]
pub enum DemoError {
    #[error("Check '{check}' failed")]
    #[diagnostic(
        code(tuiro::demo::check_failed),
        help("This failure was requested with --fail.")
    )]
    CheckFailed { check: String },
}
