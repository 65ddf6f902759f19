//! Error handling for init-project.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

use crate::validate::ValidationError;

/// All errors that can abort an init-project invocation.
///
/// Every variant is terminal for the current run; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A project or executable name failed identifier validation
    #[error("Validation error: {0}.")]
    ValidationError(#[from] ValidationError),

    /// The project number is not an integer in the accepted range
    #[error("Range error: {0}.")]
    RangeError(String),

    /// The working directory is not a usable template checkout
    #[error("Precondition error: {0}.")]
    PreconditionError(String),

    /// An ignore rule could not be compiled
    #[error("Ignore rule error: {0}.")]
    IgnoreRuleError(String),

    /// Walking the working directory failed
    #[error("Walk error: {0}.")]
    WalkError(String),

    /// A planned filesystem action could not be applied
    #[error("Failed to process '{path}': {reason}.")]
    ProcessError { path: String, reason: String },

    /// Interactive confirmation failed
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
