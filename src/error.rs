//! Error handling for pgstarter.
//! Defines custom error types and results used throughout the application.

use thiserror::Error;

/// Custom error types for pgstarter operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// The terminal prompt failed for a reason other than the user cancelling it
    #[error("Prompt error: {0}.")]
    PromptError(String),

    #[error("Output directory '{output_dir}' does not exist.")]
    OutputDirectoryNotFound { output_dir: String },
}

/// Convenience type alias for Results with pgstarter's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
