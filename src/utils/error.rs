// Common error types for Stackgen

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StackgenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),
}

pub type Result<T> = std::result::Result<T, StackgenError>;

/// User-facing rendering of a failure: message plus process exit code.
/// `main` is the only place that turns one of these into `process::exit`.
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_error(err: &StackgenError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: 1,
        }
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
    }
}
