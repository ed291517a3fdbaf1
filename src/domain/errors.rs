//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed or out-of-range profile field. The UI re-prompts.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The external generation call failed (transport, auth, provider).
    /// Surfaced to the user as-is; no retry is attempted.
    #[error("Plan generation failed: {0}")]
    Generation(String),

    /// Writing the plan report to disk failed.
    #[error("Report error: {0}")]
    Report(String),

    /// Terminal prompt failure (interrupted, closed, render error).
    #[error("Input error: {0}")]
    Input(String),
}
