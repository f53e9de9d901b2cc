//! Failure channel shared by every `/ask` caller.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx response and a transport/decode failure are different variants
//! but collapse into the same [`Outcome::Failure`] message for display.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::answer::AnswerResult;

/// Error returned by an `/ask` exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AskError {
    /// The server answered with a non-2xx status.
    #[error("Request failed: {status} {body}")]
    RequestFailed { status: u16, body: String },
    /// The request could not be sent or the response could not be decoded.
    #[error("{0}")]
    Transport(String),
}

impl AskError {
    #[must_use]
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        Self::RequestFailed { status, body: body.into() }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result of a completed submission, ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Success(AnswerResult),
    /// User-facing error text, already prefixed with `Error: `.
    Failure(String),
}

impl Outcome {
    #[must_use]
    pub fn from_result(result: Result<AnswerResult, AskError>) -> Self {
        match result {
            Ok(answer) => Self::Success(answer),
            Err(err) => Self::Failure(format!("Error: {err}")),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
