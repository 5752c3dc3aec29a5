//! Error model shared by the view-state crates.

use thiserror::Error;

/// Result type used across the view-state layer.
pub type CoreResult<T> = Result<T, CoreError>;

/// Failures surfaced by the view-state layer.
///
/// Keep this focused on deterministic, locally-reportable conditions. All of
/// these are recoverable: the owning screen keeps its state and the
/// presentation layer decides how to surface the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Required input is missing or malformed; blocks a gated transition.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A selected media file could not be read. Scoped to that one file;
    /// other files in the same selection are unaffected.
    #[error("media read failed: {0}")]
    MediaRead(String),

    /// The product sink could not take the hand-off. The draft stays with
    /// the wizard so nothing is lost.
    #[error("product sink unavailable: {0}")]
    SinkUnavailable(String),

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced record or screen state does not exist.
    #[error("not found")]
    NotFound,
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn media_read(msg: impl Into<String>) -> Self {
        Self::MediaRead(msg.into())
    }

    pub fn sink_unavailable(msg: impl Into<String>) -> Self {
        Self::SinkUnavailable(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
