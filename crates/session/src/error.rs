//! Error types for the discovery session.

use catalog::EntryId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No catalog entry with id {0}")]
    UnknownEntry(EntryId),
}

/// Convenience Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
