//! Error types for parsing discovery criteria from user input.

use thiserror::Error;

/// Errors raised when a sort mode or pricing tag string is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown sort mode '{0}' (expected popularity, alphabetical or newest)")]
    UnknownSortMode(String),

    #[error("Unknown pricing tag '{0}' (expected Free, Paid or Freemium)")]
    UnknownPricingTier(String),
}
