//! Centralized error handling.
//!
//! The store itself never fails: a missing entity is a value (`None` or
//! `false`), and the simulated network layer always resolves. The only
//! errors this crate produces are caller-side input problems, rejected
//! before any store is touched.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Identifier strings must parse to a positive integer.
    #[error("invalid id {0:?}: expected a positive integer")]
    InvalidId(String),

    /// Role labels outside the known hierarchy are denied outright.
    #[error("unknown role {0:?}")]
    UnknownRole(String),
}

/// Convenience alias used across all service signatures
pub type AppResult<T> = Result<T, AppError>;
