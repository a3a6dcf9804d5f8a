//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! `#[from]` variant so `?` works across crate boundaries.

use thiserror::Error;

use crate::SimTime;

/// The base error type for `el-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("clock cannot move backwards from {now} to {requested}")]
    ClockRewind { now: SimTime, requested: SimTime },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `el-core`.
pub type CoreResult<T> = Result<T, CoreError>;
