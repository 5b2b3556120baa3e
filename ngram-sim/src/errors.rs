//! Error definitions.
use std::result;

use thiserror::Error;

/// A specialized Result type for this library.
pub type Result<T, E = NgramSimError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NgramSimError {
    /// The window size `n` of an n-gram was less than 1.
    #[error("InvalidWindowSize: window size must be at least 1, but got {0}.")]
    InvalidWindowSize(usize),

    /// Both compared texts yielded no n-grams, so the Dice coefficient has no value.
    /// Only returned under [`EmptyPolicy::Strict`](crate::EmptyPolicy::Strict).
    #[error("DivisionUndefined: both texts yield no n-grams.")]
    DivisionUndefined,
}

impl NgramSimError {
    pub(crate) const fn check_window_size(n: usize) -> Result<()> {
        if n == 0 {
            return Err(Self::InvalidWindowSize(n));
        }
        Ok(())
    }
}
