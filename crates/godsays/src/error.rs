//! Error types for phrase generation.
//!
//! Two things can go wrong inside the core crate:
//!
//! - [`InvalidAmount`]: a requested sample count is outside
//!   [`MIN_AMOUNT`]..=[`MAX_AMOUNT`] or is not a number at all. Every variant
//!   carries the bound that was violated so callers can render a precise
//!   message.
//! - [`ResourceError`]: the embedded wordlist could not be turned into a
//!   usable corpus. This is fatal at startup.
//!
//! [`MIN_AMOUNT`]: crate::MIN_AMOUNT
//! [`MAX_AMOUNT`]: crate::MAX_AMOUNT

use crate::{MAX_AMOUNT, MIN_AMOUNT};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `godsays` can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A sample count failed validation.
    #[error(transparent)]
    InvalidAmount(#[from] InvalidAmount),

    /// The wordlist could not be loaded.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// A sample count that cannot be used to build a phrase.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAmount {
    /// The value is smaller than the minimum.
    #[error("amount must be between {min} and {max} (got {value})", max = MAX_AMOUNT)]
    BelowMinimum { value: i64, min: usize },

    /// The value is larger than the maximum.
    #[error("amount must be between {min} and {max} (got {value})", min = MIN_AMOUNT)]
    AboveMaximum { value: i64, max: usize },

    /// The input could not be parsed as an integer.
    #[error(
        "invalid amount {input:?}: must be a number between {min} and {max}",
        min = MIN_AMOUNT,
        max = MAX_AMOUNT
    )]
    NotANumber { input: String },
}

/// The embedded wordlist is unusable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    /// The wordlist had no non-blank lines.
    #[error("wordlist `{name}` contains no entries")]
    Empty { name: &'static str },
}
