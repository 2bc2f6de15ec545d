//! Domain errors shared by every eratos crate.

use thiserror::Error;

/// Errors reported before a prime operation produces any output.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PrimeError {
    /// An argument that must be non-negative was negative.
    #[error("{what} must be non-negative, got {value}")]
    Negative {
        /// Name of the offending argument.
        what: &'static str,
        /// The rejected value, formatted.
        value: String,
    },

    /// An argument that must be at least one was not.
    #[error("{what} must be at least 1, got {value}")]
    NotPositive {
        /// Name of the offending argument.
        what: &'static str,
        /// The rejected value, formatted.
        value: String,
    },

    /// An argument does not fit the machine index range.
    #[error("{what} is too large to index in memory: {value}")]
    TooLarge {
        /// Name of the offending argument.
        what: &'static str,
        /// The rejected value, formatted.
        value: String,
    },
}

impl PrimeError {
    /// Builds a [`PrimeError::Negative`].
    pub fn negative(what: &'static str, value: &impl std::fmt::Debug) -> Self {
        Self::Negative {
            what,
            value: format!("{value:?}"),
        }
    }

    /// Builds a [`PrimeError::NotPositive`].
    pub fn not_positive(what: &'static str, value: &impl std::fmt::Debug) -> Self {
        Self::NotPositive {
            what,
            value: format!("{value:?}"),
        }
    }

    /// Builds a [`PrimeError::TooLarge`].
    pub fn too_large(what: &'static str, value: &impl std::fmt::Debug) -> Self {
        Self::TooLarge {
            what,
            value: format!("{value:?}"),
        }
    }
}

/// Result alias for fallible prime operations.
pub type Result<T> = std::result::Result<T, PrimeError>;

/// Rejects values below zero.
///
/// # Errors
///
/// Returns [`PrimeError::Negative`] when `value < 0`.
pub fn ensure_non_negative<T: eratos_integers::PrimeInt>(
    what: &'static str,
    value: &T,
) -> Result<()> {
    if *value < T::zero() {
        return Err(PrimeError::negative(what, value));
    }
    Ok(())
}

/// Rejects values below one.
///
/// # Errors
///
/// Returns [`PrimeError::NotPositive`] when `value < 1`.
pub fn ensure_positive<T: eratos_integers::PrimeInt>(what: &'static str, value: &T) -> Result<()> {
    if *value < T::one() {
        return Err(PrimeError::not_positive(what, value));
    }
    Ok(())
}

/// Converts a non-negative value into a `usize` index.
///
/// # Errors
///
/// Returns [`PrimeError::Negative`] for negative values and
/// [`PrimeError::TooLarge`] when the value exceeds `usize::MAX`.
pub fn to_index<T: eratos_integers::PrimeInt>(what: &'static str, value: &T) -> Result<usize> {
    ensure_non_negative(what, value)?;
    value
        .to_usize()
        .ok_or_else(|| PrimeError::too_large(what, value))
}
