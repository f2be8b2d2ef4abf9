//! Error types for washquote.

use thiserror::Error;

/// Result type alias for estimation operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Errors that can occur while producing an estimate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// The job inputs are outside the domain of the engine.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Setup, breakdown and drive time consume the whole working day.
    #[error(
        "No productive time left in a day: usable hours per tech would be {usable_daily_hours:.2}"
    )]
    NoProductiveTime {
        /// The (negative) usable hours per tech per day.
        usable_daily_hours: f64,
    },

    /// A derived quantity overflowed even though every input was finite.
    #[error("{quantity} is too large to estimate; check the job's dimensions and rates")]
    Overflow {
        /// Name of the quantity that left the finite range.
        quantity: &'static str,
    },
}

/// Error for job inputs that are rejected before any computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The crew has no trucks.
    #[error("At least one truck is required")]
    NoTrucks,

    /// A value that must be zero or greater is negative.
    #[error("{field} must not be negative (got {value})")]
    Negative {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A value that is used as a divisor is zero or negative.
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Name of the offending input.
        field: &'static str,
    },

    /// The manual day-count override is below one.
    #[error("Day count override must be at least 1 (got {0})")]
    InvalidDayOverride(u32),
}

/// Error returned when parsing an unknown enum option from a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} '{value}', expected one of: {expected}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseEnumError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.into(),
            expected,
        }
    }
}
