use std::fmt;

/// The single error type returned by this crate.
///
/// Every invalid-input condition named in the error surface (malformed
/// construction string, non-numeric simplify argument, non-positive random
/// digit count, divide-by-zero, invalid `to_string` argument) is one
/// variant here rather than a separate error type: callers match once and
/// retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input string did not match any of the supported grammars
    /// (signed integer, decimal with optional recurring section, fraction,
    /// mixed fraction).
    InvalidNumber(String),
    /// A fraction or mixed fraction had an empty numerator or denominator.
    EmptyFractionComponent,
    /// Division (or construction of a fraction) with a zero denominator.
    DivideByZero,
    /// `simplify`'s time budget argument was negative or `NaN`. `0.0` is
    /// valid and means "no deadline".
    InvalidSimplifyArgument,
    /// `random`'s digit-count argument was not a positive integer.
    InvalidRandomArgument,
    /// `to_string`'s maximum-decimal-places argument was not a positive
    /// integer.
    InvalidToStringArgument,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber(s) => write!(f, "'{}' is not a valid number", s),
            Self::EmptyFractionComponent => write!(
                f,
                "fractions must have a non-empty numerator and denominator"
            ),
            Self::DivideByZero => write!(f, "division by zero"),
            Self::InvalidSimplifyArgument => write!(
                f,
                "simplify's time budget must be a non-negative number of milliseconds"
            ),
            Self::InvalidRandomArgument => {
                write!(f, "random's digit count must be a positive integer")
            }
            Self::InvalidToStringArgument => {
                write!(f, "to_string's max_dp argument must be a positive integer")
            }
        }
    }
}

impl std::error::Error for Error {}
