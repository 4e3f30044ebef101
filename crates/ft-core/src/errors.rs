//! Error types for feiertage-rs.
//!
//! The library is a pure computation over static tables, so the error
//! surface is small: a table that is declared wrong (a configuration
//! error, caught when the table is validated) and lookups by an unknown
//! identifier. Date derivation itself has no error path.

use thiserror::Error;

/// The top-level error type used throughout feiertage-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A holiday table is declared wrong: a chained rule that does not
    /// point strictly backwards, a fixed date that cannot exist, or a
    /// region reference outside the country's region enumeration.
    #[error("holiday table misconfigured: {0}")]
    Configuration(String),

    /// No country is registered under the given ISO 3166-1 code.
    #[error("unknown country code: {0}")]
    UnknownCountry(String),

    /// No region of the country carries the given ISO 3166-2 code.
    #[error("unknown region code: {0}")]
    UnknownRegion(String),
}

/// Shorthand `Result` type used throughout feiertage-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a table invariant, returning `Err(Error::Configuration(...))` if
/// `$cond` is false.
///
/// # Example
/// ```
/// use ft_core::{ensure, errors::Error};
/// fn at_most_32(bits: usize) -> ft_core::errors::Result<usize> {
///     ensure!(bits <= 32, "at most 32 regions per country, got {bits}");
///     Ok(bits)
/// }
/// assert!(at_most_32(16).is_ok());
/// assert!(at_most_32(40).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}

/// Bail out of table validation with `Err(Error::Configuration(...))`.
///
/// # Example
/// ```
/// use ft_core::{fail, errors::Error};
/// fn reject() -> ft_core::errors::Result<()> {
///     fail!("entry {} is unusable", 3);
/// }
/// assert_eq!(
///     reject(),
///     Err(Error::Configuration("entry 3 is unusable".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Configuration(
            format!($($msg)*)
        ))
    };
}
