//! Errors raised when board names arrive as text.
//!
//! The typed API cannot fail: an alias that a board does not declare simply
//! has no symbol. Only parsing from strings reports errors at runtime.

use core::fmt;

/// Result type for name parsing
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Name parsing error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// No pin alias with this name
    UnknownAlias,
    /// No board variant with this name
    UnknownBoard,
    /// No bus kind with this name
    UnknownBus,
    /// No bus role with this name
    UnknownRole,
    /// GPIO number past the end of the package
    NoSuchPin,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownAlias => write!(f, "Unknown pin alias"),
            Error::UnknownBoard => write!(f, "Unknown board"),
            Error::UnknownBus => write!(f, "Unknown bus kind"),
            Error::UnknownRole => write!(f, "Unknown bus role"),
            Error::NoSuchPin => write!(f, "No such GPIO"),
        }
    }
}
