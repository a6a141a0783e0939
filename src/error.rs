//! Error types for the revcode library.

use thiserror::Error;

/// Errors produced by the revcode library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevCodeError {
    /// Configuration parameters violate a codec invariant.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// A code could not be decoded under the active configuration.
    #[error("Malformed code: {0}")]
    MalformedCode(String),
    /// A symbol is not a member of the alphabet.
    #[error("Symbol {0:?} is not in the alphabet")]
    UnknownSymbol(char),
    /// A value does not fit in the digit width reserved for it.
    #[error("{field} value {value} is out of range (maximum {max})")]
    ValueOutOfRange {
        /// Which half of the code the value belongs to (`store` or `sequence`).
        field: &'static str,
        value: u64,
        max: u64,
    },
    /// Codes decoded back to values other than the ones they were encoded from.
    #[error("{mismatches} codes did not decode back to the values they were encoded from")]
    RoundTripMismatch { mismatches: usize },
    /// A configuration file could not be read or parsed.
    #[error("Cannot load configuration from {path}: {reason}")]
    ConfigFile { path: String, reason: String },
}
