//! Error types for email address parsing and decoding

use std::fmt;
use thiserror::Error;

/// Errors that can occur while parsing or decoding an email address
///
/// Every variant is an input-validation failure; the first violation found
/// is the one reported.
#[derive(Error, Debug)]
pub enum ParseError {
    /// No `@` separator in the input
    #[error("missing '@' separator")]
    MissingAtSign,

    /// Local or domain part exceeds the 256-byte limit
    #[error("{part} part is {len} bytes, limit is 256")]
    TooLong { part: AddressPart, len: usize },

    /// Local part does not match the label grammar
    #[error("invalid local part: \"{0}\"")]
    InvalidLocalPart(String),

    /// Domain part does not match the label grammar or has fewer than two labels
    #[error("invalid domain part: \"{0}\"")]
    InvalidDomainPart(String),

    /// Binary payload whose declared length does not match the bytes present
    #[error("truncated binary payload: {declared} bytes declared, {available} available")]
    TruncatedBinaryPayload { declared: usize, available: usize },
}

/// Which side of the `@` an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressPart {
    Local,
    Domain,
}

impl fmt::Display for AddressPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Domain => write!(f, "domain"),
        }
    }
}

/// Result type for email address operations
pub type Result<T> = std::result::Result<T, ParseError>;
