//! The canonical email address value

use crate::error::{ParseError, Result};
use crate::parser;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated email address in canonical lower-case form
///
/// The canonical text is the entire address ASCII lower-cased, stored as one
/// `local@domain` string. That string is the only state: display, ordering,
/// hashing and the wire encoding all read it. Instances exist only for input
/// that passed the grammar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress {
    /// Canonical `local@domain` text
    text: String,

    /// Byte offset of the `@` within `text`
    at: usize,
}

impl EmailAddress {
    /// Called by the parser once the text is validated and lower-cased
    pub(crate) const fn from_canonical(text: String, at: usize) -> Self {
        Self { text, at }
    }

    /// Parse and normalize an address from text
    pub fn parse(input: &str) -> Result<Self> {
        parser::parse_address(input.as_bytes())
    }

    /// The canonical `local@domain` text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The canonical text as bytes, for text-based persistence
    ///
    /// Round-trips exactly through [`parse_address`](crate::parse_address).
    #[must_use]
    pub fn to_text(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// The part before the `@`
    #[must_use]
    pub fn local(&self) -> &str {
        &self.text[..self.at]
    }

    /// The part after the `@`
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.text[self.at + 1..]
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for EmailAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(addr: EmailAddress) -> Self {
        addr.text
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
