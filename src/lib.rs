// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Validated, Ordered Email Addresses
//!
//! A value-type library for email addresses: raw bytes go in, a canonical
//! lower-cased `local@domain` value comes out. Everything downstream reads
//! that one canonical form.
//!
//! # Features
//!
//! - Conservative single-pass grammar with typed rejection reasons
//! - Canonical normalized text usable as both display form and sort key
//! - Equality, ordering and the same-domain relation all derived from one
//!   internal comparator
//! - `Ord`/`Eq`/`Hash` wiring for sorting, `BTreeMap` and `HashMap` use
//! - Length-prefixed binary encoding that re-validates on decode
//!
//! # Example
//!
//! ```rust
//! use email_addr::EmailAddress;
//!
//! let alice = EmailAddress::parse("Alice@Example.COM").unwrap();
//! let bob = EmailAddress::parse("bob@example.com").unwrap();
//!
//! assert_eq!(alice.as_str(), "alice@example.com");
//! assert!(alice < bob);
//! assert!(alice.same_domain(&bob));
//! ```

mod codec;
mod compare;
mod error;
mod parser;
mod types;

pub use compare::AddressOrdering;
pub use error::{AddressPart, ParseError, Result};
pub use parser::{MAX_PART_LEN, is_valid, parse_address};
pub use types::EmailAddress;
