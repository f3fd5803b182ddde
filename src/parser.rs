//! Grammar validation and normalization for raw address bytes

use crate::error::{AddressPart, ParseError, Result};
use crate::types::EmailAddress;
use regex::bytes::Regex;
use tracing::debug;

/// Byte limit on each side of the `@`
pub const MAX_PART_LEN: usize = 256;

// One dotted label: a letter, then letters, digits or hyphens. Both grammars
// are built from this single atom so they cannot drift apart.
const LABEL: &str = "[a-zA-Z][a-zA-Z0-9-]*";

static LOCAL_RE: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(&format!(r"^{LABEL}(\.{LABEL})*$")).unwrap());

static DOMAIN_RE: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(&format!(r"^({LABEL}\.)+{LABEL}$")).unwrap());

/// Parse raw bytes into a normalized [`EmailAddress`]
///
/// The first `@` splits local from domain. Each part is length-checked and
/// matched against the label grammar, then the whole address is ASCII
/// lower-cased into its canonical `local@domain` form. Any further `@` ends
/// up inside the domain part, where it fails the grammar.
pub fn parse_address(raw: &[u8]) -> Result<EmailAddress> {
    let at = raw
        .iter()
        .position(|&b| b == b'@')
        .ok_or(ParseError::MissingAtSign)?;
    let (local, domain) = (&raw[..at], &raw[at + 1..]);

    if local.len() > MAX_PART_LEN {
        return Err(ParseError::TooLong {
            part: AddressPart::Local,
            len: local.len(),
        });
    }
    if domain.len() > MAX_PART_LEN {
        return Err(ParseError::TooLong {
            part: AddressPart::Domain,
            len: domain.len(),
        });
    }

    if !LOCAL_RE.is_match(local) {
        return Err(ParseError::InvalidLocalPart(
            String::from_utf8_lossy(local).into_owned(),
        ));
    }
    if !DOMAIN_RE.is_match(domain) {
        return Err(ParseError::InvalidDomainPart(
            String::from_utf8_lossy(domain).into_owned(),
        ));
    }

    // The grammar admits ASCII only, so every validated byte maps directly
    // onto a char.
    let text: String = raw
        .iter()
        .map(|b| char::from(b.to_ascii_lowercase()))
        .collect();

    debug!("parsed address: {}", text);

    Ok(EmailAddress::from_canonical(text, at))
}

/// Non-throwing probe: would `raw` parse?
///
/// For bulk-validation paths; no value is built and nothing is allocated.
#[must_use]
pub fn is_valid(raw: &[u8]) -> bool {
    raw.iter().position(|&b| b == b'@').is_some_and(|at| {
        let (local, domain) = (&raw[..at], &raw[at + 1..]);
        local.len() <= MAX_PART_LEN
            && domain.len() <= MAX_PART_LEN
            && LOCAL_RE.is_match(local)
            && DOMAIN_RE.is_match(domain)
    })
}
