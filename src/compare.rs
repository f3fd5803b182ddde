//! The single comparator and every predicate derived from it

use crate::types::EmailAddress;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Outcome of comparing two addresses
///
/// Domains order first; local parts only break ties between equal domains.
/// The outcome carries the same-domain relation alongside the strict order,
/// and every predicate is a total match over these five cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressOrdering {
    /// Left domain sorts before right domain
    DomainLess,

    /// Equal domains, left local sorts before right local
    SameDomainLess,

    /// Identical canonical text
    Equal,

    /// Equal domains, left local sorts after right local
    SameDomainGreater,

    /// Left domain sorts after right domain
    DomainGreater,
}

impl AddressOrdering {
    /// Collapse to the strict total order
    #[must_use]
    pub const fn ordering(self) -> Ordering {
        match self {
            Self::DomainLess | Self::SameDomainLess => Ordering::Less,
            Self::Equal => Ordering::Equal,
            Self::SameDomainGreater | Self::DomainGreater => Ordering::Greater,
        }
    }

    /// True when both sides share a domain, equality included
    #[must_use]
    pub const fn is_same_domain(self) -> bool {
        matches!(
            self,
            Self::SameDomainLess | Self::Equal | Self::SameDomainGreater
        )
    }

    /// True when the domains differ
    #[must_use]
    pub const fn is_different_domain(self) -> bool {
        !self.is_same_domain()
    }

    /// The outcome as seen from the other side of the pair
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::DomainLess => Self::DomainGreater,
            Self::SameDomainLess => Self::SameDomainGreater,
            Self::Equal => Self::Equal,
            Self::SameDomainGreater => Self::SameDomainLess,
            Self::DomainGreater => Self::DomainLess,
        }
    }
}

impl EmailAddress {
    /// Compare two addresses, domain first
    ///
    /// Domains are byte-compared; only when they are equal are the local
    /// parts inspected. Both slices come from the canonical lower-cased
    /// text, so the comparison is case-insensitive by construction.
    #[must_use]
    pub fn compare(&self, other: &Self) -> AddressOrdering {
        match self.domain().cmp(other.domain()) {
            Ordering::Less => AddressOrdering::DomainLess,
            Ordering::Greater => AddressOrdering::DomainGreater,
            Ordering::Equal => match self.local().cmp(other.local()) {
                Ordering::Less => AddressOrdering::SameDomainLess,
                Ordering::Equal => AddressOrdering::Equal,
                Ordering::Greater => AddressOrdering::SameDomainGreater,
            },
        }
    }

    /// True when both addresses share a domain
    #[must_use]
    pub fn same_domain(&self, other: &Self) -> bool {
        self.compare(other).is_same_domain()
    }

    /// True when the addresses live on different domains
    #[must_use]
    pub fn different_domain(&self, other: &Self) -> bool {
        self.compare(other).is_different_domain()
    }

    /// Stable 32-bit FNV-1a hash of the canonical text
    ///
    /// Only the canonical text is hashed, so equal addresses hash equally.
    #[must_use]
    pub fn hash32(&self) -> u32 {
        self.as_str()
            .bytes()
            .fold(0x811c_9dc5_u32, |acc, b| {
                (acc ^ u32::from(b)).wrapping_mul(0x0100_0193)
            })
    }
}

impl PartialEq for EmailAddress {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == AddressOrdering::Equal
    }
}

impl Eq for EmailAddress {}

impl Ord for EmailAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other).ordering()
    }
}

impl PartialOrd for EmailAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for EmailAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}
