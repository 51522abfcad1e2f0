//! Domain models for CIDR range computation.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`AddressFamily`] - IPv4 / IPv6 classification of an address string
//! - [`CidrRange`] - Inclusive first/last bounds of a block
//! - [`Prefixes`] and [`PrefixOverrides`] - Default prefix lengths and per-call overrides

mod family;
mod prefix;
mod range;

// Re-export public types
pub use family::AddressFamily;
pub use prefix::{PrefixOverrides, Prefixes, DEFAULT_IPV4_PREFIX, DEFAULT_IPV6_PREFIX};
pub use range::CidrRange;
