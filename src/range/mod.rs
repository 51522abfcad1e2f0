//! CIDR block computation.
//!
//! - [`v4`] - IPv4 calculator using 32-bit masking
//! - [`v6`] - IPv6 calculator masking nibble by nibble from the low end
//! - [`dispatch`] - Family detection and prefix resolution
//!
//! Every function is pure: the same input always yields the same range, and a
//! malformed address is reported as [`RangeError::InvalidAddress`] instead of
//! panicking.

mod dispatch;
mod v4;
mod v6;

use crate::models::AddressFamily;
use thiserror::Error;

pub use dispatch::{from_ip, from_ip_lossy, from_ip_with};
pub use v4::{from_ipv4, ipv4_mask, IPV4_BITS};
pub use v6::{from_ipv6, IPV6_BITS};

/// Reasons a range could not be computed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid {family} address: {input:?}")]
    InvalidAddress { family: AddressFamily, input: String },
    #[error("prefix /{prefix} is too long for {family}, max is /{max}")]
    PrefixTooLong {
        family: AddressFamily,
        prefix: u8,
        max: u8,
    },
}

/// Check a prefix fits the address width of `family`.
pub(crate) fn check_prefix(family: AddressFamily, prefix: u8) -> Result<(), RangeError> {
    let max = family.bits();
    if prefix > max {
        Err(RangeError::PrefixTooLong {
            family,
            prefix,
            max,
        })
    } else {
        Ok(())
    }
}

pub(crate) fn invalid_address(family: AddressFamily, input: &str) -> RangeError {
    log::debug!("unable to parse {family} address {input:?}");
    RangeError::InvalidAddress {
        family,
        input: input.to_string(),
    }
}
