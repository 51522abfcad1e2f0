//! IPv4 block bounds.

use super::{check_prefix, invalid_address, RangeError};
use crate::models::{AddressFamily, CidrRange};
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Width of an IPv4 address (32 bits).
pub const IPV4_BITS: u8 = 32;

/// Convert a prefix length to a network mask.
///
/// Prefixes longer than 32 are clamped to a full mask; callers validate first.
///
/// # Examples
/// ```
/// use cidr_range::range::ipv4_mask;
/// assert_eq!(ipv4_mask(20), 0xFFFF_F000);
/// assert_eq!(ipv4_mask(0), 0);
/// ```
pub fn ipv4_mask(prefix: u8) -> u32 {
    let right_len = IPV4_BITS - prefix.min(IPV4_BITS);
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Compute the block containing `ip` under `prefix`.
///
/// # Examples
/// ```
/// use cidr_range::range::from_ipv4;
/// let range = from_ipv4("192.168.1.130", 20).unwrap();
/// assert_eq!(range.first.to_string(), "192.168.0.0");
/// assert_eq!(range.last.to_string(), "192.168.15.255");
/// ```
pub fn from_ipv4(ip: &str, prefix: u8) -> Result<CidrRange, RangeError> {
    check_prefix(AddressFamily::V4, prefix)?;
    let addr = Ipv4Addr::from_str(ip).map_err(|_| invalid_address(AddressFamily::V4, ip))?;

    let first = u32::from(addr) & ipv4_mask(prefix);
    let size = 1u64 << (IPV4_BITS - prefix);
    // first is aligned to size, so this stays within u32
    let last = (first as u64 + size - 1) as u32;

    Ok(CidrRange {
        first: IpAddr::V4(Ipv4Addr::from(first)),
        last: IpAddr::V4(Ipv4Addr::from(last)),
    })
}
