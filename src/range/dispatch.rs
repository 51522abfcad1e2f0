//! Route an address to the IPv4 or IPv6 calculator.

use super::{from_ipv4, from_ipv6, RangeError};
use crate::models::{AddressFamily, CidrRange, PrefixOverrides, Prefixes};

/// Compute the block containing `ip`, with `overrides` merged over the
/// default prefixes (`/20` for IPv4, `/48` for IPv6).
///
/// # Examples
/// ```
/// use cidr_range::models::PrefixOverrides;
/// use cidr_range::range::from_ip;
/// let range = from_ip("10.1.2.3", &PrefixOverrides::ipv4(24)).unwrap();
/// assert_eq!(range.to_string(), "10.1.2.0 - 10.1.2.255");
/// assert!(from_ip("not-an-ip", &PrefixOverrides::default()).is_err());
/// ```
pub fn from_ip(ip: &str, overrides: &PrefixOverrides) -> Result<CidrRange, RangeError> {
    from_ip_with(ip, &Prefixes::default().merge(overrides))
}

/// Compute the block containing `ip` using an already-resolved prefix table.
pub fn from_ip_with(ip: &str, prefixes: &Prefixes) -> Result<CidrRange, RangeError> {
    let family = AddressFamily::detect(ip);
    let prefix = prefixes.for_family(family);
    log::trace!("from_ip({ip}) family={family} prefix=/{prefix}");
    match family {
        AddressFamily::V4 => from_ipv4(ip, prefix),
        AddressFamily::V6 => from_ipv6(ip, prefix),
    }
}

/// Best-effort variant of [`from_ip`]: any failure becomes `None`.
pub fn from_ip_lossy(ip: &str, overrides: &PrefixOverrides) -> Option<CidrRange> {
    from_ip(ip, overrides).ok()
}
