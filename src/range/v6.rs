//! IPv6 block bounds.
//!
//! The flexible low-order bits are cleared (first address) or filled (last
//! address) one nibble at a time starting from the least significant nibble.
//! A prefix that does not fall on a nibble boundary leaves a partially masked
//! nibble, whose fixed high bits are kept.

use super::{check_prefix, invalid_address, RangeError};
use crate::models::{AddressFamily, CidrRange};
use std::net::{IpAddr, Ipv6Addr};
use std::str::FromStr;

/// Width of an IPv6 address (128 bits).
pub const IPV6_BITS: u8 = 128;

const NIBBLE_BITS: u8 = 4;

/// Clear and fill the lowest `flexbits` bits of `bits`, returning `(first, last)`.
fn mask_flexbits(bits: u128, flexbits: u8) -> (u128, u128) {
    let mut first = bits;
    let mut last = bits;
    let mut remaining = flexbits;
    let mut shift = 0u32;

    while remaining > 0 {
        let width = remaining.min(NIBBLE_BITS);
        let fill = ((1u128 << width) - 1) << shift;
        first &= !fill;
        last |= fill;
        remaining -= width;
        shift += NIBBLE_BITS as u32;
    }

    (first, last)
}

/// Compute the block containing `ip` under `prefix`.
///
/// Accepts any textual IPv6 form; results are printed in compressed form.
///
/// # Examples
/// ```
/// use cidr_range::range::from_ipv6;
/// let range = from_ipv6("2001:db8:85a3::8a2e:370:7334", 48).unwrap();
/// assert_eq!(range.first.to_string(), "2001:db8:85a3::");
/// assert_eq!(range.last.to_string(), "2001:db8:85a3:ffff:ffff:ffff:ffff:ffff");
/// ```
pub fn from_ipv6(ip: &str, prefix: u8) -> Result<CidrRange, RangeError> {
    check_prefix(AddressFamily::V6, prefix)?;
    let addr = Ipv6Addr::from_str(ip).map_err(|_| invalid_address(AddressFamily::V6, ip))?;

    let (first, last) = mask_flexbits(u128::from(addr), IPV6_BITS - prefix);

    Ok(CidrRange {
        first: IpAddr::V6(Ipv6Addr::from(first)),
        last: IpAddr::V6(Ipv6Addr::from(last)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds(ip: &str, prefix: u8) -> (String, String) {
        let r = from_ipv6(ip, prefix).unwrap();
        (r.first.to_string(), r.last.to_string())
    }

    #[test]
    fn test_mask_flexbits() {
        assert_eq!(mask_flexbits(0xabcd, 0), (0xabcd, 0xabcd));
        assert_eq!(mask_flexbits(0xabcd, 4), (0xabc0, 0xabcf));
        assert_eq!(mask_flexbits(0xabcd, 6), (0xabc0, 0xabff));
        assert_eq!(mask_flexbits(0xabcd, 16), (0x0000, 0xffff));
        assert_eq!(mask_flexbits(u128::MAX, 128), (0, u128::MAX));
    }

    #[test]
    fn test_default_prefix_block() {
        assert_eq!(
            bounds("2001:db8:85a3::8a2e:370:7334", 48),
            (
                "2001:db8:85a3::".to_string(),
                "2001:db8:85a3:ffff:ffff:ffff:ffff:ffff".to_string()
            )
        );
    }

    #[test]
    fn test_expanded_input() {
        assert_eq!(
            bounds("2001:0db8:85a3:0000:0000:8a2e:0370:7334", 64),
            (
                "2001:db8:85a3::".to_string(),
                "2001:db8:85a3:0:ffff:ffff:ffff:ffff".to_string()
            )
        );
    }

    #[test]
    fn test_partial_nibble() {
        assert_eq!(
            bounds("2001:db8:85a3:1234::1", 50),
            (
                "2001:db8:85a3::".to_string(),
                "2001:db8:85a3:3fff:ffff:ffff:ffff:ffff".to_string()
            )
        );
        assert_eq!(bounds("::f", 125), ("::8".to_string(), "::f".to_string()));
        assert_eq!(bounds("::3", 127), ("::2".to_string(), "::3".to_string()));
    }

    #[test]
    fn test_single_address() {
        assert_eq!(
            bounds("2001:db8::1", 128),
            ("2001:db8::1".to_string(), "2001:db8::1".to_string())
        );
    }

    #[test]
    fn test_whole_space() {
        assert_eq!(
            bounds("2001:db8::1", 0),
            (
                "::".to_string(),
                "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff".to_string()
            )
        );
    }

    #[test]
    fn test_invalid_address() {
        assert!(matches!(
            from_ipv6("not-an-ip", 48),
            Err(RangeError::InvalidAddress { .. })
        ));
        assert!(from_ipv6("2001:db8:::1", 48).is_err());
        assert!(from_ipv6("", 48).is_err());
    }

    #[test]
    fn test_prefix_too_long() {
        assert!(matches!(
            from_ipv6("::1", 129),
            Err(RangeError::PrefixTooLong { prefix: 129, max: 128, .. })
        ));
    }

    proptest! {
        #[test]
        fn nibble_walk_matches_plain_mask(addr in any::<u128>(), prefix in 0u8..=128) {
            let host = if prefix == 0 { u128::MAX } else { (1u128 << (128 - prefix as u32)) - 1 };
            prop_assert_eq!(mask_flexbits(addr, 128 - prefix), (addr & !host, addr | host));
        }

        #[test]
        fn block_contains_input(addr in any::<u128>(), prefix in 0u8..=128) {
            let ip = Ipv6Addr::from(addr);
            let r = from_ipv6(&ip.to_string(), prefix).unwrap();
            prop_assert!(r.contains(IpAddr::V6(ip)));
            if prefix > 0 {
                prop_assert_eq!(r.size(), 1u128 << (128 - prefix as u32));
            }
        }
    }
}
