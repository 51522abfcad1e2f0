//! Inclusive CIDR block bounds.

use super::AddressFamily;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::IpAddr;

/// First and last address of a CIDR block, both inclusive.
///
/// Serialized as a two-element array `["first", "last"]`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrRange {
    /// Lowest address in the block (the network address).
    pub first: IpAddr,
    /// Highest address in the block.
    pub last: IpAddr,
}

impl CidrRange {
    pub fn family(&self) -> AddressFamily {
        match self.first {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// Number of addresses in the block.
    ///
    /// An IPv6 /0 holds 2^128 addresses, which saturates to `u128::MAX`.
    pub fn size(&self) -> u128 {
        let (first, last) = (to_bits(self.first), to_bits(self.last));
        (last - first).saturating_add(1)
    }

    /// Check if an address falls inside the block. Mixed families never match.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.first, ip) {
            (IpAddr::V4(_), IpAddr::V4(_)) | (IpAddr::V6(_), IpAddr::V6(_)) => {
                ip >= self.first && ip <= self.last
            }
            _ => false,
        }
    }
}

fn to_bits(ip: IpAddr) -> u128 {
    match ip {
        IpAddr::V4(v4) => u32::from(v4) as u128,
        IpAddr::V6(v6) => u128::from(v6),
    }
}

impl Serialize for CidrRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        [self.first.to_string(), self.last.to_string()].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CidrRange {
    fn deserialize<D>(deserializer: D) -> Result<CidrRange, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [first, last] = <[String; 2]>::deserialize(deserializer)?;
        let first: IpAddr = first
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid IP address: {first}")))?;
        let last: IpAddr = last
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid IP address: {last}")))?;
        if first.is_ipv4() != last.is_ipv4() {
            return Err(de::Error::custom("range bounds are of different families"));
        }
        if first > last {
            return Err(de::Error::custom(format!("range is reversed: {first} > {last}")));
        }
        Ok(CidrRange { first, last })
    }
}

impl std::fmt::Display for CidrRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} - {}", self.first, self.last)
    }
}
