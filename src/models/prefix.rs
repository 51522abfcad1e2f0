//! Prefix length defaults and per-call overrides.

use super::AddressFamily;
use serde::{Deserialize, Serialize};

/// Default prefix length for IPv4 blocks (/20, 4096 addresses).
pub const DEFAULT_IPV4_PREFIX: u8 = 20;
/// Default prefix length for IPv6 blocks (/48, a typical site allocation).
pub const DEFAULT_IPV6_PREFIX: u8 = 48;

/// Fully-resolved prefix length per address family.
///
/// Deserializing a partial object fills the missing family from the defaults,
/// so `{"ipv4": 24}` yields `Prefixes { ipv4: 24, ipv6: 48 }`.
#[derive(Serialize, Deserialize, Eq, PartialEq, Debug, Copy, Clone, Hash)]
#[serde(default)]
pub struct Prefixes {
    pub ipv4: u8,
    pub ipv6: u8,
}

impl Default for Prefixes {
    fn default() -> Self {
        Prefixes {
            ipv4: DEFAULT_IPV4_PREFIX,
            ipv6: DEFAULT_IPV6_PREFIX,
        }
    }
}

impl Prefixes {
    /// Prefix length to use for the given family.
    pub fn for_family(&self, family: AddressFamily) -> u8 {
        match family {
            AddressFamily::V4 => self.ipv4,
            AddressFamily::V6 => self.ipv6,
        }
    }

    /// Return a copy with every key set in `overrides` replacing ours.
    ///
    /// # Examples
    /// ```
    /// use cidr_range::models::{PrefixOverrides, Prefixes};
    /// let merged = Prefixes::default().merge(&PrefixOverrides { ipv4: Some(24), ipv6: None });
    /// assert_eq!(merged, Prefixes { ipv4: 24, ipv6: 48 });
    /// ```
    pub fn merge(&self, overrides: &PrefixOverrides) -> Prefixes {
        Prefixes {
            ipv4: overrides.ipv4.unwrap_or(self.ipv4),
            ipv6: overrides.ipv6.unwrap_or(self.ipv6),
        }
    }
}

/// Caller-supplied partial prefix table. Unset keys fall back to the defaults.
#[derive(Serialize, Deserialize, Eq, PartialEq, Debug, Copy, Clone, Hash, Default)]
pub struct PrefixOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<u8>,
}

impl PrefixOverrides {
    /// Override only the IPv4 prefix.
    pub fn ipv4(prefix: u8) -> Self {
        PrefixOverrides {
            ipv4: Some(prefix),
            ipv6: None,
        }
    }

    /// Override only the IPv6 prefix.
    pub fn ipv6(prefix: u8) -> Self {
        PrefixOverrides {
            ipv4: None,
            ipv6: Some(prefix),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ipv4.is_none() && self.ipv6.is_none()
    }
}
