//! Address family detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address family of a textual IP address.
#[derive(Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum AddressFamily {
    #[serde(rename = "ipv4")]
    V4,
    #[serde(rename = "ipv6")]
    V6,
}

impl AddressFamily {
    /// Classify an address string.
    ///
    /// Anything containing a `.` is IPv4, everything else IPv6. This is a
    /// routing decision only; the string is not validated here.
    ///
    /// # Examples
    /// ```
    /// use cidr_range::models::AddressFamily;
    /// assert_eq!(AddressFamily::detect("10.0.0.1"), AddressFamily::V4);
    /// assert_eq!(AddressFamily::detect("2001:db8::1"), AddressFamily::V6);
    /// assert_eq!(AddressFamily::detect("not.an.ip"), AddressFamily::V4);
    /// ```
    pub fn detect(ip: &str) -> AddressFamily {
        if ip.contains('.') {
            AddressFamily::V4
        } else {
            AddressFamily::V6
        }
    }

    /// Width of an address of this family in bits.
    pub fn bits(self) -> u8 {
        match self {
            AddressFamily::V4 => 32,
            AddressFamily::V6 => 128,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "ipv4"),
            AddressFamily::V6 => write!(f, "ipv6"),
        }
    }
}
