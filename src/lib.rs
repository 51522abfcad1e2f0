//! CIDR block bounds for IPv4 and IPv6 addresses.
//!
//! Given an address and a prefix length, compute the first and last address
//! of the block containing it. Used to bucket per-address signals by network.
//!
//! ```
//! use cidr_range::{from_ip, PrefixOverrides};
//! let range = from_ip("192.168.1.130", &PrefixOverrides::default()).unwrap();
//! assert_eq!(range.to_string(), "192.168.0.0 - 192.168.15.255");
//! ```

pub mod config;
pub mod models;
pub mod output;
pub mod processing;
pub mod range;

use std::borrow::Cow;
use std::error::Error;
use std::io::BufRead;

pub use models::{AddressFamily, CidrRange, PrefixOverrides, Prefixes};
pub use range::{from_ip, from_ip_lossy, from_ip_with, from_ipv4, from_ipv6, RangeError};

/// Read addresses one per line, skipping blank lines and `#` comments.
///
/// Lines that are not valid UTF-8 are kept in lossy form so they surface as
/// unparseable addresses instead of failing the whole batch.
pub fn read_addresses<R: BufRead>(reader: R) -> Result<Vec<String>, Box<dyn Error>> {
    let mut addresses = Vec::new();
    for raw in reader.split(b'\n') {
        let raw = raw?;
        let line = String::from_utf8_lossy(&raw);
        if let Cow::Owned(_) = line {
            log::warn!("input line is not valid UTF-8: {line:?}");
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        addresses.push(line.to_string());
    }
    log::debug!("read {} address(es)", addresses.len());
    Ok(addresses)
}

/// Read addresses from a file, see [`read_addresses`].
pub fn read_address_file(file: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let handle = std::fs::File::open(file).map_err(|e| format!("Error opening {file}: {e}"))?;
    read_addresses(std::io::BufReader::new(handle))
}
