//! Grouping addresses by network block.
//!
//! Used to aggregate per-address signals (declines, sign-ups, requests) into
//! per-block counts. Unparseable addresses are set aside, never fatal.

use crate::models::{CidrRange, Prefixes};
use crate::range::from_ip_with;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

/// Addresses sharing one block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RangeGroup {
    pub range: CidrRange,
    /// Distinct input addresses, in first-seen order.
    pub members: Vec<String>,
}

/// Result of [`group_by_range`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeGroups {
    /// Groups ordered by range (IPv4 blocks before IPv6).
    pub groups: Vec<RangeGroup>,
    /// Distinct inputs no range could be computed for.
    pub unresolved: Vec<String>,
}

impl RangeGroups {
    /// The `n` groups with the most members. Ties keep range order.
    pub fn busiest(&self, n: usize) -> Vec<&RangeGroup> {
        self.groups
            .iter()
            .sorted_by(|a, b| {
                b.members
                    .len()
                    .cmp(&a.members.len())
                    .then_with(|| a.range.cmp(&b.range))
            })
            .take(n)
            .collect()
    }

    /// Find the group holding `ip`, if it was part of the input.
    pub fn group_of(&self, ip: &str) -> Option<&RangeGroup> {
        self.groups
            .iter()
            .find(|g| g.members.iter().any(|m| m == ip))
    }
}

/// Bucket `ips` by the block each falls in under `prefixes`.
///
/// Inputs are trimmed and duplicates are dropped before grouping.
pub fn group_by_range<I, S>(ips: I, prefixes: &Prefixes) -> RangeGroups
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut by_range: BTreeMap<CidrRange, Vec<String>> = BTreeMap::new();
    let mut unresolved = Vec::new();

    for ip in ips
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .unique()
    {
        match from_ip_with(&ip, prefixes) {
            Ok(range) => by_range.entry(range).or_default().push(ip),
            Err(e) => {
                log::debug!("skipping {ip}: {e}");
                unresolved.push(ip);
            }
        }
    }

    let groups = by_range
        .into_iter()
        .map(|(range, members)| RangeGroup { range, members })
        .collect();

    RangeGroups { groups, unresolved }
}

/// Log a summary of grouped addresses.
pub fn log_groups(groups: &RangeGroups) {
    log::info!(
        "Grouped addresses into {} block(s), {} unresolved",
        groups.groups.len(),
        groups.unresolved.len()
    );
    for group in groups.groups.iter().filter(|g| g.members.len() > 1) {
        log::info!("  {} holds {} addresses", group.range, group.members.len());
    }
    if !groups.unresolved.is_empty() {
        log::warn!("Unresolved addresses: {}", groups.unresolved.join(", "));
    }
}
