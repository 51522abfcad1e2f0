//! Processing of address batches.
//!
//! - [`group`] - Bucketing many addresses by their containing block

mod group;

// Re-export public functions
pub use group::{group_by_range, log_groups, RangeGroup, RangeGroups};
