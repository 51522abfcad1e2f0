//! Output formatting for computed ranges.
//!
//! This module handles formatting and outputting range results:
//! - [`table`] - Aligned text table and group report
//! - [`json`] - JSON object keyed by input address
//! - [`terminal`] - Column helpers

mod json;
mod table;
mod terminal;

pub use json::render_json;
pub use table::{compute_rows, render_groups, render_table, RangeRow};
pub use terminal::format_field;
