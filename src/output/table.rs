//! Text table output.

use super::terminal::format_field;
use crate::models::{AddressFamily, CidrRange, Prefixes};
use crate::processing::RangeGroups;
use crate::range::{from_ip_with, RangeError};
use colored::Colorize;

/// One computed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRow {
    pub input: String,
    pub family: AddressFamily,
    pub prefix: u8,
    pub result: Result<CidrRange, RangeError>,
}

/// Compute a row per address, keeping input order and failures.
pub fn compute_rows<I, S>(ips: I, prefixes: &Prefixes) -> Vec<RangeRow>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ips.into_iter()
        .map(|ip| {
            let input = ip.as_ref().trim().to_string();
            let family = AddressFamily::detect(&input);
            RangeRow {
                prefix: prefixes.for_family(family),
                result: from_ip_with(&input, prefixes),
                family,
                input,
            }
        })
        .collect()
}

/// Render rows as an aligned table with a header line.
pub fn render_table(rows: &[RangeRow]) -> String {
    let mut out = format!(
        "{}  {}  {}  {}  {}  {}\n",
        format_field("input", 39),
        format_field("family", 6),
        format_field("prefix", 6),
        format_field("first", 39),
        format_field("last", 39),
        format_field("size", 10),
    );
    for row in rows {
        let prefix = format!("/{}", row.prefix);
        let line = match &row.result {
            Ok(range) => format!(
                "{}  {}  {}  {}  {}  {}\n",
                format_field(&row.input, 39),
                format_field(row.family, 6),
                format_field(prefix, 6),
                format_field(range.first, 39),
                format_field(range.last, 39),
                format_field(range.size(), 10),
            ),
            Err(e) => format!(
                "{}  {}  {}  {} ({e})\n",
                format_field(&row.input, 39),
                format_field(row.family, 6),
                format_field(prefix, 6),
                format_field("unavailable", 39).red(),
            ),
        };
        out.push_str(&line);
    }
    out
}

/// Render grouped addresses. `top` limits output to the busiest groups.
pub fn render_groups(groups: &RangeGroups, top: Option<usize>) -> String {
    let mut out = String::new();
    let selected: Vec<_> = match top {
        Some(n) => groups.busiest(n),
        None => groups.groups.iter().collect(),
    };
    for group in selected {
        out.push_str(&format!(
            "{} {} address(es)\n",
            group.range.to_string().bold(),
            group.members.len()
        ));
        for member in &group.members {
            out.push_str(&format!("    {member}\n"));
        }
    }
    if !groups.unresolved.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            "unresolved:".on_red(),
            groups.unresolved.join(", ")
        ));
    }
    out
}
