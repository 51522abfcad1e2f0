//! Terminal output utilities.

/// Format a value as a right-aligned field of at least `width` characters.
///
/// Values longer than `width` are returned whole, never truncated.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}
