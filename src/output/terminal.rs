//! Terminal output utilities.
//!
//! Formatting helpers shared by the stdout CSV tables.

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render a flag as "yes"/"no" for table fields.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("10.0.0.0/25", 15), "  \"10.0.0.0/25\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("10.0.0.0/25", 13), "\"10.0.0.0/25\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("255.255.255.128", 5), "\"255.255.255.128\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(254, 7), "  \"254\"");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
