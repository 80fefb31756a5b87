//! Utility functions for configuration parsing
//!
//! The `const fn` parsers run inside `const` items in
//! [`configuration`](crate::configuration), so they cannot use traits or
//! iterators. `FromStr` on the level types reuses the level parser.

use crate::level::LevelFilter;

/// Case-insensitive ASCII comparison usable in `const` context.
const fn eq_ignore_ascii_case(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i].to_ascii_uppercase() != b[i].to_ascii_uppercase() {
            return false;
        }
        i += 1;
    }
    true
}

/// Parse a level name ("debug", "INFO", "Warn", "critical", "off").
///
/// # Returns
/// * `Option<LevelFilter>` - `None` if the name is not recognized
pub const fn parse_level_filter(name: &str) -> Option<LevelFilter> {
    let name = name.trim_ascii().as_bytes();
    if eq_ignore_ascii_case(name, b"DEBUG") {
        Some(LevelFilter::Debug)
    } else if eq_ignore_ascii_case(name, b"INFO") {
        Some(LevelFilter::Info)
    } else if eq_ignore_ascii_case(name, b"WARN") {
        Some(LevelFilter::Warn)
    } else if eq_ignore_ascii_case(name, b"CRITICAL") {
        Some(LevelFilter::Critical)
    } else if eq_ignore_ascii_case(name, b"OFF") {
        Some(LevelFilter::Off)
    } else {
        None
    }
}

/// Parse an unsigned decimal number.
///
/// # Returns
/// * `Option<u32>` - `None` on empty input, non-digit characters or overflow
pub const fn parse_u32(text: &str) -> Option<u32> {
    let digits = text.trim_ascii().as_bytes();
    if digits.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    let mut i = 0;
    while i < digits.len() {
        let d = digits[i];
        if !d.is_ascii_digit() {
            return None;
        }
        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add((d - b'0') as u32) {
                Some(v) => v,
                None => return None,
            },
            None => return None,
        };
        i += 1;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_filter() {
        assert_eq!(parse_level_filter("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level_filter(" Info "), Some(LevelFilter::Info));
        assert_eq!(parse_level_filter("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level_filter("critical"), Some(LevelFilter::Critical));
        assert_eq!(parse_level_filter("OFF"), Some(LevelFilter::Off));
        assert_eq!(parse_level_filter("warning"), None);
        assert_eq!(parse_level_filter(""), None);
    }

    #[test]
    fn test_parse_u32() {
        assert_eq!(parse_u32("150"), Some(150));
        assert_eq!(parse_u32("115200"), Some(115_200));
        assert_eq!(parse_u32("4294967295"), Some(u32::MAX));
        assert_eq!(parse_u32("4294967296"), None);
        assert_eq!(parse_u32("12a"), None);
        assert_eq!(parse_u32("-1"), None);
        assert_eq!(parse_u32(""), None);
    }

    #[test]
    fn test_const_evaluation() {
        const LEVEL: Option<LevelFilter> = parse_level_filter("critical");
        const LEN: Option<u32> = parse_u32("256");
        assert_eq!(LEVEL, Some(LevelFilter::Critical));
        assert_eq!(LEN, Some(256));
    }
}
