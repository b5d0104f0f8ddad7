//! Line-level helpers for the job file format.

use crate::error::{CalcError, Result};

/// Parse a key=value pair from a line.
pub fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();
    Some((key, value))
}

/// Parse a `[Section]` header line, returning the section name.
pub fn parse_section_header(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.starts_with('[') && trimmed.ends_with(']') && trimmed.len() >= 2 {
        Some(trimmed[1..trimmed.len() - 1].trim())
    } else {
        None
    }
}

/// Drop a trailing `; comment` from a line.
pub fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse a float value, reporting the line on failure.
pub fn parse_float(value: &str, line: usize) -> Result<f64> {
    value.parse().map_err(|_| CalcError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

/// Parse a non-negative whole count, reporting the line on failure.
pub fn parse_count(value: &str, line: usize) -> Result<u64> {
    value.parse().map_err(|_| CalcError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}
