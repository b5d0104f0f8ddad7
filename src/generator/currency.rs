//! Rupiah formatting: dot-grouped thousands, no fraction digits.

use crate::config::{RUPIAH_PREFIX, THOUSANDS_SEPARATOR};

/// Format an amount as rupiah, e.g. `Rp 2.002.000`.
///
/// Rounds half away from zero. Negative amounts render as `-Rp 1.000`.
pub fn format_rupiah(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}{}", RUPIAH_PREFIX, value);
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = group_thousands(rounded.abs() as u128);

    format!("{}{}{}", sign, RUPIAH_PREFIX, digits)
}

/// Insert the thousands separator into an integer.
pub fn group_thousands(n: u128) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);

    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(c);
    }

    out
}

/// Format a plain number with at most three decimals, trailing zeros dropped.
pub fn format_decimal(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
