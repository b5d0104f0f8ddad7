//! Sheet and cut dimensions.
//!
//! All dimensions are in centimeters. Nothing here rejects degenerate sizes:
//! a cut larger than the sheet is a valid input that simply yields nothing.

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A stock "plano" sheet bought before cutting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSize {
    /// Sheet width (cm).
    pub width: f64,
    /// Sheet height (cm).
    pub height: f64,
}

impl SheetSize {
    /// Create a new sheet size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for SheetSize {
    fn default() -> Self {
        StandardSheet::default().size()
    }
}

impl FromStr for SheetSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let (width, height) = parse_dimensions(s)?;
        Ok(Self::new(width, height))
    }
}

impl fmt::Display for SheetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The finished, trimmed piece size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutSize {
    /// Cut width (cm).
    pub width: f64,
    /// Cut height (cm).
    pub height: f64,
}

impl CutSize {
    /// Create a new cut size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same piece turned 90 degrees.
    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl Default for CutSize {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_CUT_WIDTH,
            crate::config::DEFAULT_CUT_HEIGHT,
        )
    }
}

impl FromStr for CutSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let (width, height) = parse_dimensions(s)?;
        Ok(Self::new(width, height))
    }
}

impl fmt::Display for CutSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Plano sizes stocked by the typical print shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StandardSheet {
    /// 61 x 92 cm.
    Plano61x92,
    /// 65 x 100 cm.
    #[default]
    Plano65x100,
    /// 79 x 109 cm.
    Plano79x109,
}

impl StandardSheet {
    /// All standard sizes, smallest first.
    pub const ALL: [StandardSheet; 3] = [
        StandardSheet::Plano61x92,
        StandardSheet::Plano65x100,
        StandardSheet::Plano79x109,
    ];

    /// Dimensions of this sheet.
    pub fn size(&self) -> SheetSize {
        match self {
            StandardSheet::Plano61x92 => SheetSize::new(61.0, 92.0),
            StandardSheet::Plano65x100 => SheetSize::new(65.0, 100.0),
            StandardSheet::Plano79x109 => SheetSize::new(79.0, 109.0),
        }
    }

    /// Find the standard sheet matching the given dimensions exactly.
    pub fn from_size(size: SheetSize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.size() == size)
    }
}

impl fmt::Display for StandardSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        write!(f, "{} x {} cm", size.width, size.height)
    }
}

/// Parse a `WIDTHxHEIGHT` string.
///
/// Accepts `x`, `X`, `×` or `,` as separator and surrounding whitespace.
pub fn parse_dimensions(s: &str) -> Result<(f64, f64)> {
    let invalid = || CalcError::InvalidSize {
        value: s.to_string(),
    };

    let trimmed = s.trim();
    let sep = trimmed
        .find(|c: char| matches!(c, 'x' | 'X' | '×' | ','))
        .ok_or_else(invalid)?;
    let sep_len = trimmed[sep..].chars().next().map_or(1, char::len_utf8);

    let width: f64 = trimmed[..sep].trim().parse().map_err(|_| invalid())?;
    let height: f64 = trimmed[sep + sep_len..]
        .trim()
        .parse()
        .map_err(|_| invalid())?;

    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parse_dimensions tests ====================

    #[test]
    fn test_parse_dimensions_x() {
        assert_eq!(parse_dimensions("65x100").unwrap(), (65.0, 100.0));
    }

    #[test]
    fn test_parse_dimensions_comma() {
        assert_eq!(parse_dimensions("61,92").unwrap(), (61.0, 92.0));
    }

    #[test]
    fn test_parse_dimensions_multiplication_sign() {
        assert_eq!(parse_dimensions("21 × 29.7").unwrap(), (21.0, 29.7));
    }

    #[test]
    fn test_parse_dimensions_spaces_and_upper_x() {
        assert_eq!(parse_dimensions("  79 X 109 ").unwrap(), (79.0, 109.0));
    }

    #[test]
    fn test_parse_dimensions_missing_separator() {
        let err = parse_dimensions("65100").unwrap_err();
        assert!(matches!(err, CalcError::InvalidSize { .. }));
    }

    #[test]
    fn test_parse_dimensions_bad_number() {
        assert!(parse_dimensions("abcx10").is_err());
        assert!(parse_dimensions("10x").is_err());
    }

    // ==================== SheetSize / CutSize tests ====================

    #[test]
    fn test_sheet_from_str_and_display() {
        let sheet: SheetSize = "65x100".parse().unwrap();
        assert_eq!(sheet, SheetSize::new(65.0, 100.0));
        assert_eq!(sheet.to_string(), "65x100");
    }

    #[test]
    fn test_cut_display_keeps_fraction() {
        let cut = CutSize::new(21.0, 29.7);
        assert_eq!(cut.to_string(), "21x29.7");
    }

    #[test]
    fn test_cut_rotated() {
        let cut = CutSize::new(21.0, 29.7).rotated();
        assert_eq!(cut, CutSize::new(29.7, 21.0));
    }

    #[test]
    fn test_default_sheet_is_65x100() {
        assert_eq!(SheetSize::default(), SheetSize::new(65.0, 100.0));
    }

    // ==================== StandardSheet tests ====================

    #[test]
    fn test_standard_sheet_lookup() {
        assert_eq!(
            StandardSheet::from_size(SheetSize::new(79.0, 109.0)),
            Some(StandardSheet::Plano79x109)
        );
        assert_eq!(StandardSheet::from_size(SheetSize::new(70.0, 100.0)), None);
    }

    #[test]
    fn test_standard_sheet_display() {
        assert_eq!(StandardSheet::Plano61x92.to_string(), "61 x 92 cm");
    }
}
