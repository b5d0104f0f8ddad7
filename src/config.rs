//! Configuration constants and default job values.

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Most tiles the visualizer will lay out; larger yields are truncated.
pub const MAX_DRAWN_TILES: u64 = 10_000;

/// Prefix used when formatting rupiah amounts.
pub const RUPIAH_PREFIX: &str = "Rp ";

/// Thousands separator for the Indonesian locale.
pub const THOUSANDS_SEPARATOR: char = '.';

/// Default order quantity (pieces).
pub const DEFAULT_ORDER_QUANTITY: u64 = 500;

/// Default cut width in cm (A4 short side).
pub const DEFAULT_CUT_WIDTH: f64 = 21.0;

/// Default cut height in cm (A4 long side).
pub const DEFAULT_CUT_HEIGHT: f64 = 29.7;

/// Default price of one plano sheet.
pub const DEFAULT_SHEET_PRICE: f64 = 4500.0;

/// Default print cost per finished piece.
pub const DEFAULT_PRINT_COST: f64 = 2500.0;

/// Default finishing cost per finished piece.
pub const DEFAULT_FINISHING_COST: f64 = 1000.0;

/// Default markup over HPP, in percent.
pub const DEFAULT_MARGIN_PERCENT: f64 = 30.0;

/// Default projection: material spend.
pub const DEFAULT_PROJECTION_MATERIALS: f64 = 800_000.0;

/// Default projection: operational spend.
pub const DEFAULT_PROJECTION_OPERATIONS: f64 = 300_000.0;

/// Default projection: sales revenue.
pub const DEFAULT_PROJECTION_SALES: f64 = 1_500_000.0;

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is zero or negative, within epsilon.
    #[inline]
    pub fn non_positive(a: f64) -> bool {
        a < EPS
    }
}

#[cfg(test)]
mod tests {
    use super::float_cmp::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.00001));
        assert!(!approx_eq(1.0, 1.001));
    }

    #[test]
    fn test_non_positive() {
        assert!(non_positive(0.0));
        assert!(non_positive(-3.0));
        assert!(!non_positive(0.5));
    }
}
