//! Cut-yield computation: how many finished pieces fit on one plano sheet.
//!
//! Only two layouts are considered, the cut as given and the cut turned 90
//! degrees, each as a plain grid. Mixed layouts are not searched.

use crate::model::{CutSize, SheetSize};
use serde::{Deserialize, Serialize};

/// Yield of both grid orientations and the chosen one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutYield {
    /// Pieces with the cut laid as given.
    pub straight: u64,
    /// Pieces with the cut turned 90 degrees.
    pub rotated: u64,
    /// max(straight, rotated).
    pub best: u64,
    /// Rotated layout strictly beats the straight one.
    pub is_rotated: bool,
    /// Cut as laid on the sheet in the chosen orientation.
    pub final_cut: CutSize,
}

impl CutYield {
    /// Yield used as the divisor for sheet counts, never zero.
    pub fn effective(&self) -> u64 {
        self.best.max(1)
    }
}

/// Whole pieces of length `piece` that fit along `length`.
///
/// Non-positive, NaN or infinite inputs give 0 instead of faulting. A finite
/// ratio is floored and saturates at `u64::MAX`.
#[inline]
pub fn pieces_along(length: f64, piece: f64) -> u64 {
    if piece.is_nan() || piece <= 0.0 {
        return 0;
    }
    let ratio = length / piece;
    if !ratio.is_finite() || ratio < 1.0 {
        return 0;
    }
    ratio.floor() as u64
}

/// Compute the grid yield of `cut` on `sheet` in both orientations.
///
/// Ties keep the straight orientation.
pub fn compute_yield(sheet: SheetSize, cut: CutSize) -> CutYield {
    let straight =
        pieces_along(sheet.width, cut.width).saturating_mul(pieces_along(sheet.height, cut.height));
    let rotated =
        pieces_along(sheet.width, cut.height).saturating_mul(pieces_along(sheet.height, cut.width));

    let is_rotated = rotated > straight;
    let final_cut = if is_rotated { cut.rotated() } else { cut };

    CutYield {
        straight,
        rotated,
        best: straight.max(rotated),
        is_rotated,
        final_cut,
    }
}
