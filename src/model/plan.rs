//! The calculator's output record.

use super::CutSize;
use serde::{Deserialize, Serialize};

/// Production plan derived from one set of inputs.
///
/// Recomputed from scratch on every input change; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// Sheet width used for the plan (cm).
    pub sheet_width: f64,
    /// Sheet height used for the plan (cm).
    pub sheet_height: f64,
    /// Pieces per sheet with the cut laid as given.
    pub yield_straight: u64,
    /// Pieces per sheet with the cut turned 90 degrees.
    pub yield_rotated: u64,
    /// Better of the two orientations.
    pub best_yield: u64,
    /// True only when the rotated layout is strictly better.
    pub is_rotated: bool,
    /// Cut width as laid on the sheet.
    pub final_cut_width: f64,
    /// Cut height as laid on the sheet.
    pub final_cut_height: f64,
    /// Plano sheets to buy.
    pub sheets_needed: u64,
    /// Paper cost.
    pub material_cost: f64,
    /// Printing cost for the whole order.
    pub print_cost: f64,
    /// Finishing cost for the whole order.
    pub finishing_cost: f64,
    /// HPP: material + print + finishing.
    pub total_cost: f64,
    /// HPP per finished piece (0 for an empty order).
    pub unit_cost: f64,
    /// Markup amount over the whole order.
    pub profit: f64,
    /// HPP plus profit.
    pub total_sale_price: f64,
    /// Sale price per finished piece (0 for an empty order).
    pub unit_sale_price: f64,
}

impl ProductionPlan {
    /// The cut as oriented on the sheet.
    pub fn final_cut(&self) -> CutSize {
        CutSize::new(self.final_cut_width, self.final_cut_height)
    }

    /// Unit sale price rounded up to a whole currency unit.
    pub fn recommended_unit_price(&self) -> f64 {
        self.unit_sale_price.ceil()
    }
}
