//! Unit costs and markup for a print job.

use crate::config::{
    DEFAULT_FINISHING_COST, DEFAULT_MARGIN_PERCENT, DEFAULT_PRINT_COST, DEFAULT_SHEET_PRICE,
};
use serde::{Deserialize, Serialize};

/// Cost components entered by the user.
///
/// Amounts are currency values (rupiah). A negative margin is accepted and
/// yields a sale price below cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Price of one plano sheet.
    pub price_per_sheet: f64,
    /// Print cost per finished piece.
    pub print_cost_per_unit: f64,
    /// Finishing cost per finished piece.
    pub finishing_cost_per_unit: f64,
    /// Markup applied to total cost, in percent.
    pub margin_percent: f64,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            price_per_sheet: DEFAULT_SHEET_PRICE,
            print_cost_per_unit: DEFAULT_PRINT_COST,
            finishing_cost_per_unit: DEFAULT_FINISHING_COST,
            margin_percent: DEFAULT_MARGIN_PERCENT,
        }
    }
}

impl CostInputs {
    /// Create cost inputs.
    pub fn new(
        price_per_sheet: f64,
        print_cost_per_unit: f64,
        finishing_cost_per_unit: f64,
        margin_percent: f64,
    ) -> Self {
        Self {
            price_per_sheet,
            print_cost_per_unit,
            finishing_cost_per_unit,
            margin_percent,
        }
    }
}
