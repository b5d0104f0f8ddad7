//! A complete set of calculator inputs.

use super::{CostInputs, CutSize, SheetSize};
use crate::config::DEFAULT_ORDER_QUANTITY;
use serde::{Deserialize, Serialize};

/// Everything needed to produce a plan: one order on one sheet size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Number of finished pieces ordered.
    pub quantity: u64,
    /// Stock sheet.
    pub sheet: SheetSize,
    /// Finished piece.
    pub cut: CutSize,
    /// Unit costs and margin.
    pub costs: CostInputs,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            quantity: DEFAULT_ORDER_QUANTITY,
            sheet: SheetSize::default(),
            cut: CutSize::default(),
            costs: CostInputs::default(),
        }
    }
}

impl Job {
    /// Every numeric input, for finiteness checks.
    pub fn numeric_inputs(&self) -> [(&'static str, f64); 8] {
        [
            ("sheet width", self.sheet.width),
            ("sheet height", self.sheet.height),
            ("cut width", self.cut.width),
            ("cut height", self.cut.height),
            ("sheet price", self.costs.price_per_sheet),
            ("print cost", self.costs.print_cost_per_unit),
            ("finishing cost", self.costs.finishing_cost_per_unit),
            ("margin", self.costs.margin_percent),
        ]
    }
}
