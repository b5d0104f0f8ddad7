//! Material, production and sale-price costing.

use super::cut_yield::compute_yield;
use crate::model::{CostInputs, CutSize, Job, ProductionPlan, SheetSize};
use tracing::debug;

/// Compute the production plan for an order.
///
/// Total over every input: zero quantities and zero yields degrade to
/// zero-valued outputs instead of failing. When nothing fits on the sheet the
/// sheet count still divides by 1, so `quantity` sheets are bought.
pub fn compute_production_plan(
    sheet: SheetSize,
    cut: CutSize,
    costs: CostInputs,
    quantity: u64,
) -> ProductionPlan {
    let cut_yield = compute_yield(sheet, cut);
    let sheets_needed = quantity.div_ceil(cut_yield.effective());

    debug!(
        straight = cut_yield.straight,
        rotated = cut_yield.rotated,
        is_rotated = cut_yield.is_rotated,
        sheets_needed,
        "yield computed"
    );

    let qty = quantity as f64;
    let material_cost = sheets_needed as f64 * costs.price_per_sheet;
    let print_cost = qty * costs.print_cost_per_unit;
    let finishing_cost = qty * costs.finishing_cost_per_unit;
    let total_cost = material_cost + print_cost + finishing_cost;
    let unit_cost = per_unit(total_cost, quantity);

    let profit = total_cost * (costs.margin_percent / 100.0);
    let total_sale_price = total_cost + profit;
    let unit_sale_price = per_unit(total_sale_price, quantity);

    ProductionPlan {
        sheet_width: sheet.width,
        sheet_height: sheet.height,
        yield_straight: cut_yield.straight,
        yield_rotated: cut_yield.rotated,
        best_yield: cut_yield.best,
        is_rotated: cut_yield.is_rotated,
        final_cut_width: cut_yield.final_cut.width,
        final_cut_height: cut_yield.final_cut.height,
        sheets_needed,
        material_cost,
        print_cost,
        finishing_cost,
        total_cost,
        unit_cost,
        profit,
        total_sale_price,
        unit_sale_price,
    }
}

/// Compute the plan for a bundled job.
pub fn plan_job(job: &Job) -> ProductionPlan {
    compute_production_plan(job.sheet, job.cut, job.costs, job.quantity)
}

#[inline]
fn per_unit(amount: f64, quantity: u64) -> f64 {
    if quantity > 0 {
        amount / quantity as f64
    } else {
        0.0
    }
}
