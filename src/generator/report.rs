//! Plain-text calculation report.

use super::currency::{format_decimal, format_rupiah};
use crate::model::ProductionPlan;

/// Render the calculation result card as text.
pub fn render_report(plan: &ProductionPlan, quantity: u64) -> String {
    let orientation = if plan.is_rotated {
        "rotated 90°"
    } else {
        "straight"
    };

    let rows: Vec<(&str, String)> = vec![
        ("Order", format!("{} pcs", quantity)),
        (
            "Plano",
            format!(
                "{}x{} cm",
                format_decimal(plan.sheet_width),
                format_decimal(plan.sheet_height)
            ),
        ),
        (
            "Cut layout",
            format!(
                "{}x{} cm ({})",
                format_decimal(plan.final_cut_width),
                format_decimal(plan.final_cut_height),
                orientation
            ),
        ),
        (
            "Yield",
            format!(
                "{} out (straight {}, rotated {})",
                plan.best_yield, plan.yield_straight, plan.yield_rotated
            ),
        ),
        ("Sheets needed", format!("{} sheets", plan.sheets_needed)),
        ("Paper cost", format_rupiah(plan.material_cost)),
        ("Print cost", format_rupiah(plan.print_cost)),
        ("Finishing cost", format_rupiah(plan.finishing_cost)),
        ("Total HPP", format_rupiah(plan.total_cost)),
        ("HPP per unit", format_rupiah(plan.unit_cost)),
        (
            "Sale price per unit",
            format_rupiah(plan.recommended_unit_price()),
        ),
        ("Total profit", format_rupiah(plan.profit)),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:<width$}  {}\n", label, value, width = width));
    }
    out
}
