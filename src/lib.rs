//! plano-calc - Plano cut-yield and production costing.
//!
//! Given a stock sheet, a finished cut size, unit costs, a margin and an order
//! quantity, computes how many pieces fit on a sheet, how many sheets to buy,
//! the cost of goods produced (HPP) and a marked-up sale price.
//!
//! # Example
//!
//! ```
//! use plano_calc::{compute_production_plan, CostInputs, CutSize, SheetSize};
//!
//! let plan = compute_production_plan(
//!     SheetSize::new(65.0, 100.0),
//!     CutSize::new(21.0, 29.7),
//!     CostInputs::new(4500.0, 2500.0, 1000.0, 30.0),
//!     500,
//! );
//! assert_eq!(plan.best_yield, 9);
//! assert_eq!(plan.sheets_needed, 56);
//! ```

pub mod calc;
pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod model;
pub mod parser;
pub mod projection;
pub mod validation;

// Re-exports for convenience
pub use calc::{compute_production_plan, compute_yield, plan_job, CutYield};
pub use error::{CalcError, Result};
pub use generator::{format_rupiah, generate_svg, render_report};
pub use layout::{Tile, TileLayout};
pub use model::{CostInputs, CutSize, Job, ProductionPlan, SheetSize, StandardSheet};
pub use parser::{parse_job_file, parse_job_str};
pub use projection::{ChartBar, FinanceProjection};
pub use validation::{validate_job, ValidationResult};

/// Load a job file and compute its plan.
///
/// Validation warnings are logged; the plan is computed regardless.
pub fn plan_from_file(path: &std::path::Path) -> Result<(Job, ProductionPlan)> {
    let job = parse_job_file(path)?;

    let validation = validate_job(&job);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    Ok((job, plan_job(&job)))
}
