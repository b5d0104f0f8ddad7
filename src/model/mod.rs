//! Data model for the calculator.

mod costs;
mod job;
mod plan;
mod sheet;

pub use costs::CostInputs;
pub use job::Job;
pub use plan::ProductionPlan;
pub use sheet::{parse_dimensions, CutSize, SheetSize, StandardSheet};
