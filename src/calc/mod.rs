//! Yield and costing calculator.

mod costing;
mod cut_yield;

pub use costing::{compute_production_plan, plan_job};
pub use cut_yield::{compute_yield, pieces_along, CutYield};
