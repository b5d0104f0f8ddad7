//! Validation module.

mod validate;

pub use validate::{validate_job, ValidationResult};
