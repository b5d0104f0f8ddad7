//! Advisory checks on calculator inputs.
//!
//! Nothing here changes what the calculator computes. Degenerate inputs give
//! warnings; only non-finite numbers fail validation.

use crate::calc::{compute_yield, plan_job};
use crate::config::float_cmp::non_positive;
use crate::model::Job;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Validate a job's inputs.
pub fn validate_job(job: &Job) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (name, value) in job.numeric_inputs() {
        if !value.is_finite() {
            result.add_error(format!("Non-finite {}: {}", name, value));
        }
    }
    if !result.passed {
        return result;
    }

    if non_positive(job.sheet.width) || non_positive(job.sheet.height) {
        result.add_warning(format!("Invalid sheet dimensions ({})", job.sheet));
    }

    if non_positive(job.cut.width) || non_positive(job.cut.height) {
        result.add_warning(format!(
            "Invalid cut dimensions ({}): nothing can be cut",
            job.cut
        ));
    } else if compute_yield(job.sheet, job.cut).best == 0 {
        result.add_warning(format!(
            "Cut {} does not fit on sheet {} in either orientation; \
             every piece will use a whole sheet",
            job.cut, job.sheet
        ));
    }

    if job.quantity == 0 {
        result.add_warning("Order quantity is zero");
    }

    let costs = &job.costs;
    if costs.price_per_sheet < 0.0
        || costs.print_cost_per_unit < 0.0
        || costs.finishing_cost_per_unit < 0.0
    {
        result.add_warning("Negative cost component");
    }

    let plan = plan_job(job);
    if plan.unit_cost < 0.0 {
        result.add_warning(format!(
            "Negative unit cost ({}): costs do not add up to a positive HPP",
            plan.unit_cost
        ));
    }

    if costs.margin_percent < 0.0 {
        result.add_warning(format!(
            "Negative margin ({}%): sale price is below cost",
            costs.margin_percent
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CutSize, SheetSize};

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_add_warning() {
        let mut result = ValidationResult::ok();
        result.add_warning("This is a warning");
        assert!(result.passed); // Warnings don't fail validation
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_add_error() {
        let mut result = ValidationResult::ok();
        result.add_error("This is an error");
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
    }

    // ==================== validate_job tests ====================

    #[test]
    fn test_default_job_is_clean() {
        let result = validate_job(&Job::default());
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_oversized_cut_warns() {
        let job = Job {
            cut: CutSize::new(70.0, 120.0),
            ..Job::default()
        };
        let result = validate_job(&job);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("does not fit")));
    }

    #[test]
    fn test_zero_cut_warns() {
        let job = Job {
            cut: CutSize::new(0.0, 10.0),
            ..Job::default()
        };
        let result = validate_job(&job);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("Invalid cut")));
    }

    #[test]
    fn test_bad_sheet_warns() {
        let job = Job {
            sheet: SheetSize::new(-65.0, 100.0),
            ..Job::default()
        };
        let result = validate_job(&job);
        assert!(result.warnings.iter().any(|w| w.contains("Invalid sheet")));
    }

    #[test]
    fn test_negative_margin_warns() {
        let mut job = Job::default();
        job.costs.margin_percent = -5.0;
        let result = validate_job(&job);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("Negative margin")));
    }

    #[test]
    fn test_negative_unit_cost_warns() {
        let mut job = Job::default();
        job.costs.print_cost_per_unit = -10_000.0;
        let result = validate_job(&job);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("Negative cost component")));
        assert!(result.warnings.iter().any(|w| w.contains("Negative unit cost")));
    }

    #[test]
    fn test_negative_component_with_positive_unit_cost() {
        let mut job = Job::default();
        job.costs.finishing_cost_per_unit = -100.0;
        let result = validate_job(&job);
        assert!(result.warnings.iter().any(|w| w.contains("Negative cost component")));
        assert!(!result.warnings.iter().any(|w| w.contains("Negative unit cost")));
    }

    #[test]
    fn test_zero_quantity_warns() {
        let job = Job {
            quantity: 0,
            ..Job::default()
        };
        let result = validate_job(&job);
        assert!(result.warnings.iter().any(|w| w.contains("zero")));
    }

    #[test]
    fn test_nan_fails() {
        let mut job = Job::default();
        job.costs.print_cost_per_unit = f64::NAN;
        let result = validate_job(&job);
        assert!(!result.passed);
        assert!(result.errors[0].contains("print cost"));
    }
}
