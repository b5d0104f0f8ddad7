//! Integration tests for the plano calculator.
//!
//! These drive the public API end to end: job files on disk, the pure
//! calculator, and the rendered outputs.

use plano_calc::{
    compute_production_plan, generate_svg, parse_job_file, plan_from_file, plan_job,
    render_report, validate_job, CalcError, CostInputs, CutSize, Job, ProductionPlan, SheetSize,
    StandardSheet, TileLayout,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const EPS: f64 = 0.001;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn write_job(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write job");
    file
}

const A4_JOB: &str = "\
; A4 flyers on 65x100
[Order]
Quantity=500

[Sheet]
Size=65x100
Price=4500

[Cut]
Width=21
Height=29.7

[Costs]
Print=2500
Finishing=1000
Margin=30
";

// ==================== Job file round trip ====================

#[test]
fn test_job_file_matches_defaults() {
    let file = write_job(A4_JOB);
    let job = parse_job_file(file.path()).expect("parse job");
    assert_eq!(job, Job::default());
}

#[test]
fn test_plan_from_file() {
    let file = write_job(A4_JOB);
    let (job, plan) = plan_from_file(file.path()).expect("plan job");
    assert_eq!(job.quantity, 500);
    assert_eq!(plan.best_yield, 9);
    assert_eq!(plan.sheets_needed, 56);
}

#[test]
fn test_missing_file() {
    let err = parse_job_file(std::path::Path::new("does/not/exist.job")).unwrap_err();
    assert!(matches!(err, CalcError::FileNotFound { .. }));
}

#[test]
fn test_empty_file() {
    let file = write_job("   \n\n");
    let err = parse_job_file(file.path()).unwrap_err();
    assert!(matches!(err, CalcError::EmptyFile { .. }));
}

// ==================== Calculator properties ====================

#[test]
fn test_yields_are_max_of_orientations() {
    for sheet in StandardSheet::ALL {
        for (w, h) in [(21.0, 29.7), (10.0, 15.0), (9.0, 5.5), (33.0, 48.0), (80.0, 5.0)] {
            let plan = compute_production_plan(
                sheet.size(),
                CutSize::new(w, h),
                CostInputs::default(),
                100,
            );
            assert_eq!(plan.best_yield, plan.yield_straight.max(plan.yield_rotated));
            assert_eq!(plan.is_rotated, plan.yield_rotated > plan.yield_straight);
        }
    }
}

#[test]
fn test_tie_reports_original_dimensions() {
    let plan = compute_production_plan(
        SheetSize::new(60.0, 60.0),
        CutSize::new(10.0, 20.0),
        CostInputs::default(),
        100,
    );
    assert_eq!(plan.yield_straight, plan.yield_rotated);
    assert!(plan.best_yield > 0);
    assert!(!plan.is_rotated);
    assert_eq!(plan.final_cut(), CutSize::new(10.0, 20.0));
}

#[test]
fn test_oversized_cut_scenario() {
    let plan = compute_production_plan(
        SheetSize::new(65.0, 100.0),
        CutSize::new(70.0, 120.0),
        CostInputs::default(),
        500,
    );
    assert_eq!(plan.best_yield, 0);
    assert_eq!(plan.sheets_needed, 500);
}

#[test]
fn test_a4_scenario_full_plan() {
    let plan = plan_job(&Job::default());
    let expected = ProductionPlan {
        sheet_width: 65.0,
        sheet_height: 100.0,
        yield_straight: 9,
        yield_rotated: 8,
        best_yield: 9,
        is_rotated: false,
        final_cut_width: 21.0,
        final_cut_height: 29.7,
        sheets_needed: 56,
        material_cost: 252_000.0,
        print_cost: 1_250_000.0,
        finishing_cost: 500_000.0,
        total_cost: 2_002_000.0,
        unit_cost: 4004.0,
        ..plan
    };
    assert_eq!(plan, expected);
    assert!(approx_eq(plan.profit, 600_600.0));
    assert!(approx_eq(plan.unit_sale_price, 5205.2));
}

#[test]
fn test_zero_quantity_scenario() {
    let job = Job {
        quantity: 0,
        ..Job::default()
    };
    let plan = plan_job(&job);
    assert_eq!(plan.sheets_needed, 0);
    assert_eq!(plan.total_cost, 0.0);
    assert_eq!(plan.unit_cost, 0.0);
    assert_eq!(plan.unit_sale_price, 0.0);
}

#[test]
fn test_zero_margin_scenario() {
    let mut job = Job::default();
    job.costs.margin_percent = 0.0;
    let plan = plan_job(&job);
    assert_eq!(plan.unit_sale_price, plan.unit_cost);
}

#[test]
fn test_repeated_calls_identical() {
    let job = Job::default();
    let first = serde_json::to_string(&plan_job(&job)).unwrap();
    for _ in 0..10 {
        assert_eq!(serde_json::to_string(&plan_job(&job)).unwrap(), first);
    }
}

// ==================== Outputs ====================

#[test]
fn test_report_snapshot() {
    let plan = plan_job(&Job::default());
    insta::assert_snapshot!(render_report(&plan, 500), @r###"
    Order                500 pcs
    Plano                65x100 cm
    Cut layout           21x29.7 cm (straight)
    Yield                9 out (straight 9, rotated 8)
    Sheets needed        56 sheets
    Paper cost           Rp 252.000
    Print cost           Rp 1.250.000
    Finishing cost       Rp 500.000
    Total HPP            Rp 2.002.000
    HPP per unit         Rp 4.004
    Sale price per unit  Rp 5.206
    Total profit         Rp 600.600
    "###);
}

#[test]
fn test_json_output_fields() {
    let plan = plan_job(&Job::default());
    let value: serde_json::Value = serde_json::to_value(plan).unwrap();
    assert_eq!(value["best_yield"], 9);
    assert_eq!(value["sheets_needed"], 56);
    assert_eq!(value["is_rotated"], false);
}

#[test]
fn test_svg_matches_layout() {
    let plan = plan_job(&Job::default());
    let layout = TileLayout::from_plan(&plan);
    let svg = generate_svg(&plan);
    assert_eq!(svg.matches("<text").count(), layout.len());
}

#[test]
fn test_validation_of_file_job() {
    let file = write_job("[Cut]\nSize=70x120\n[Costs]\nMargin=-10\n");
    let job = parse_job_file(file.path()).unwrap();
    let result = validate_job(&job);
    assert!(result.passed);
    assert_eq!(result.warnings.len(), 2);
}
