//! plano-calc - CLI for plano cut-yield and production costing.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use plano_calc::generator::group_thousands;
use plano_calc::{
    format_rupiah, generate_svg, parse_job_file, plan_job, render_report, validate_job, CutSize,
    FinanceProjection, Job, SheetSize, StandardSheet,
};

/// Plano cut-yield, HPP and sale-price calculator for print production.
#[derive(Parser, Debug)]
#[command(name = "plano-calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute yield, sheets needed, HPP and sale price for an order
    Plan(PlanArgs),
    /// Project capital and profit from spend and revenue
    Project(ProjectArgs),
    /// List the standard plano sheet sizes
    Sheets,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Job file to start from (flags override its values)
    #[arg(short, long)]
    job: Option<PathBuf>,

    /// Plano sheet size in cm, e.g. 65x100
    #[arg(long, allow_hyphen_values = true)]
    sheet: Option<SheetSize>,

    /// Finished cut size in cm, e.g. 21x29.7
    #[arg(long, allow_hyphen_values = true)]
    cut: Option<CutSize>,

    /// Number of finished pieces ordered
    #[arg(short, long)]
    quantity: Option<u64>,

    /// Price of one plano sheet
    #[arg(long, allow_hyphen_values = true)]
    sheet_price: Option<f64>,

    /// Print cost per piece
    #[arg(long, allow_hyphen_values = true)]
    print_cost: Option<f64>,

    /// Finishing cost per piece
    #[arg(long, allow_hyphen_values = true)]
    finishing_cost: Option<f64>,

    /// Markup over HPP in percent
    #[arg(long, allow_hyphen_values = true)]
    margin: Option<f64>,

    /// Output the plan as JSON
    #[arg(long)]
    json: bool,

    /// Write an SVG drawing of the cut layout
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ProjectArgs {
    /// Material spend
    #[arg(long)]
    materials: Option<f64>,

    /// Operational spend
    #[arg(long)]
    operations: Option<f64>,

    /// Sales revenue
    #[arg(long)]
    sales: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::Project(args) => run_project(args),
        Command::Sheets => {
            for sheet in StandardSheet::ALL {
                println!("{}", sheet);
            }
            Ok(())
        }
    }
}

fn build_job(args: &PlanArgs) -> Result<Job> {
    let mut job = match &args.job {
        Some(path) => {
            info!("Loading job: {}", path.display());
            parse_job_file(path).with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => Job::default(),
    };

    if let Some(sheet) = args.sheet {
        job.sheet = sheet;
    }
    if let Some(cut) = args.cut {
        job.cut = cut;
    }
    if let Some(quantity) = args.quantity {
        job.quantity = quantity;
    }
    if let Some(price) = args.sheet_price {
        job.costs.price_per_sheet = price;
    }
    if let Some(cost) = args.print_cost {
        job.costs.print_cost_per_unit = cost;
    }
    if let Some(cost) = args.finishing_cost {
        job.costs.finishing_cost_per_unit = cost;
    }
    if let Some(margin) = args.margin {
        job.costs.margin_percent = margin;
    }

    Ok(job)
}

fn run_plan(args: PlanArgs) -> Result<()> {
    let job = build_job(&args)?;
    debug!(?job, "Inputs");

    if StandardSheet::from_size(job.sheet).is_none() {
        info!("Sheet {} is not a standard plano size", job.sheet);
    }

    let validation = validate_job(&job);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    let plan = plan_job(&job);

    if let Some(path) = &args.svg {
        std::fs::write(path, generate_svg(&plan))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated: {}", path.display());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&plan)?;
        println!("{}", json);
    } else {
        print!("{}", render_report(&plan, job.quantity));
    }

    Ok(())
}

fn run_project(args: ProjectArgs) -> Result<()> {
    let defaults = FinanceProjection::default();
    let projection = FinanceProjection::new(
        args.materials.unwrap_or(defaults.materials),
        args.operations.unwrap_or(defaults.operations),
        args.sales.unwrap_or(defaults.sales),
    );

    if projection.profit() < 0.0 {
        warn!("Projection runs at a loss");
    }

    println!("Capital  {}", format_rupiah(projection.capital()));
    println!(
        "Profit   {} ({:.1}%)",
        format_rupiah(projection.profit()),
        projection.margin_percent()
    );
    println!();
    for bar in projection.chart_bars() {
        let thousands = (bar.value / 1000.0).round().max(0.0) as u128;
        println!("{:<12} {}k", bar.label, group_thousands(thousands));
    }

    Ok(())
}
