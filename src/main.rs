//! trim-plan - CLI tool to build trim cut lists from a job file.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use trim_planner::{parse_job_file, plan_job_file, validate_request, MaterialsReport};

/// Build window and door trim cut lists and stock-board purchases.
#[derive(Parser, Debug)]
#[command(name = "trim-plan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input job file (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output the full plan as JSON
    #[arg(long)]
    json: bool,

    /// Validate only, don't plan
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Processing: {}", args.input.display());

    // Validate-only mode
    if args.validate {
        let job = parse_job_file(&args.input)
            .with_context(|| format!("Failed to parse {}", args.input.display()))?;
        let validation = validate_request(&job.openings, &job.settings);

        for warning in &validation.warnings {
            warn!("{}", warning);
        }
        for err in &validation.errors {
            error!("{}", err);
        }
        if !validation.passed() {
            anyhow::bail!("Validation failed");
        }

        info!("Validation passed");
        return Ok(());
    }

    let (job, plan) = plan_job_file(&args.input)
        .with_context(|| format!("Failed to plan {}", args.input.display()))?;

    info!(
        "Planned {} piece(s) for {} opening(s)",
        plan.pieces.len(),
        job.openings.len()
    );

    let output = if args.json {
        plan.to_json()?
    } else {
        MaterialsReport::new(&plan, &job.openings, &job.settings).to_string()
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}
