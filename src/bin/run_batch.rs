//! Evaluate every applicant in a CSV file
//!
//! Usage: cargo run --bin run_batch -- --input data/sample_applicants.csv --output decisions.csv

use anyhow::Context;
use clap::Parser;
use loan_origination::applicant::load_applicants;
use loan_origination::{report, Assumptions, BatchSummary, OriginationEngine};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Evaluate a batch of loan applications")]
struct Args {
    /// Applicant CSV with header Name,Age,Income,Amount,Purpose
    #[arg(long)]
    input: PathBuf,

    /// Decision CSV to write
    #[arg(long, default_value = "batch_decisions.csv")]
    output: PathBuf,

    /// Base seed; applicant i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Assumptions directory (defaults to built-in pricing)
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading applicants from {}...", args.input.display());
    let applicants = load_applicants(&args.input)
        .with_context(|| format!("loading applicants from {}", args.input.display()))?;
    println!("Loaded {} applicants in {:?}", applicants.len(), start.elapsed());

    let assumptions = match &args.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)?,
        None => Assumptions::default_pricing(),
    };
    let engine = OriginationEngine::new(assumptions);

    let eval_start = Instant::now();
    let results = engine.evaluate_batch(&applicants, args.seed);
    println!("Evaluations complete in {:?}", eval_start.elapsed());

    for (applicant, result) in applicants.iter().zip(&results) {
        if let Err(e) = result {
            log::warn!("'{}' could not be evaluated: {}", applicant.name, e);
        }
    }

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    report::write_batch_csv(file, &applicants, &results)?;
    println!("Output written to {}", args.output.display());

    let summary = BatchSummary::from_results(&results);
    println!("\nBatch Summary:");
    println!("  Applications: {}", summary.total);
    println!("  Approved:     {}", summary.approved);
    println!("  Declined:     {}", summary.declined);
    println!("  Failed:       {}", summary.failed);
    for (tier, count) in &summary.by_tier {
        println!("  {:<6} risk:  {}", tier.as_str(), count);
    }
    if let Some(avg) = summary.average_score {
        println!("  Avg Score:    {:.1}", avg);
    }
    println!("  Approved Amount: ${:.2}", summary.total_approved_amount);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
