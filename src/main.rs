//! Loan Origination CLI
//!
//! Evaluates a single application and prints the assessment, offer and schedule

use anyhow::Context;
use clap::Parser;
use loan_origination::{
    report, Applicant, Assumptions, LoanPurpose, OriginationEngine, SummaryGenerator, TemplateSummary,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "loan-origination", version, about = "Evaluate a loan application")]
struct Args {
    /// Applicant's full name
    #[arg(long)]
    name: String,

    /// Age in years (18-100)
    #[arg(long)]
    age: u8,

    /// Annual income
    #[arg(long)]
    income: f64,

    /// Requested loan amount
    #[arg(long)]
    amount: f64,

    /// Home, Car, Education, Business or Personal
    #[arg(long, default_value = "Personal")]
    purpose: LoanPurpose,

    /// Seed for score noise; omit for a fresh draw each run
    #[arg(long)]
    seed: Option<u64>,

    /// Directory with score_model.csv, risk_thresholds.csv and offer_table.csv
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Write the amortization schedule to this CSV file
    #[arg(long)]
    schedule_csv: Option<PathBuf>,

    /// Write the full result record to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Attach a committee summary to the result
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Loan Origination v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    let assumptions = match &args.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => Assumptions::default_pricing(),
    };
    let engine = OriginationEngine::new(assumptions);

    let applicant = Applicant::new(&args.name, args.age, args.income, args.amount, args.purpose)
        .context("invalid application")?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut result = engine.evaluate(&applicant, &mut rng)?;
    if args.summary {
        result.summary = Some(TemplateSummary.generate(&result)?);
    }

    println!("Applicant: {}", applicant.name);
    println!("  Age: {}", applicant.age);
    println!("  Income: ${:.2}", applicant.income);
    println!("  Amount: ${:.2}", applicant.amount);
    println!("  Purpose: {}", applicant.purpose);
    println!();

    println!("Credit Score:  {}", result.assessment.credit_score);
    println!("Risk Level:    {}", result.assessment.risk);
    println!("Loan Ratio:    {:.4}", result.assessment.loan_ratio);
    println!("Interest Rate: {}%", result.offer.rate);
    println!("Tenure:        {} years", result.offer.tenure_years);
    println!("Approval:      {} ({})", result.decision.status(), result.decision.reason);

    if let Some(summary) = &result.summary {
        println!("\nLoan Committee Summary:");
        println!("{}", summary);
    }

    let schedule = &result.schedule;
    println!("\nAmortization Schedule ({} months, payment ${:.2}):", schedule.months(), schedule.monthly_payment);
    println!("{:>5} {:>12} {:>12} {:>12} {:>14}", "Month", "Payment", "Interest", "Principal", "Balance");
    println!("{}", "-".repeat(59));

    for row in schedule.rows.iter().take(12) {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.month, row.payment, row.interest, row.principal, row.balance
        );
    }
    if schedule.months() > 12 {
        println!("... ({} more months)", schedule.months() - 12);
    }
    println!("\n  Total Paid:     ${:.2}", schedule.total_paid());
    println!("  Total Interest: ${:.2}", schedule.total_interest());

    if let Some(path) = &args.schedule_csv {
        report::write_schedule_csv(path, schedule)?;
        println!("\nSchedule written to: {}", path.display());
    }
    if let Some(path) = &args.json {
        report::write_result_json(path, &result)?;
        println!("Result written to: {}", path.display());
    }

    Ok(())
}
