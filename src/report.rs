//! CSV and JSON exports of evaluation results

use crate::amortization::AmortizationSchedule;
use crate::applicant::Applicant;
use crate::error::{OriginationError, Result};
use crate::pipeline::ApplicationResult;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct ScheduleRecord {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Payment")]
    payment: String,
    #[serde(rename = "Interest")]
    interest: String,
    #[serde(rename = "Principal")]
    principal: String,
    #[serde(rename = "Balance")]
    balance: String,
}

#[derive(Serialize)]
struct BatchRecord<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "CreditScore")]
    credit_score: Option<u16>,
    #[serde(rename = "RiskTier")]
    risk_tier: Option<&'static str>,
    #[serde(rename = "Rate")]
    rate: Option<f64>,
    #[serde(rename = "TenureYears")]
    tenure_years: Option<u32>,
    #[serde(rename = "MonthlyPayment")]
    monthly_payment: Option<String>,
    #[serde(rename = "Approved")]
    approved: Option<bool>,
    #[serde(rename = "Reason")]
    reason: String,
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| OriginationError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the schedule as CSV: `Month,Payment,Interest,Principal,Balance`
pub fn write_schedule<W: Write>(writer: W, schedule: &AmortizationSchedule) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for row in &schedule.rows {
        csv_writer.serialize(ScheduleRecord {
            month: row.month,
            payment: format!("{:.2}", row.payment),
            interest: format!("{:.2}", row.interest),
            principal: format!("{:.2}", row.principal),
            balance: format!("{:.2}", row.balance),
        })?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_schedule_csv<P: AsRef<Path>>(path: P, schedule: &AmortizationSchedule) -> Result<()> {
    let file = create(path.as_ref())?;
    write_schedule(file, schedule)
}

/// Write the full result record as pretty JSON
pub fn write_result_json<P: AsRef<Path>>(path: P, result: &ApplicationResult) -> Result<()> {
    let file = create(path.as_ref())?;
    serde_json::to_writer_pretty(file, result)?;
    Ok(())
}

/// One CSV line per applicant; failed evaluations carry the error text in `Reason`.
///
/// `results` must be index-aligned with `applicants`, as `evaluate_batch` returns them.
pub fn write_batch_csv<W: Write>(
    writer: W,
    applicants: &[Applicant],
    results: &[Result<ApplicationResult>],
) -> Result<()> {
    if applicants.len() != results.len() {
        return Err(OriginationError::invalid(
            "results",
            format!("{} results for {} applicants", results.len(), applicants.len()),
        ));
    }

    let mut csv_writer = csv::Writer::from_writer(writer);

    for (applicant, result) in applicants.iter().zip(results) {
        let name = applicant.name.as_str();
        let record = match result {
            Ok(r) => BatchRecord {
                name,
                credit_score: Some(r.assessment.credit_score),
                risk_tier: Some(r.assessment.risk.as_str()),
                rate: Some(r.offer.rate),
                tenure_years: Some(r.offer.tenure_years),
                monthly_payment: Some(format!("{:.2}", r.schedule.monthly_payment)),
                approved: Some(r.decision.approved),
                reason: r.decision.reason.clone(),
            },
            Err(e) => BatchRecord {
                name,
                credit_score: None,
                risk_tier: None,
                rate: None,
                tenure_years: None,
                monthly_payment: None,
                approved: None,
                reason: e.to_string(),
            },
        };
        csv_writer.serialize(record)?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
