//! Origination engine: score, classify, price, decide and amortize an application
//!
//! Each stage only consumes the output of earlier stages:
//! estimator -> classifier -> (offer, decision) -> amortization.

use crate::amortization::AmortizationSchedule;
use crate::applicant::Applicant;
use crate::assumptions::Assumptions;
use crate::error::Result;
use crate::offer::{Decision, Offer};
use crate::scoring::{Assessment, RiskTier};
use crate::summary::SummaryGenerator;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything produced for one application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResult {
    pub applicant: Applicant,
    pub assessment: Assessment,
    pub offer: Offer,
    pub decision: Decision,
    /// Requested amount amortized under the offer
    pub schedule: AmortizationSchedule,
    /// Free-text committee summary, filled by a `SummaryGenerator`
    #[serde(default)]
    pub summary: Option<String>,
    pub evaluated_at: DateTime<Utc>,
}

/// Runs applications through the pipeline under one set of assumptions
///
/// # Example
/// ```ignore
/// let engine = OriginationEngine::default();
/// let applicant = Applicant::new("Asha Rao", 30, 50_000.0, 10_000.0, LoanPurpose::Car)?;
/// let result = engine.evaluate(&applicant, &mut StdRng::seed_from_u64(7))?;
/// println!("{} -> {}", result.assessment.risk, result.decision.reason);
/// ```
#[derive(Debug, Clone)]
pub struct OriginationEngine {
    assumptions: Assumptions,
}

impl OriginationEngine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Score and classify the applicant
    pub fn assess<R: Rng + ?Sized>(&self, applicant: &Applicant, rng: &mut R) -> Result<Assessment> {
        applicant.validate()?;

        let credit_score = self.assumptions.score.estimate(applicant.age, applicant.income, rng)?;
        let loan_ratio = self.assumptions.risk.ratio(applicant.amount, applicant.income)?;
        let risk = self.assumptions.risk.tier_for(credit_score, loan_ratio);

        Ok(Assessment {
            credit_score,
            risk,
            loan_ratio,
        })
    }

    /// Run the full pipeline without a summary
    pub fn evaluate<R: Rng + ?Sized>(&self, applicant: &Applicant, rng: &mut R) -> Result<ApplicationResult> {
        let assessment = self.assess(applicant, rng)?;
        let offer = self.assumptions.offers.offer_for(assessment.risk);
        let decision = Decision::for_tier(assessment.risk);
        let schedule = AmortizationSchedule::for_offer(applicant.amount, &offer)?;

        log::info!(
            "evaluated '{}': score={} risk={} rate={}% tenure={}y {}",
            applicant.name,
            assessment.credit_score,
            assessment.risk,
            offer.rate,
            offer.tenure_years,
            decision.status(),
        );

        Ok(ApplicationResult {
            applicant: applicant.clone(),
            assessment,
            offer,
            decision,
            schedule,
            summary: None,
            evaluated_at: Utc::now(),
        })
    }

    /// Run the full pipeline and attach a summary from `generator`
    pub fn evaluate_with_summary<R: Rng + ?Sized>(
        &self,
        applicant: &Applicant,
        rng: &mut R,
        generator: &dyn SummaryGenerator,
    ) -> Result<ApplicationResult> {
        let mut result = self.evaluate(applicant, rng)?;
        result.summary = Some(generator.generate(&result)?);
        Ok(result)
    }

    /// Evaluate many applicants in parallel.
    ///
    /// Applicant `i` draws its score noise from `StdRng::seed_from_u64(seed + i)`,
    /// so output does not depend on thread scheduling. Results keep input order.
    pub fn evaluate_batch(&self, applicants: &[Applicant], seed: u64) -> Vec<Result<ApplicationResult>> {
        applicants
            .par_iter()
            .enumerate()
            .map(|(i, applicant)| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                self.evaluate(applicant, &mut rng)
            })
            .collect()
    }
}

impl Default for OriginationEngine {
    fn default() -> Self {
        Self::new(Assumptions::default_pricing())
    }
}

/// Counts over a batch of evaluations
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub approved: usize,
    pub declined: usize,
    pub failed: usize,
    pub by_tier: BTreeMap<RiskTier, usize>,
    pub average_score: Option<f64>,
    pub total_approved_amount: f64,
}

impl BatchSummary {
    pub fn from_results(results: &[Result<ApplicationResult>]) -> Self {
        let mut summary = BatchSummary {
            total: results.len(),
            ..Default::default()
        };
        let mut score_sum = 0.0;

        for result in results {
            match result {
                Ok(r) => {
                    if r.decision.approved {
                        summary.approved += 1;
                        summary.total_approved_amount += r.applicant.amount;
                    } else {
                        summary.declined += 1;
                    }
                    *summary.by_tier.entry(r.assessment.risk).or_insert(0) += 1;
                    score_sum += r.assessment.credit_score as f64;
                }
                Err(_) => summary.failed += 1,
            }
        }

        let scored = summary.approved + summary.declined;
        if scored > 0 {
            summary.average_score = Some(score_sum / scored as f64);
        }
        summary
    }
}
