//! Loan Origination - synthetic credit scoring and offer engine
//!
//! This library provides:
//! - Applicant validation and CSV batch loading
//! - Synthetic credit score estimation with injectable randomness
//! - Risk tiering on score and loan-to-income ratio
//! - Tier-keyed offers (rate, tenure) and approval decisions
//! - Level-payment amortization schedules
//! - Committee summaries and CSV/JSON exports

pub mod error;
pub mod applicant;
pub mod assumptions;
pub mod scoring;
pub mod offer;
pub mod amortization;
pub mod pipeline;
pub mod summary;
pub mod report;

// Re-export commonly used types
pub use error::{OriginationError, Result};
pub use applicant::{Applicant, LoanPurpose};
pub use assumptions::Assumptions;
pub use scoring::{Assessment, RiskClassifier, RiskTier, ScoreEstimator};
pub use offer::{Decision, Offer, OfferTable};
pub use amortization::{AmortizationRow, AmortizationSchedule};
pub use pipeline::{ApplicationResult, BatchSummary, OriginationEngine};
pub use summary::{committee_prompt, SummaryGenerator, TemplateSummary};
