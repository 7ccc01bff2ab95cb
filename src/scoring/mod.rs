//! Synthetic credit scoring and risk classification

mod score;
mod risk;

pub use score::ScoreEstimator;
pub use risk::{RiskClassifier, RiskTier};

use serde::{Deserialize, Serialize};

/// Outcome of scoring one applicant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Estimated credit score (never above the model's cap)
    pub credit_score: u16,

    pub risk: RiskTier,

    /// Requested amount over (income * income multiple)
    pub loan_ratio: f64,
}
