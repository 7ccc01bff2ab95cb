//! Risk classifier: ordered thresholds on score and loan-to-income ratio

use crate::error::{ensure_positive, OriginationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categorical default-risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = OriginationError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        RiskTier::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| OriginationError::invalid("risk_tier", format!("unknown risk tier '{}'", trimmed)))
    }
}

/// Threshold table for risk tiering
///
/// ratio = amount / (income * income_multiple)
///
/// | condition                                        | tier   |
/// |--------------------------------------------------|--------|
/// | score > low_min_score AND ratio < low_max_ratio  | Low    |
/// | score > medium_min_score AND ratio < medium_max_ratio | Medium |
/// | otherwise                                        | High   |
///
/// Rows are evaluated in order and the first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskClassifier {
    pub income_multiple: f64,
    pub low_min_score: f64,
    pub low_max_ratio: f64,
    pub medium_min_score: f64,
    pub medium_max_ratio: f64,
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self {
            income_multiple: 5.0,
            low_min_score: 700.0,
            low_max_ratio: 0.5,
            medium_min_score: 600.0,
            medium_max_ratio: 1.0,
        }
    }
}

impl RiskClassifier {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("income_multiple", self.income_multiple)?;
        ensure_positive("low_max_ratio", self.low_max_ratio)?;
        ensure_positive("medium_max_ratio", self.medium_max_ratio)?;
        if !self.low_min_score.is_finite() || !self.medium_min_score.is_finite() {
            return Err(OriginationError::invalid("min_score", "score thresholds must be finite"));
        }
        Ok(())
    }

    /// Requested amount relative to the borrowing capacity implied by income
    pub fn ratio(&self, amount: f64, income: f64) -> Result<f64> {
        ensure_positive("amount", amount)?;
        ensure_positive("income", income)?;
        Ok(amount / (income * self.income_multiple))
    }

    /// Classify a scored application
    pub fn classify(&self, score: u16, amount: f64, income: f64) -> Result<RiskTier> {
        let ratio = self.ratio(amount, income)?;
        Ok(self.tier_for(score, ratio))
    }

    /// Table lookup on an already computed ratio
    pub fn tier_for(&self, score: u16, ratio: f64) -> RiskTier {
        let score = score as f64;
        if score > self.low_min_score && ratio < self.low_max_ratio {
            RiskTier::Low
        } else if score > self.medium_min_score && ratio < self.medium_max_ratio {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }
}
