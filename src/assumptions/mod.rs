//! Origination assumptions: score model, risk thresholds and offer table

pub mod loader;

pub use loader::LoadedAssumptions;

use crate::error::{OriginationError, Result};
use crate::offer::{Offer, OfferTable};
use crate::scoring::{RiskClassifier, RiskTier, ScoreEstimator};
use std::collections::HashMap;
use std::path::Path;

/// Container for all origination assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub score: ScoreEstimator,
    pub risk: RiskClassifier,
    pub offers: OfferTable,
}

impl Assumptions {
    /// Fixed pricing: 300 base score, 700/600 score gates, 7.5/12/18% offers
    pub fn default_pricing() -> Self {
        Self {
            score: ScoreEstimator::default(),
            risk: RiskClassifier::default(),
            offers: OfferTable::default(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        let assumptions = Self::from_loaded(&loaded)?;
        log::info!("loaded assumptions from {}", path.display());
        Ok(assumptions)
    }

    /// Build from raw tables; parameters missing from a table keep their default
    pub fn from_loaded(loaded: &LoadedAssumptions) -> Result<Self> {
        let defaults = Self::default_pricing();

        let params = &loaded.score_model;
        let score = ScoreEstimator {
            base: param(params, "base", defaults.score.base),
            income_divisor: param(params, "income_divisor", defaults.score.income_divisor),
            age_divisor: param(params, "age_divisor", defaults.score.age_divisor),
            noise_amplitude: param(params, "noise_amplitude", defaults.score.noise_amplitude),
            max_score: param(params, "max_score", defaults.score.max_score),
        };

        let params = &loaded.risk_thresholds;
        let risk = RiskClassifier {
            income_multiple: param(params, "income_multiple", defaults.risk.income_multiple),
            low_min_score: param(params, "low_min_score", defaults.risk.low_min_score),
            low_max_ratio: param(params, "low_max_ratio", defaults.risk.low_max_ratio),
            medium_min_score: param(params, "medium_min_score", defaults.risk.medium_min_score),
            medium_max_ratio: param(params, "medium_max_ratio", defaults.risk.medium_max_ratio),
        };

        let entries = loaded
            .offer_rows
            .iter()
            .map(|row| -> Result<(RiskTier, Offer)> {
                let tier: RiskTier = row.risk_tier.parse()?;
                let offer = Offer::new(row.rate, row.tenure_years)?;
                Ok((tier, offer))
            })
            .collect::<Result<Vec<_>>>()?;
        let offers = OfferTable::from_entries(entries)?;

        let assumptions = Self { score, risk, offers };
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Check every table is usable
    pub fn validate(&self) -> Result<()> {
        self.score
            .validate()
            .and_then(|_| self.risk.validate())
            .map_err(|e| OriginationError::Assumptions(e.to_string()))
    }
}

fn param(params: &HashMap<String, f64>, name: &str, default: f64) -> f64 {
    match params.get(name) {
        Some(&value) => value,
        None => {
            log::warn!("assumption '{}' not found, using default {}", name, default);
            default
        }
    }
}
