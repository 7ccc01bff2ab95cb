//! Offer generation and approval decisions keyed by risk tier

mod decision;

pub use decision::{Decision, APPROVED_REASON, DECLINED_REASON};

use crate::amortization::MAX_TENURE_YEARS;
use crate::error::{ensure_non_negative, OriginationError, Result};
use crate::scoring::RiskTier;
use serde::{Deserialize, Serialize};

/// Interest rate and tenure offered to an applicant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Annual interest rate in percent (7.5 = 7.5%)
    pub rate: f64,

    pub tenure_years: u32,
}

impl Offer {
    pub fn new(rate: f64, tenure_years: u32) -> Result<Self> {
        ensure_non_negative("rate", rate)?;
        if tenure_years == 0 {
            return Err(OriginationError::invalid("tenure_years", "must be at least one year"));
        }
        if tenure_years > MAX_TENURE_YEARS {
            return Err(OriginationError::invalid(
                "tenure_years",
                format!("must not exceed {} years, got {}", MAX_TENURE_YEARS, tenure_years),
            ));
        }
        Ok(Self { rate, tenure_years })
    }

    /// Annual rate as a decimal (0.075 for 7.5%)
    pub fn rate_decimal(&self) -> f64 {
        self.rate / 100.0
    }

    pub fn tenure_months(&self) -> u32 {
        self.tenure_years * 12
    }
}

/// Risk tier to offer lookup
///
/// One entry per tier, so lookups never fall through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferTable {
    pub low: Offer,
    pub medium: Offer,
    pub high: Offer,
}

impl Default for OfferTable {
    fn default() -> Self {
        Self {
            low: Offer { rate: 7.5, tenure_years: 5 },
            medium: Offer { rate: 12.0, tenure_years: 3 },
            high: Offer { rate: 18.0, tenure_years: 1 },
        }
    }
}

impl OfferTable {
    /// Build from (tier, offer) pairs; every tier must appear exactly once
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (RiskTier, Offer)>,
    {
        let mut low = None;
        let mut medium = None;
        let mut high = None;

        for (tier, offer) in entries {
            let slot = match tier {
                RiskTier::Low => &mut low,
                RiskTier::Medium => &mut medium,
                RiskTier::High => &mut high,
            };
            if slot.replace(offer).is_some() {
                return Err(OriginationError::Assumptions(format!("duplicate offer for {} risk", tier)));
            }
        }

        let missing = |tier: RiskTier| OriginationError::Assumptions(format!("no offer for {} risk", tier));
        Ok(Self {
            low: low.ok_or_else(|| missing(RiskTier::Low))?,
            medium: medium.ok_or_else(|| missing(RiskTier::Medium))?,
            high: high.ok_or_else(|| missing(RiskTier::High))?,
        })
    }

    pub fn offer_for(&self, tier: RiskTier) -> Offer {
        match tier {
            RiskTier::Low => self.low,
            RiskTier::Medium => self.medium,
            RiskTier::High => self.high,
        }
    }
}
