//! Approval decision per risk tier

use crate::scoring::RiskTier;
use serde::{Deserialize, Serialize};

pub const APPROVED_REASON: &str = "Approved";
pub const DECLINED_REASON: &str = "Declined due to high risk";

/// Approval outcome and the reason shown to the applicant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub approved: bool,
    pub reason: String,
}

impl Decision {
    /// Low and Medium are approved, High is declined
    pub fn for_tier(tier: RiskTier) -> Self {
        let approved = matches!(tier, RiskTier::Low | RiskTier::Medium);
        let reason = if approved { APPROVED_REASON } else { DECLINED_REASON };
        Self {
            approved,
            reason: reason.to_string(),
        }
    }

    pub fn status(&self) -> &'static str {
        if self.approved {
            "Approved"
        } else {
            "Declined"
        }
    }
}
