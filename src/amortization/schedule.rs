//! Month-by-month amortization table

use super::payment::{monthly_payment, monthly_rate, MAX_TENURE_YEARS};
use crate::error::{OriginationError, Result};
use crate::offer::Offer;
use serde::{Deserialize, Serialize};

const RESIDUAL_TOLERANCE: f64 = 1e-6;

/// A single month of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-indexed month
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    /// Principal retired this month
    pub principal: f64,
    /// Remaining balance after the payment, floored at zero
    pub balance: f64,
}

/// Full schedule for one loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: f64,
    /// Annual rate in percent
    pub annual_rate: f64,
    pub tenure_years: u32,
    pub monthly_payment: f64,
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Build the full table eagerly: `tenure_years * 12` rows
    pub fn build(principal: f64, annual_rate: f64, tenure_years: u32) -> Result<Self> {
        if tenure_years == 0 {
            return Err(OriginationError::invalid("tenure", "must be at least one year"));
        }
        if tenure_years > MAX_TENURE_YEARS {
            return Err(OriginationError::invalid(
                "tenure",
                format!("must not exceed {} years, got {}", MAX_TENURE_YEARS, tenure_years),
            ));
        }
        let months = tenure_years * 12;

        let payment = monthly_payment(principal, annual_rate, months)?;
        let r = monthly_rate(annual_rate);

        let mut rows = Vec::with_capacity(months as usize);
        let mut balance = principal;

        for month in 1..=months {
            let interest = balance * r;
            let principal_paid = payment - interest;
            balance -= principal_paid;

            rows.push(AmortizationRow {
                month,
                payment,
                interest,
                principal: principal_paid,
                balance: balance.max(0.0),
            });
        }

        log::debug!(
            "amortization: principal={:.2} rate={}% months={} payment={:.2} residual={:.6}",
            principal, annual_rate, months, payment, balance
        );

        // Rounding must not leave more than a millionth of the principal outstanding
        if balance.is_nan() || balance.abs() > principal * RESIDUAL_TOLERANCE {
            return Err(OriginationError::invalid(
                "rate",
                format!(
                    "{}% over {} years leaves {:.2} unpaid; the rate is too high to amortize",
                    annual_rate, tenure_years, balance
                ),
            ));
        }

        Ok(Self {
            principal,
            annual_rate,
            tenure_years,
            monthly_payment: payment,
            rows,
        })
    }

    /// Schedule for `principal` under an offer's rate and tenure
    pub fn for_offer(principal: f64, offer: &Offer) -> Result<Self> {
        Self::build(principal, offer.rate, offer.tenure_years)
    }

    pub fn months(&self) -> usize {
        self.rows.len()
    }

    /// Balance after the last payment (0 for a fully retired loan)
    pub fn final_balance(&self) -> f64 {
        self.rows.last().map(|r| r.balance).unwrap_or(self.principal)
    }

    pub fn balances(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.balance).collect()
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_five_year_low_risk_schedule() {
        let schedule = AmortizationSchedule::build(10_000.0, 7.5, 5).unwrap();

        assert_eq!(schedule.months(), 60);
        assert_eq!(schedule.rows[0].month, 1);
        assert_eq!(schedule.rows[59].month, 60);
        assert!(schedule.final_balance() < 0.01);

        let balances = schedule.balances();
        assert!(balances[0] < 10_000.0);
        for pair in balances.windows(2) {
            assert!(pair[1] < pair[0], "balance did not decrease: {} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_first_month_split() {
        let schedule = AmortizationSchedule::build(10_000.0, 12.0, 3).unwrap();
        let first = schedule.rows[0];

        // 1% of 10,000
        assert_abs_diff_eq!(first.interest, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.principal, first.payment - 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.balance, 10_000.0 - first.principal, epsilon = 1e-9);
    }

    #[test]
    fn test_length_matches_tenure() {
        for (rate, years) in [(7.5, 5), (12.0, 3), (18.0, 1), (4.0, 30)] {
            let schedule = AmortizationSchedule::build(25_000.0, rate, years).unwrap();
            assert_eq!(schedule.months(), years as usize * 12);
            assert!(schedule.final_balance() < 0.01, "rate {} years {}", rate, years);
        }
    }

    #[test]
    fn test_balances_non_increasing_and_non_negative() {
        let schedule = AmortizationSchedule::build(80_000.0, 18.0, 1).unwrap();
        for pair in schedule.rows.windows(2) {
            assert!(pair[1].balance <= pair[0].balance);
        }
        assert!(schedule.rows.iter().all(|r| r.balance >= 0.0));
    }

    #[test]
    fn test_totals() {
        let schedule = AmortizationSchedule::build(10_000.0, 12.0, 3).unwrap();
        assert_abs_diff_eq!(schedule.total_paid(), schedule.monthly_payment * 36.0, epsilon = 1e-6);
        // Paid = principal + interest once the balance is gone
        assert_abs_diff_eq!(schedule.total_paid(), 10_000.0 + schedule.total_interest(), epsilon = 0.01);
        let principal_retired: f64 = schedule.rows.iter().map(|r| r.principal).sum();
        assert_abs_diff_eq!(principal_retired, 10_000.0, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let schedule = AmortizationSchedule::build(12_000.0, 0.0, 2).unwrap();
        assert_eq!(schedule.months(), 24);
        assert_abs_diff_eq!(schedule.monthly_payment, 500.0, epsilon = 1e-12);
        assert_abs_diff_eq!(schedule.rows[0].balance, 11_500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(schedule.rows[11].balance, 6_000.0, epsilon = 1e-9);
        assert!(schedule.final_balance() < 0.01);
        assert_abs_diff_eq!(schedule.total_interest(), 0.0);
    }

    #[test]
    fn test_for_offer() {
        let offer = Offer { rate: 18.0, tenure_years: 1 };
        let schedule = AmortizationSchedule::for_offer(5_000.0, &offer).unwrap();
        assert_eq!(schedule.months(), 12);
        assert_eq!(schedule.annual_rate, 18.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let err = AmortizationSchedule::build(10_000.0, 7.5, 0).unwrap_err();
        assert_eq!(err.field(), Some("tenure"));
        let err = AmortizationSchedule::build(-10.0, 7.5, 5).unwrap_err();
        assert_eq!(err.field(), Some("principal"));
        let err = AmortizationSchedule::build(10_000.0, f64::NAN, 5).unwrap_err();
        assert_eq!(err.field(), Some("rate"));
    }

    #[test]
    fn test_unpayable_rate_is_rejected() {
        // Interest alone eats the whole payment every month
        let err = AmortizationSchedule::build(10_000.0, 1000.0, 100).unwrap_err();
        assert_eq!(err.field(), Some("rate"));

        let high = AmortizationSchedule::build(10_000.0, 100.0, 10).unwrap();
        assert!(high.monthly_payment.is_finite());
        assert!(high.final_balance() < 0.01);
        assert!(high.rows.iter().all(|r| r.payment.is_finite() && r.principal.is_finite()));
    }

    #[test]
    fn test_tenure_limit() {
        assert_eq!(AmortizationSchedule::build(10_000.0, 7.5, MAX_TENURE_YEARS).unwrap().months(), 1200);
        let err = AmortizationSchedule::build(10_000.0, 7.5, MAX_TENURE_YEARS + 1).unwrap_err();
        assert_eq!(err.field(), Some("tenure"));
        let err = AmortizationSchedule::build(10_000.0, 7.5, u32::MAX).unwrap_err();
        assert_eq!(err.field(), Some("tenure"));
    }
}
