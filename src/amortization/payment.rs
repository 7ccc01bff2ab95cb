//! Annuity payment formula

use crate::error::{ensure_non_negative, ensure_positive, OriginationError, Result};

/// Convert an annual percentage rate to a monthly decimal rate
/// 7.5 -> 0.075 / 12
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Longest loan term any offer or schedule may carry
pub const MAX_TENURE_YEARS: u32 = 100;

/// Fixed monthly payment that retires `principal` over `months` payments.
///
/// payment = P * r / (1 - (1+r)^-n)
///
/// With a zero rate the formula divides by zero, so the principal is split
/// evenly across the term instead.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, months: u32) -> Result<f64> {
    ensure_positive("principal", principal)?;
    ensure_non_negative("rate", annual_rate_pct)?;
    if months == 0 {
        return Err(OriginationError::invalid("tenure", "must cover at least one month"));
    }
    if months > MAX_TENURE_YEARS * 12 {
        return Err(OriginationError::invalid(
            "tenure",
            format!("{} months exceeds the {}-year limit", months, MAX_TENURE_YEARS),
        ));
    }

    let r = monthly_rate(annual_rate_pct);
    if r == 0.0 {
        return Ok(principal / months as f64);
    }

    // months <= 1200, so the cast cannot wrap
    let discount = (1.0 + r).powi(-(months as i32));
    let payment = principal * r / (1.0 - discount);
    if !payment.is_finite() {
        return Err(OriginationError::invalid(
            "rate",
            format!("{}% produces no finite payment over {} months", annual_rate_pct, months),
        ));
    }
    Ok(payment)
}
