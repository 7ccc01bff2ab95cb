//! Level-payment amortization schedules

mod payment;
mod schedule;

pub use payment::{monthly_payment, monthly_rate, MAX_TENURE_YEARS};
pub use schedule::{AmortizationRow, AmortizationSchedule};
