//! Applicant records as submitted on the origination form

use crate::error::{ensure_positive, OriginationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Youngest applicant accepted
pub const MIN_AGE: u8 = 18;

/// Oldest applicant accepted
pub const MAX_AGE: u8 = 100;

/// Stated purpose of the loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanPurpose {
    Home,
    Car,
    Education,
    Business,
    Personal,
}

impl LoanPurpose {
    pub const ALL: [LoanPurpose; 5] = [
        LoanPurpose::Home,
        LoanPurpose::Car,
        LoanPurpose::Education,
        LoanPurpose::Business,
        LoanPurpose::Personal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanPurpose::Home => "Home",
            LoanPurpose::Car => "Car",
            LoanPurpose::Education => "Education",
            LoanPurpose::Business => "Business",
            LoanPurpose::Personal => "Personal",
        }
    }
}

impl fmt::Display for LoanPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanPurpose {
    type Err = OriginationError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        LoanPurpose::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                OriginationError::invalid("purpose", format!("unknown loan purpose '{}'", trimmed))
            })
    }
}

/// A single loan application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    /// Applicant's full name
    pub name: String,

    /// Age in whole years (18-100)
    pub age: u8,

    /// Annual income
    pub income: f64,

    /// Requested loan amount
    pub amount: f64,

    pub purpose: LoanPurpose,
}

impl Applicant {
    /// Build a validated applicant
    pub fn new(
        name: impl Into<String>,
        age: u8,
        income: f64,
        amount: f64,
        purpose: LoanPurpose,
    ) -> Result<Self> {
        let applicant = Self {
            name: name.into(),
            age,
            income,
            amount,
            purpose,
        };
        applicant.validate()?;
        Ok(applicant)
    }

    /// Check every field against its domain.
    /// Records built through serde skip `new`, so loaders call this explicitly.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(OriginationError::invalid("name", "must not be blank"));
        }
        validate_age(self.age)?;
        ensure_positive("income", self.income)?;
        ensure_positive("amount", self.amount)?;
        Ok(())
    }

    /// Requested amount as a multiple of annual income
    pub fn loan_to_income(&self) -> f64 {
        self.amount / self.income
    }
}

pub(crate) fn validate_age(age: u8) -> Result<u8> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(OriginationError::invalid(
            "age",
            format!("must be between {} and {}, got {}", MIN_AGE, MAX_AGE, age),
        ));
    }
    Ok(age)
}
