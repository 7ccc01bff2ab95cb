//! CSV-based assumption loader
//!
//! Loads scoring, risk and offer assumptions from CSV files in data/assumptions/

use crate::error::{OriginationError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

pub const SCORE_MODEL_FILE: &str = "score_model.csv";
pub const RISK_THRESHOLDS_FILE: &str = "risk_thresholds.csv";
pub const OFFER_TABLE_FILE: &str = "offer_table.csv";

fn open(path: &Path, file_name: &str) -> Result<csv::Reader<File>> {
    let full = path.join(file_name);
    let file = File::open(&full).map_err(|source| OriginationError::Io { path: full, source })?;
    Ok(csv::Reader::from_reader(file))
}

/// Load a two-column `Parameter,Value` table
pub fn load_parameters(path: &Path, file_name: &str) -> Result<HashMap<String, f64>> {
    let mut reader = open(path, file_name)?;
    let mut params = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let (name, raw) = match (record.get(0), record.get(1)) {
            (Some(name), Some(raw)) => (name.trim().to_string(), raw.trim()),
            _ => {
                return Err(OriginationError::Assumptions(format!(
                    "{}: expected Parameter,Value",
                    file_name
                )))
            }
        };
        let value: f64 = raw.parse().map_err(|_| {
            OriginationError::Assumptions(format!("{}: '{}' is not a number for {}", file_name, raw, name))
        })?;
        params.insert(name, value);
    }

    Ok(params)
}

/// One row of offer_table.csv
#[derive(Debug, Clone, serde::Deserialize)]
pub struct OfferRow {
    #[serde(rename = "RiskTier")]
    pub risk_tier: String,
    #[serde(rename = "Rate")]
    pub rate: f64,
    #[serde(rename = "TenureYears")]
    pub tenure_years: u32,
}

/// Load offer rows from offer_table.csv
pub fn load_offer_rows(path: &Path) -> Result<Vec<OfferRow>> {
    let mut reader = open(path, OFFER_TABLE_FILE)?;
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: OfferRow = result?;
        rows.push(row);
    }

    Ok(rows)
}

/// Raw tables as read from disk
pub struct LoadedAssumptions {
    pub score_model: HashMap<String, f64>,
    pub risk_thresholds: HashMap<String, f64>,
    pub offer_rows: Vec<OfferRow>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self {
            score_model: load_parameters(path, SCORE_MODEL_FILE)?,
            risk_thresholds: load_parameters(path, RISK_THRESHOLDS_FILE)?,
            offer_rows: load_offer_rows(path)?,
        })
    }
}
