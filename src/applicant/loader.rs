//! Load applicant batches from CSV

use super::{Applicant, LoanPurpose};
use crate::error::{OriginationError, Result};
use csv::Reader;
use std::fs::File;
use std::path::Path;

/// Raw CSV row matching the applicant batch columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "Income")]
    income: f64,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "Purpose")]
    purpose: String,
}

impl CsvRow {
    fn to_applicant(self) -> Result<Applicant> {
        let purpose: LoanPurpose = self.purpose.parse()?;
        Applicant::new(self.name, self.age, self.income, self.amount, purpose)
    }
}

/// Load all applicants from a CSV file
pub fn load_applicants<P: AsRef<Path>>(path: P) -> Result<Vec<Applicant>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| OriginationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_applicants_from_reader(file)
}

/// Load applicants from any reader (e.g., string buffer, request body)
pub fn load_applicants_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Applicant>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut applicants = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        applicants.push(row.to_applicant()?);
    }

    log::debug!("loaded {} applicants", applicants.len());
    Ok(applicants)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,Age,Income,Amount,Purpose
Asha Rao,30,50000,10000,Car
Wen Li,45,120000,300000,Home
";

    #[test]
    fn test_load_from_reader() {
        let applicants = load_applicants_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(applicants.len(), 2);
        assert_eq!(applicants[0].name, "Asha Rao");
        assert_eq!(applicants[0].purpose, LoanPurpose::Car);
        assert_eq!(applicants[1].age, 45);
        assert_eq!(applicants[1].amount, 300_000.0);
    }

    #[test]
    fn test_invalid_row_is_rejected() {
        let data = "Name,Age,Income,Amount,Purpose\nKid,12,50000,1000,Car\n";
        let err = load_applicants_from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(err.field(), Some("age"));

        let data = "Name,Age,Income,Amount,Purpose\nA,30,50000,1000,Yacht\n";
        let err = load_applicants_from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(err.field(), Some("purpose"));
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let data = "Name,Age,Income,Amount,Purpose\nA,thirty,50000,1000,Car\n";
        let err = load_applicants_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, OriginationError::Csv(_)));
    }

    #[test]
    fn test_load_sample_file() {
        let applicants = load_applicants("data/sample_applicants.csv").expect("Failed to load applicants");
        assert_eq!(applicants.len(), 6);
        assert!(applicants.iter().all(|a| a.validate().is_ok()));
    }

    #[test]
    fn test_missing_file() {
        let err = load_applicants("data/does_not_exist.csv").unwrap_err();
        assert!(matches!(err, OriginationError::Io { .. }));
    }
}
