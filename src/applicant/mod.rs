//! Applicant data structures and batch loading

mod data;
pub mod loader;

pub use data::{Applicant, LoanPurpose, MAX_AGE, MIN_AGE};
pub(crate) use data::validate_age;
pub use loader::{load_applicants, load_applicants_from_reader};
