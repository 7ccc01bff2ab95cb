//! Committee summaries for evaluated applications
//!
//! The summary is produced downstream of the pipeline. A language model can be
//! plugged in behind `SummaryGenerator`; `committee_prompt` builds the text it
//! would receive. `TemplateSummary` is the built-in deterministic generator.

use crate::error::Result;
use crate::pipeline::ApplicationResult;

/// Produces the free-text summary attached to an `ApplicationResult`
pub trait SummaryGenerator {
    fn generate(&self, result: &ApplicationResult) -> Result<String>;
}

/// Fixed-template summary built from the result record
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSummary;

impl SummaryGenerator for TemplateSummary {
    fn generate(&self, result: &ApplicationResult) -> Result<String> {
        let applicant = &result.applicant;
        let assessment = &result.assessment;
        let offer = &result.offer;
        let schedule = &result.schedule;

        let mut text = format!(
            "{} (age {}) requests {:.2} for {} purposes against an annual income of {:.2}.\n",
            applicant.name,
            applicant.age,
            applicant.amount,
            applicant.purpose.as_str().to_lowercase(),
            applicant.income,
        );
        text.push_str(&format!(
            "Estimated credit score is {} with a loan ratio of {:.2}, placing the application in the {} risk tier.\n",
            assessment.credit_score, assessment.loan_ratio, assessment.risk,
        ));

        let recommendation = if result.decision.approved {
            format!(
                "Recommendation: approve at {:.2}% over {} years; monthly payment {:.2}, total interest {:.2}.",
                offer.rate,
                offer.tenure_years,
                schedule.monthly_payment,
                schedule.total_interest(),
            )
        } else {
            format!(
                "Recommendation: decline ({}). The best available terms would be {:.2}% over {} year(s).",
                result.decision.reason, offer.rate, offer.tenure_years,
            )
        };
        text.push_str(&recommendation);

        Ok(text)
    }
}

/// Prompt handed to an external language model for a committee summary
pub fn committee_prompt(result: &ApplicationResult) -> String {
    let applicant = &result.applicant;
    format!(
        "You are a professional banking assistant.\n\
         A customer has applied for a loan with the following details:\n\
         Name: {}\n\
         Age: {}\n\
         Income: {}\n\
         Amount Requested: {}\n\
         Purpose: {}\n\
         Credit Score: {}\n\
         Risk Level: {}\n\
         Interest Rate: {}%\n\
         Tenure (years): {}\n\
         Approval Status: {}\n\
         Reason: {}\n\
         \n\
         Write a concise, professional summary suitable for internal loan committee review. \
         Include key findings and recommendations.",
        applicant.name,
        applicant.age,
        applicant.income,
        applicant.amount,
        applicant.purpose,
        result.assessment.credit_score,
        result.assessment.risk,
        result.offer.rate,
        result.offer.tenure_years,
        result.decision.approved,
        result.decision.reason,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicant::{Applicant, LoanPurpose};
    use crate::pipeline::OriginationEngine;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn evaluate(age: u8, income: f64, amount: f64) -> ApplicationResult {
        let applicant = Applicant::new("Priya Nair", age, income, amount, LoanPurpose::Education).unwrap();
        OriginationEngine::default()
            .evaluate(&applicant, &mut StdRng::seed_from_u64(21))
            .unwrap()
    }

    #[test]
    fn test_template_summary_for_approval() {
        let result = evaluate(40, 500_000.0, 100_000.0);
        let summary = TemplateSummary.generate(&result).unwrap();

        assert!(summary.starts_with("Priya Nair (age 40) requests 100000.00 for education purposes"));
        assert!(summary.contains("Low risk tier"));
        assert!(summary.contains("approve at 7.50% over 5 years"));
    }

    #[test]
    fn test_template_summary_for_decline() {
        let result = evaluate(30, 50_000.0, 80_000.0);
        let summary = TemplateSummary.generate(&result).unwrap();

        assert!(summary.contains("High risk tier"));
        assert!(summary.contains("decline (Declined due to high risk)"));
    }

    #[test]
    fn test_template_summary_has_three_lines() {
        let summary = TemplateSummary.generate(&evaluate(40, 500_000.0, 100_000.0)).unwrap();
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Estimated credit score is "));
        assert!(lines[2].starts_with("Recommendation: approve"));
        assert!(!summary.ends_with('\n'));
    }

    #[test]
    fn test_prompt_lists_every_field() {
        let result = evaluate(30, 50_000.0, 80_000.0);
        let prompt = committee_prompt(&result);

        for expected in [
            "Name: Priya Nair",
            "Age: 30",
            "Income: 50000",
            "Amount Requested: 80000",
            "Purpose: Education",
            "Risk Level: High",
            "Interest Rate: 18%",
            "Tenure (years): 1",
            "Approval Status: false",
            "Reason: Declined due to high risk",
        ] {
            assert!(prompt.contains(expected), "prompt missing '{}'", expected);
        }
    }
}
