//! Score estimator: base score from income and age plus bounded noise

use crate::applicant::validate_age;
use crate::error::{ensure_non_negative, ensure_positive, OriginationError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parameters of the synthetic credit score
///
/// score = floor(base + income / income_divisor + age / age_divisor + U(-a, a)),
/// capped at `max_score`. There is no lower cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEstimator {
    pub base: f64,
    pub income_divisor: f64,
    pub age_divisor: f64,
    /// Half-width `a` of the uniform noise band
    pub noise_amplitude: f64,
    pub max_score: f64,
}

impl Default for ScoreEstimator {
    fn default() -> Self {
        Self {
            base: 300.0,
            income_divisor: 1000.0,
            age_divisor: 2.0,
            noise_amplitude: 50.0,
            max_score: 850.0,
        }
    }
}

impl ScoreEstimator {
    /// Check the parameters are usable
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("base", self.base)?;
        ensure_positive("income_divisor", self.income_divisor)?;
        ensure_positive("age_divisor", self.age_divisor)?;
        ensure_non_negative("noise_amplitude", self.noise_amplitude)?;
        ensure_positive("max_score", self.max_score)?;
        if self.max_score > u16::MAX as f64 {
            return Err(OriginationError::invalid(
                "max_score",
                format!("must not exceed {}, got {}", u16::MAX, self.max_score),
            ));
        }
        if self.noise_amplitude >= self.max_score {
            return Err(OriginationError::invalid(
                "noise_amplitude",
                format!("must be below max_score {}, got {}", self.max_score, self.noise_amplitude),
            ));
        }
        Ok(())
    }

    /// Noise-free score before flooring and capping
    pub fn expected(&self, age: u8, income: f64) -> f64 {
        self.base + income / self.income_divisor + age as f64 / self.age_divisor
    }

    /// Draw a score for the applicant.
    ///
    /// Noise comes from the caller's generator, so a seeded RNG reproduces the
    /// same score for the same inputs.
    pub fn estimate<R: Rng + ?Sized>(&self, age: u8, income: f64, rng: &mut R) -> Result<u16> {
        self.validate()?;
        validate_age(age)?;
        ensure_positive("income", income)?;

        let a = self.noise_amplitude;
        let noise = if a > 0.0 { rng.gen_range(-a..=a) } else { 0.0 };

        let raw = (self.expected(age, income) + noise).floor();
        let score = raw.min(self.max_score);
        log::trace!("score: age={} income={:.2} noise={:.3} raw={} capped={}", age, income, noise, raw, score);

        // Negative draws (amplitude above base) saturate to 0
        Ok(score as u16)
    }

    /// Range of scores `estimate` can return for these inputs
    pub fn bounds(&self, age: u8, income: f64) -> (f64, f64) {
        let expected = self.expected(age, income);
        let low = (expected - self.noise_amplitude).floor().min(self.max_score).max(0.0);
        let high = (expected + self.noise_amplitude).floor().min(self.max_score);
        (low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_expected_score() {
        let estimator = ScoreEstimator::default();
        // 300 + 50 + 15
        assert_relative_eq!(estimator.expected(30, 50_000.0), 365.0);
        // 300 + 60 + 25
        assert_relative_eq!(estimator.expected(50, 60_000.0), 385.0);
    }

    #[test]
    fn test_score_within_noise_band() {
        let estimator = ScoreEstimator::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let score = estimator.estimate(30, 50_000.0, &mut rng).unwrap() as f64;
            assert!((315.0..=415.0).contains(&score), "score {} outside 365 +/- 50", score);
        }
    }

    #[test]
    fn test_score_never_exceeds_cap() {
        let estimator = ScoreEstimator::default();
        let mut rng = StdRng::seed_from_u64(42);

        for age in (18..=100).step_by(7) {
            for income in [10_000.0, 80_000.0, 400_000.0, 550_000.0, 5_000_000.0] {
                let score = estimator.estimate(age, income, &mut rng).unwrap();
                assert!(score <= 850, "age {} income {} gave {}", age, income, score);
            }
        }

        // Base far above the cap always lands on the cap
        assert_eq!(estimator.estimate(40, 2_000_000.0, &mut rng).unwrap(), 850);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let estimator = ScoreEstimator::default();
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);

        let first: Vec<u16> = (0..20).map(|_| estimator.estimate(44, 72_000.0, &mut a).unwrap()).collect();
        let second: Vec<u16> = (0..20).map(|_| estimator.estimate(44, 72_000.0, &mut b).unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_noise_is_deterministic() {
        let estimator = ScoreEstimator {
            noise_amplitude: 0.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        // floor(300 + 61.5 + 16.5) = 378
        assert_eq!(estimator.estimate(33, 61_500.0, &mut rng).unwrap(), 378);
    }

    #[test]
    fn test_invalid_inputs() {
        let estimator = ScoreEstimator::default();
        let mut rng = StdRng::seed_from_u64(1);

        let err = estimator.estimate(17, 50_000.0, &mut rng).unwrap_err();
        assert_eq!(err.field(), Some("age"));
        let err = estimator.estimate(30, 0.0, &mut rng).unwrap_err();
        assert_eq!(err.field(), Some("income"));
    }

    #[test]
    fn test_bounds() {
        let estimator = ScoreEstimator::default();
        assert_eq!(estimator.bounds(30, 50_000.0), (315.0, 415.0));
        assert_eq!(estimator.bounds(40, 900_000.0), (850.0, 850.0));
    }

    #[test]
    fn test_validate_parameters() {
        assert!(ScoreEstimator::default().validate().is_ok());

        let bad = ScoreEstimator {
            income_divisor: 0.0,
            ..Default::default()
        };
        assert_eq!(bad.validate().unwrap_err().field(), Some("income_divisor"));

        let bad = ScoreEstimator {
            noise_amplitude: -1.0,
            ..Default::default()
        };
        assert_eq!(bad.validate().unwrap_err().field(), Some("noise_amplitude"));
    }

    #[test]
    fn test_oversized_noise_is_rejected() {
        let bad = ScoreEstimator {
            noise_amplitude: 1e308,
            ..Default::default()
        };
        assert_eq!(bad.validate().unwrap_err().field(), Some("noise_amplitude"));

        let mut rng = StdRng::seed_from_u64(1);
        let err = bad.estimate(40, 60_000.0, &mut rng).unwrap_err();
        assert_eq!(err.field(), Some("noise_amplitude"));
    }
}
