use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive bounds for an input measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN and infinities never fall inside a range.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// A single input that fell outside its documented scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeViolation {
    pub field: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl std::fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {} is outside [{}, {}]",
            self.field, self.value, self.min, self.max
        )
    }
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{} input value(s) out of range: {}", .violations.len(), summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<RangeViolation>,
}

fn summarize(violations: &[RangeViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collects violations while walking an input record.
#[derive(Debug, Default)]
pub(crate) struct RangeCheck {
    violations: Vec<RangeViolation>,
}

impl RangeCheck {
    pub(crate) fn check(&mut self, field: impl Into<String>, value: f64, range: ScoreRange) {
        if !range.contains(value) {
            self.violations.push(RangeViolation {
                field: field.into(),
                value,
                min: range.min,
                max: range.max,
            });
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_rejects_non_finite_values() {
        let range = ScoreRange::new(1.0, 5.0);
        assert!(range.contains(1.0));
        assert!(range.contains(5.0));
        assert!(!range.contains(f64::NAN));
        assert!(!range.contains(f64::INFINITY));
        assert!(!range.contains(5.5));
    }

    #[test]
    fn check_collects_every_violation() {
        let mut check = RangeCheck::default();
        check.check("attention", 7.0, ScoreRange::new(1.0, 5.0));
        check.check("memory", 3.0, ScoreRange::new(1.0, 5.0));
        check.check("gpa", -1.0, ScoreRange::new(0.0, 4.0));

        let error = check.finish().expect_err("two fields are out of range");
        assert_eq!(error.violations.len(), 2);
        assert_eq!(error.violations[0].field, "attention");
        assert!(error.to_string().contains("gpa = -1 is outside [0, 4]"));
    }
}
