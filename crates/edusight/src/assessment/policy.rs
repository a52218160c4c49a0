use serde::{Deserialize, Serialize};

use super::config::RiskThresholds;

/// Severity tiers, ordered so that `Low < Moderate < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub const fn intervention_required(self) -> bool {
        !matches!(self, Self::Low)
    }

    pub const fn medical_referral_needed(self) -> bool {
        matches!(self, Self::Critical)
    }
}

/// First matching tier wins, most severe first.
pub(crate) fn classify_risk(
    overall: f64,
    weakest_domain: f64,
    thresholds: &RiskThresholds,
) -> RiskLevel {
    if overall < thresholds.critical_overall || weakest_domain < thresholds.critical_domain {
        RiskLevel::Critical
    } else if overall < thresholds.high_overall || weakest_domain < thresholds.high_domain {
        RiskLevel::High
    } else if overall < thresholds.moderate_overall || weakest_domain < thresholds.moderate_domain
    {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_precedence() {
        let thresholds = RiskThresholds::default();
        assert_eq!(classify_risk(39.0, 80.0, &thresholds), RiskLevel::Critical);
        assert_eq!(classify_risk(80.0, 39.0, &thresholds), RiskLevel::Critical);
        assert_eq!(classify_risk(54.0, 80.0, &thresholds), RiskLevel::High);
        assert_eq!(classify_risk(80.0, 49.0, &thresholds), RiskLevel::High);
        assert_eq!(classify_risk(69.0, 80.0, &thresholds), RiskLevel::Moderate);
        assert_eq!(classify_risk(80.0, 59.0, &thresholds), RiskLevel::Moderate);
        assert_eq!(classify_risk(70.0, 60.0, &thresholds), RiskLevel::Low);
    }

    #[test]
    fn lowering_overall_never_reduces_severity() {
        let thresholds = RiskThresholds::default();
        for weakest in [45.0, 55.0, 65.0, 90.0] {
            let mut previous = RiskLevel::Low;
            for overall in (0..=100).rev() {
                let level = classify_risk(overall as f64, weakest, &thresholds);
                assert!(level >= previous, "overall {overall} weakest {weakest}");
                previous = level;
            }
        }
    }

    #[test]
    fn flags_track_the_tier() {
        assert!(!RiskLevel::Low.intervention_required());
        assert!(RiskLevel::Moderate.intervention_required());
        assert!(RiskLevel::High.intervention_required());
        assert!(!RiskLevel::High.medical_referral_needed());
        assert!(RiskLevel::Critical.medical_referral_needed());
    }
}
