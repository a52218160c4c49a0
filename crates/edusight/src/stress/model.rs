use std::cmp::Ordering;

use super::config::StressModelConfig;
use super::domain::{
    CompositeScores, FeatureImportance, Impact, StressAssessmentData, StressDomain,
    StressFeature, StressLevel,
};

const COMPOSITE_MAX: f64 = 5.0;

/// Min-max position of `value` within the feature's scale, clamped to [0, 1].
pub(crate) fn normalized(data: &StressAssessmentData, feature: StressFeature) -> f64 {
    let scale = feature.scale();
    let position = (data.value(feature) - scale.min) / scale.span();
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    }
}

/// Normalized value oriented so that 1.0 is always the stress-maximizing end.
fn stress_oriented(data: &StressAssessmentData, feature: StressFeature) -> f64 {
    let position = normalized(data, feature);
    if feature.is_protective() {
        1.0 - position
    } else {
        position
    }
}

pub(crate) fn composite_scores(data: &StressAssessmentData) -> CompositeScores {
    let domain = |domain: StressDomain| {
        let total: f64 = domain
            .features()
            .iter()
            .map(|feature| {
                let on_five = normalized(data, *feature) * COMPOSITE_MAX;
                if feature.reversed_in_composite() {
                    COMPOSITE_MAX - on_five
                } else {
                    on_five
                }
            })
            .sum();
        total / domain.features().len() as f64
    };

    CompositeScores {
        psychological_score: domain(StressDomain::Psychological),
        physiological_score: domain(StressDomain::Physiological),
        environmental_score: domain(StressDomain::Environmental),
        academic_score: domain(StressDomain::Academic),
        social_score: domain(StressDomain::Social),
    }
}

/// Weighted average of every predictor, in [0, 1].
pub(crate) fn stress_score(
    data: &StressAssessmentData,
    composites: &CompositeScores,
    config: &StressModelConfig,
) -> f64 {
    let total_weight = config.total_weight();
    if total_weight <= 0.0 {
        return 0.0;
    }

    let features: f64 = StressFeature::ALL
        .iter()
        .map(|feature| stress_oriented(data, *feature) * config.feature_weight(*feature))
        .sum();
    let domains: f64 = StressDomain::ALL
        .iter()
        .map(|domain| {
            (composites.get(*domain) / COMPOSITE_MAX).clamp(0.0, 1.0)
                * config.composite_weight(*domain)
        })
        .sum();

    ((features + domains) / total_weight).clamp(0.0, 1.0)
}

/// Eustress confidence peaks halfway between the two band edges.
pub(crate) fn classify(score: f64, config: &StressModelConfig) -> (StressLevel, f64) {
    let eustress_midpoint = (config.eustress_threshold + config.distress_threshold) / 2.0;
    let (level, raw_confidence) = if score < config.eustress_threshold {
        (StressLevel::NoStress, 1.0 - score)
    } else if score < config.distress_threshold {
        (StressLevel::Eustress, 1.0 - (score - eustress_midpoint).abs())
    } else {
        (StressLevel::Distress, score)
    };

    let confidence = raw_confidence
        .max(config.min_confidence)
        .min(config.max_confidence);
    (level, confidence)
}

pub(crate) fn top_predictors(
    data: &StressAssessmentData,
    composites: &CompositeScores,
    config: &StressModelConfig,
) -> Vec<FeatureImportance> {
    let features = StressFeature::ALL.iter().map(|feature| FeatureImportance {
        feature: feature.name().to_string(),
        importance: normalized(data, *feature) * config.feature_weight(*feature),
        impact: if feature.is_protective() {
            Impact::Negative
        } else {
            Impact::Positive
        },
    });
    let domains = StressDomain::ALL.iter().map(|domain| FeatureImportance {
        feature: domain.name().to_string(),
        importance: (composites.get(*domain) / COMPOSITE_MAX).clamp(0.0, 1.0)
            * config.composite_weight(*domain),
        impact: Impact::Positive,
    });

    let mut ranked: Vec<FeatureImportance> = features.chain(domains).collect();
    ranked.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(config.top_predictors);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_split_at_configured_thresholds() {
        let config = StressModelConfig::default();
        assert_eq!(classify(0.0, &config).0, StressLevel::NoStress);
        assert_eq!(classify(0.29, &config).0, StressLevel::NoStress);
        assert_eq!(classify(0.3, &config).0, StressLevel::Eustress);
        assert_eq!(classify(0.69, &config).0, StressLevel::Eustress);
        assert_eq!(classify(0.7, &config).0, StressLevel::Distress);
        assert_eq!(classify(1.0, &config).0, StressLevel::Distress);
    }

    #[test]
    fn confidence_is_clamped() {
        let config = StressModelConfig::default();
        assert_eq!(classify(0.0, &config).1, 0.95);
        assert_eq!(classify(1.0, &config).1, 0.95);
        assert!((classify(0.5, &config).1 - 0.95).abs() < 1e-9);
        assert!((classify(0.2, &config).1 - 0.8).abs() < 1e-9);
        assert!((classify(0.75, &config).1 - 0.75).abs() < 1e-9);
        for step in 0..=100 {
            let (_, confidence) = classify(step as f64 / 100.0, &config);
            assert!((0.5..=0.95).contains(&confidence));
        }
    }

    #[test]
    fn eustress_confidence_peaks_between_custom_band_edges() {
        let config = StressModelConfig {
            eustress_threshold: 0.2,
            distress_threshold: 0.6,
            ..StressModelConfig::default()
        };
        let (level, confidence) = classify(0.4, &config);
        assert_eq!(level, StressLevel::Eustress);
        assert_eq!(confidence, 0.95);

        let (level, confidence) = classify(0.55, &config);
        assert_eq!(level, StressLevel::Eustress);
        assert!((confidence - 0.85).abs() < 1e-9);
    }
}
