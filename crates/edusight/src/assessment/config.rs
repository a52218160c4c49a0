use serde::{Deserialize, Serialize};

use super::domain::Framework;

/// Calibration for the 360° aggregator. `Default` carries the production weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub score_floor: f64,
    pub score_ceiling: f64,
    pub frameworks: FrameworkMultipliers,
    pub academic_weights: AcademicWeights,
    pub psychological_weights: PsychologicalWeights,
    pub physical_weights: PhysicalWeights,
    pub overall_weights: OverallWeights,
    pub bmi: BmiBand,
    pub risk: RiskThresholds,
    pub support_threshold: f64,
    pub subject_strength_threshold: f64,
    pub subject_concern_threshold: f64,
    pub highlighted_subjects: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            score_floor: 40.0,
            score_ceiling: 100.0,
            frameworks: FrameworkMultipliers::default(),
            academic_weights: AcademicWeights::default(),
            psychological_weights: PsychologicalWeights::default(),
            physical_weights: PhysicalWeights::default(),
            overall_weights: OverallWeights::default(),
            bmi: BmiBand::default(),
            risk: RiskThresholds::default(),
            support_threshold: 60.0,
            subject_strength_threshold: 80.0,
            subject_concern_threshold: 60.0,
            highlighted_subjects: 3,
        }
    }
}

impl ScoreConfig {
    pub(crate) fn clamp(&self, score: f64) -> f64 {
        score.max(self.score_floor).min(self.score_ceiling)
    }
}

/// Per-framework scaling: `difficulty` lifts subject averages from harder curricula,
/// `breadth` scales the whole academic composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameworkScaling {
    pub difficulty: f64,
    pub breadth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkMultipliers {
    pub ib: FrameworkScaling,
    pub igcse: FrameworkScaling,
    pub icse: FrameworkScaling,
    pub cbse: FrameworkScaling,
}

impl Default for FrameworkMultipliers {
    fn default() -> Self {
        Self {
            ib: FrameworkScaling {
                difficulty: 1.2,
                breadth: 1.1,
            },
            igcse: FrameworkScaling {
                difficulty: 1.1,
                breadth: 1.0,
            },
            icse: FrameworkScaling {
                difficulty: 1.0,
                breadth: 0.9,
            },
            cbse: FrameworkScaling {
                difficulty: 0.9,
                breadth: 0.8,
            },
        }
    }
}

impl FrameworkMultipliers {
    pub fn for_framework(&self, framework: Framework) -> FrameworkScaling {
        match framework {
            Framework::Ib => self.ib,
            Framework::Igcse => self.igcse,
            Framework::Icse => self.icse,
            Framework::Cbse => self.cbse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcademicWeights {
    pub subjects: f64,
    pub gpa: f64,
    pub attendance: f64,
    pub behavior: f64,
    pub teacher_feedback: f64,
}

impl Default for AcademicWeights {
    fn default() -> Self {
        Self {
            subjects: 0.40,
            gpa: 0.25,
            attendance: 0.15,
            behavior: 0.10,
            teacher_feedback: 0.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsychologicalWeights {
    pub cognitive: f64,
    pub emotional: f64,
    pub personality: f64,
    pub learning_style: f64,
    pub motivation: f64,
}

impl Default for PsychologicalWeights {
    fn default() -> Self {
        Self {
            cognitive: 0.35,
            emotional: 0.25,
            personality: 0.15,
            learning_style: 0.10,
            motivation: 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalWeights {
    pub motor_skills: f64,
    pub fitness: f64,
    pub health: f64,
    pub sports: f64,
}

impl Default for PhysicalWeights {
    fn default() -> Self {
        Self {
            motor_skills: 0.30,
            fitness: 0.35,
            health: 0.25,
            sports: 0.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallWeights {
    pub academic: f64,
    pub psychological: f64,
    pub physical: f64,
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self {
            academic: 0.5,
            psychological: 0.3,
            physical: 0.2,
        }
    }
}

/// Healthy BMI window; outside it each unit of distance from `ideal` costs `penalty_per_unit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmiBand {
    pub healthy_min: f64,
    pub healthy_max: f64,
    pub ideal: f64,
    pub penalty_per_unit: f64,
}

impl Default for BmiBand {
    fn default() -> Self {
        Self {
            healthy_min: 18.5,
            healthy_max: 24.9,
            ideal: 21.7,
            penalty_per_unit: 10.0,
        }
    }
}

/// Cut-offs for the risk ladder. A tier applies when the overall score is below its
/// `overall` bound or the weakest domain is below its `domain` bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub critical_overall: f64,
    pub critical_domain: f64,
    pub high_overall: f64,
    pub high_domain: f64,
    pub moderate_overall: f64,
    pub moderate_domain: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical_overall: 40.0,
            critical_domain: 40.0,
            high_overall: 55.0,
            high_domain: 50.0,
            moderate_overall: 70.0,
            moderate_domain: 60.0,
        }
    }
}
