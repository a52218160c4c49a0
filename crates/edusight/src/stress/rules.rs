use serde::{Deserialize, Serialize};

use super::domain::{StressAssessmentData, StressLevel};

/// Threshold-triggered concerns surfaced to counselors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressRiskFactor {
    HighAnxiety,
    Depression,
    LowSelfEsteem,
    MentalHealthHistory,
    PoorSleep,
    FrequentHeadaches,
    ElevatedBloodPressure,
    BreathingProblems,
    NoisyEnvironment,
    HeavyStudyLoad,
    CareerConcerns,
    AcademicStruggles,
    WeakSocialSupport,
    PeerPressure,
    Bullying,
}

impl StressRiskFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighAnxiety => "High anxiety levels",
            Self::Depression => "Elevated depression indicators",
            Self::LowSelfEsteem => "Low self-esteem",
            Self::MentalHealthHistory => "History of mental health concerns",
            Self::PoorSleep => "Poor sleep quality",
            Self::FrequentHeadaches => "Frequent headaches",
            Self::ElevatedBloodPressure => "Elevated blood pressure",
            Self::BreathingProblems => "Breathing difficulties",
            Self::NoisyEnvironment => "Noisy living environment",
            Self::HeavyStudyLoad => "Heavy study load",
            Self::CareerConcerns => "Future career worries",
            Self::AcademicStruggles => "Struggling academic performance",
            Self::WeakSocialSupport => "Limited social support",
            Self::PeerPressure => "High peer pressure",
            Self::Bullying => "Experiencing bullying",
        }
    }

    fn recommendation(self) -> Option<&'static str> {
        let text = match self {
            Self::HighAnxiety => "Practice daily breathing or mindfulness exercises to manage anxiety",
            Self::Depression => "Seek an evaluation from a licensed mental health professional",
            Self::LowSelfEsteem => {
                "Join activities that build confidence and recognise personal achievements"
            }
            Self::PoorSleep => "Keep a consistent sleep schedule and limit screens before bed",
            Self::ElevatedBloodPressure => "Have blood pressure checked by a healthcare provider",
            Self::FrequentHeadaches | Self::BreathingProblems => {
                "Consult the school nurse about recurring physical symptoms"
            }
            Self::NoisyEnvironment => "Find a quieter study space at school or a public library",
            Self::HeavyStudyLoad => "Break study sessions into shorter blocks with regular breaks",
            Self::CareerConcerns => "Talk with a career advisor about future pathways",
            Self::AcademicStruggles => "Request subject support sessions from teachers",
            Self::WeakSocialSupport => "Connect with a peer mentor or student support group",
            Self::PeerPressure => "Practice assertive communication with a trusted adult",
            Self::Bullying => "Report bullying to school staff and involve parents",
            Self::MentalHealthHistory => return None,
        };
        Some(text)
    }
}

/// Conditions that buffer a student against stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectiveFactor {
    HealthySelfEsteem,
    GoodSleep,
    StrongSocialSupport,
    AcademicConfidence,
    PositiveTeacherRelationship,
    ExtracurricularEngagement,
}

impl ProtectiveFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HealthySelfEsteem => "Healthy self-esteem",
            Self::GoodSleep => "Good sleep quality",
            Self::StrongSocialSupport => "Strong social support network",
            Self::AcademicConfidence => "Solid academic performance",
            Self::PositiveTeacherRelationship => "Positive teacher relationships",
            Self::ExtracurricularEngagement => "Active extracurricular involvement",
        }
    }
}

pub(crate) fn risk_factors(data: &StressAssessmentData) -> Vec<StressRiskFactor> {
    let checks = [
        (data.anxiety_level > 15.0, StressRiskFactor::HighAnxiety),
        (data.depression > 15.0, StressRiskFactor::Depression),
        (data.self_esteem < 10.0, StressRiskFactor::LowSelfEsteem),
        (
            data.mental_health_history >= 1.0,
            StressRiskFactor::MentalHealthHistory,
        ),
        (data.sleep_quality < 2.0, StressRiskFactor::PoorSleep),
        (data.headache > 3.0, StressRiskFactor::FrequentHeadaches),
        (
            data.blood_pressure > 2.0,
            StressRiskFactor::ElevatedBloodPressure,
        ),
        (data.breathing_problem > 3.0, StressRiskFactor::BreathingProblems),
        (data.noise_level > 3.0, StressRiskFactor::NoisyEnvironment),
        (data.study_load > 3.0, StressRiskFactor::HeavyStudyLoad),
        (data.future_career_concerns > 3.0, StressRiskFactor::CareerConcerns),
        (data.academic_performance < 2.0, StressRiskFactor::AcademicStruggles),
        (data.social_support < 2.0, StressRiskFactor::WeakSocialSupport),
        (data.peer_pressure > 3.0, StressRiskFactor::PeerPressure),
        (data.bullying > 2.0, StressRiskFactor::Bullying),
    ];

    checks
        .into_iter()
        .filter_map(|(triggered, factor)| triggered.then_some(factor))
        .collect()
}

pub(crate) fn protective_factors(data: &StressAssessmentData) -> Vec<ProtectiveFactor> {
    let checks = [
        (data.self_esteem > 20.0, ProtectiveFactor::HealthySelfEsteem),
        (data.sleep_quality > 3.0, ProtectiveFactor::GoodSleep),
        (data.social_support > 3.0, ProtectiveFactor::StrongSocialSupport),
        (
            data.academic_performance > 3.0,
            ProtectiveFactor::AcademicConfidence,
        ),
        (
            data.teacher_student_relationship > 3.0,
            ProtectiveFactor::PositiveTeacherRelationship,
        ),
        (
            data.extracurricular_activities > 3.0,
            ProtectiveFactor::ExtracurricularEngagement,
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(present, factor)| present.then_some(factor))
        .collect()
}

pub(crate) fn recommendations(
    level: StressLevel,
    risks: &[StressRiskFactor],
    limit: usize,
) -> Vec<String> {
    let mut recommendations: Vec<&'static str> = Vec::new();

    if level == StressLevel::Distress {
        recommendations.push("Schedule a meeting with the school counselor within one week");
    }

    for text in risks.iter().filter_map(|risk| risk.recommendation()) {
        if !recommendations.contains(&text) {
            recommendations.push(text);
        }
    }

    match level {
        StressLevel::Eustress => {
            recommendations.push("Use weekly planning to keep workload pressure manageable")
        }
        StressLevel::NoStress if recommendations.is_empty() => {
            recommendations.push("Maintain current healthy routines and balance")
        }
        _ => {}
    }

    recommendations
        .into_iter()
        .take(limit)
        .map(str::to_string)
        .collect()
}
