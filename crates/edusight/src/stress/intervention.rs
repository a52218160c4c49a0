use serde::{Deserialize, Serialize};

use super::domain::{StressLevel, StressPredictionResult};
use super::rules::StressRiskFactor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Days until the next counselor check-in.
    pub const fn follow_up_days(self) -> u16 {
        match self {
            Self::Critical => 7,
            Self::High => 14,
            Self::Medium => 30,
            Self::Low => 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressInterventionPlan {
    pub stress_level: StressLevel,
    pub urgency: Urgency,
    pub referral_needed: bool,
    pub immediate_actions: Vec<String>,
    pub short_term_goals: Vec<String>,
    pub long_term_goals: Vec<String>,
    pub resources: Vec<String>,
    pub follow_up_days: u16,
}

pub(crate) fn urgency_for(level: StressLevel, risk_count: usize) -> (Urgency, bool) {
    if level == StressLevel::Distress || risk_count > 5 {
        (Urgency::Critical, true)
    } else if level == StressLevel::Eustress || risk_count > 3 {
        (Urgency::High, true)
    } else if risk_count > 1 {
        (Urgency::Medium, false)
    } else {
        (Urgency::Low, false)
    }
}

#[derive(Default)]
struct PlanBuilder {
    immediate: Vec<String>,
    short_term: Vec<String>,
    long_term: Vec<String>,
    resources: Vec<String>,
}

fn add(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}

pub(crate) fn build_plan(prediction: &StressPredictionResult) -> StressInterventionPlan {
    let level = prediction.stress_level;
    let risks = &prediction.risk_factors;
    let (urgency, referral_needed) = urgency_for(level, risks.len());
    let mut plan = PlanBuilder::default();

    match urgency {
        Urgency::Critical => {
            add(&mut plan.immediate, "Contact parents or guardians today");
            add(
                &mut plan.immediate,
                "Arrange an urgent session with the school counselor",
            );
            add(
                &mut plan.immediate,
                "Provide a quiet space the student can use during school hours",
            );
        }
        Urgency::High => {
            add(&mut plan.immediate, "Schedule a counselor check-in this week");
            add(&mut plan.immediate, "Let the homeroom teacher know about the concern");
        }
        Urgency::Medium => {
            add(&mut plan.immediate, "Talk through current stress triggers with the student");
        }
        Urgency::Low => {
            add(&mut plan.immediate, "Continue routine wellbeing check-ins");
        }
    }

    match level {
        StressLevel::Distress => {
            add(
                &mut plan.short_term,
                "Reduce reported anxiety and low-mood symptoms within four weeks",
            );
            add(
                &mut plan.long_term,
                "Sustain improvement through monthly counseling reviews",
            );
        }
        StressLevel::Eustress => {
            add(
                &mut plan.short_term,
                "Turn current pressure into manageable weekly goals",
            );
        }
        StressLevel::NoStress => {
            add(&mut plan.short_term, "Keep up existing healthy coping habits");
        }
    }
    add(&mut plan.long_term, "Develop resilient, self-directed coping strategies");

    add(&mut plan.resources, "School counselor");
    if referral_needed {
        add(&mut plan.resources, "Licensed child and adolescent psychologist");
    }

    for risk in risks {
        match risk {
            StressRiskFactor::HighAnxiety => {
                add(&mut plan.short_term, "Attend weekly anxiety management sessions");
                add(&mut plan.resources, "Anxiety management workbook");
            }
            StressRiskFactor::Depression => {
                add(
                    &mut plan.immediate,
                    "Screen for depression with a qualified professional",
                );
            }
            StressRiskFactor::MentalHealthHistory => {
                add(
                    &mut plan.immediate,
                    "Coordinate with the student's existing care provider",
                );
            }
            StressRiskFactor::PoorSleep => {
                add(
                    &mut plan.short_term,
                    "Establish a regular sleep routine of 8-9 hours",
                );
                add(&mut plan.resources, "Sleep hygiene guide");
            }
            StressRiskFactor::ElevatedBloodPressure
            | StressRiskFactor::FrequentHeadaches
            | StressRiskFactor::BreathingProblems => {
                add(
                    &mut plan.immediate,
                    "Refer to the school nurse for a physical health check",
                );
                add(&mut plan.resources, "School nurse");
            }
            StressRiskFactor::HeavyStudyLoad => {
                add(
                    &mut plan.short_term,
                    "Agree a balanced homework schedule with teachers",
                );
            }
            StressRiskFactor::CareerConcerns => {
                add(&mut plan.long_term, "Build a personal career exploration plan");
                add(&mut plan.resources, "Career guidance counselor");
            }
            StressRiskFactor::AcademicStruggles => {
                add(
                    &mut plan.long_term,
                    "Rebuild academic confidence with targeted subject support",
                );
            }
            StressRiskFactor::WeakSocialSupport => {
                add(
                    &mut plan.short_term,
                    "Build connections through a peer support group",
                );
                add(&mut plan.resources, "Peer mentoring program");
            }
            StressRiskFactor::Bullying => {
                add(&mut plan.immediate, "Open a bullying incident report");
                add(&mut plan.resources, "Anti-bullying program coordinator");
            }
            StressRiskFactor::LowSelfEsteem => {
                add(
                    &mut plan.long_term,
                    "Strengthen self-esteem through achievable personal goals",
                );
            }
            StressRiskFactor::NoisyEnvironment | StressRiskFactor::PeerPressure => {}
        }
    }

    StressInterventionPlan {
        stress_level: level,
        urgency,
        referral_needed,
        immediate_actions: plan.immediate,
        short_term_goals: plan.short_term,
        long_term_goals: plan.long_term,
        resources: plan.resources,
        follow_up_days: urgency.follow_up_days(),
    }
}
