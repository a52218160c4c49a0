use crate::stress::{StressAnalysisEngine, StressAssessmentData};

pub(crate) fn engine() -> StressAnalysisEngine {
    StressAnalysisEngine::default()
}

/// Every stressor at its scale maximum and every buffer at zero.
pub(crate) fn overwhelmed_student() -> StressAssessmentData {
    StressAssessmentData {
        anxiety_level: 21.0,
        self_esteem: 0.0,
        mental_health_history: 1.0,
        depression: 27.0,
        headache: 5.0,
        blood_pressure: 3.0,
        sleep_quality: 0.0,
        breathing_problem: 5.0,
        noise_level: 5.0,
        living_conditions: 5.0,
        safety: 5.0,
        basic_needs: 5.0,
        academic_performance: 0.0,
        study_load: 5.0,
        teacher_student_relationship: 0.0,
        future_career_concerns: 5.0,
        social_support: 0.0,
        peer_pressure: 5.0,
        extracurricular_activities: 0.0,
        bullying: 5.0,
    }
}

/// Mirror image of [`overwhelmed_student`].
pub(crate) fn thriving_student() -> StressAssessmentData {
    StressAssessmentData {
        anxiety_level: 0.0,
        self_esteem: 30.0,
        mental_health_history: 0.0,
        depression: 0.0,
        headache: 0.0,
        blood_pressure: 0.0,
        sleep_quality: 5.0,
        breathing_problem: 0.0,
        noise_level: 0.0,
        living_conditions: 0.0,
        safety: 0.0,
        basic_needs: 0.0,
        academic_performance: 5.0,
        study_load: 0.0,
        teacher_student_relationship: 5.0,
        future_career_concerns: 0.0,
        social_support: 5.0,
        peer_pressure: 0.0,
        extracurricular_activities: 5.0,
        bullying: 0.0,
    }
}

/// Every item at the midpoint of its scale.
pub(crate) fn midpoint_student() -> StressAssessmentData {
    StressAssessmentData {
        anxiety_level: 10.5,
        self_esteem: 15.0,
        mental_health_history: 0.5,
        depression: 13.5,
        headache: 2.5,
        blood_pressure: 1.5,
        sleep_quality: 2.5,
        breathing_problem: 2.5,
        noise_level: 2.5,
        living_conditions: 2.5,
        safety: 2.5,
        basic_needs: 2.5,
        academic_performance: 2.5,
        study_load: 2.5,
        teacher_student_relationship: 2.5,
        future_career_concerns: 2.5,
        social_support: 2.5,
        peer_pressure: 2.5,
        extracurricular_activities: 2.5,
        bullying: 2.5,
    }
}

pub(crate) const SURVEY_HEADER: &str = "student_id,anxiety_level,self_esteem,mental_health_history,depression,headache,blood_pressure,sleep_quality,breathing_problem,noise_level,living_conditions,safety,basic_needs,academic_performance,study_load,teacher_student_relationship,future_career_concerns,social_support,peer_pressure,extracurricular_activities,bullying";
