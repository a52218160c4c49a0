use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

use super::domain::{StressAssessmentData, StressLevel, StressPredictionResult};
use super::intervention::urgency_for;

/// One survey response tagged with the student it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressSurveyRow {
    pub student_id: String,
    pub data: StressAssessmentData,
}

#[derive(Debug)]
pub enum StressImportError {
    Io(std::io::Error),
    /// `row` is 1-based and counts data rows only.
    Csv { row: usize, source: csv::Error },
    Invalid { row: usize, source: ValidationError },
}

impl std::fmt::Display for StressImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StressImportError::Io(err) => write!(f, "failed to read stress survey: {}", err),
            StressImportError::Csv { row, source } => {
                write!(f, "invalid survey CSV at row {}: {}", row, source)
            }
            StressImportError::Invalid { row, source } => {
                write!(f, "survey row {} out of range: {}", row, source)
            }
        }
    }
}

impl std::error::Error for StressImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StressImportError::Io(err) => Some(err),
            StressImportError::Csv { source, .. } => Some(source),
            StressImportError::Invalid { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for StressImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Reads survey exports with a `student_id` column followed by the twenty item columns.
pub struct StressSurveyImporter;

impl StressSurveyImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<StressSurveyRow>, StressImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<StressSurveyRow>, StressImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows = Vec::new();

        for (index, record) in csv_reader.deserialize::<SurveyCsvRow>().enumerate() {
            let row = index + 1;
            let parsed = record.map_err(|source| StressImportError::Csv { row, source })?;
            let survey = parsed.into_row();
            survey
                .data
                .validate()
                .map_err(|source| StressImportError::Invalid { row, source })?;
            rows.push(survey);
        }

        Ok(rows)
    }
}

#[derive(Debug, Deserialize)]
struct SurveyCsvRow {
    student_id: String,
    anxiety_level: f64,
    self_esteem: f64,
    mental_health_history: f64,
    depression: f64,
    headache: f64,
    blood_pressure: f64,
    sleep_quality: f64,
    breathing_problem: f64,
    noise_level: f64,
    living_conditions: f64,
    safety: f64,
    basic_needs: f64,
    academic_performance: f64,
    study_load: f64,
    teacher_student_relationship: f64,
    future_career_concerns: f64,
    social_support: f64,
    peer_pressure: f64,
    extracurricular_activities: f64,
    bullying: f64,
}

impl SurveyCsvRow {
    fn into_row(self) -> StressSurveyRow {
        StressSurveyRow {
            student_id: self.student_id,
            data: StressAssessmentData {
                anxiety_level: self.anxiety_level,
                self_esteem: self.self_esteem,
                mental_health_history: self.mental_health_history,
                depression: self.depression,
                headache: self.headache,
                blood_pressure: self.blood_pressure,
                sleep_quality: self.sleep_quality,
                breathing_problem: self.breathing_problem,
                noise_level: self.noise_level,
                living_conditions: self.living_conditions,
                safety: self.safety,
                basic_needs: self.basic_needs,
                academic_performance: self.academic_performance,
                study_load: self.study_load,
                teacher_student_relationship: self.teacher_student_relationship,
                future_career_concerns: self.future_career_concerns,
                social_support: self.social_support,
                peer_pressure: self.peer_pressure,
                extracurricular_activities: self.extracurricular_activities,
                bullying: self.bullying,
            },
        }
    }
}

/// Cohort-level tally of a batch of predictions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StressBatchSummary {
    pub total: usize,
    pub by_level: BTreeMap<String, usize>,
    /// Students whose plan would carry a referral, in input order.
    pub referrals: Vec<String>,
}

impl StressBatchSummary {
    pub fn from_predictions<'a, I>(predictions: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a StressPredictionResult)>,
    {
        let mut summary = Self::default();
        for level in [
            StressLevel::NoStress,
            StressLevel::Eustress,
            StressLevel::Distress,
        ] {
            summary.by_level.insert(level.label().to_string(), 0);
        }

        for (student_id, prediction) in predictions {
            summary.total += 1;
            *summary
                .by_level
                .entry(prediction.stress_level.label().to_string())
                .or_default() += 1;
            let (_, referral) =
                urgency_for(prediction.stress_level, prediction.risk_factors.len());
            if referral {
                summary.referrals.push(student_id.to_string());
            }
        }

        summary
    }

    pub fn count(&self, level: StressLevel) -> usize {
        self.by_level.get(level.label()).copied().unwrap_or(0)
    }
}
