//! Stress assessment domain models and parameters.
//!
//! An assessment captures an overall stress score, four symptom-domain scores,
//! and free-form trigger and symptom labels. The insights types summarize a
//! window of assessments for the analysis endpoint.

use chrono::{DateTime, Utc};

use crate::{
    dto::stress::{
        CreateStressAssessmentDto, FrequencyDto, PaginatedStressAssessmentsDto, PeakHourDto,
        StressAssessmentDto, StressInsightsDto,
    },
    error::AppError,
};

/// A single stress assessment belonging to one user.
#[derive(Debug, Clone, PartialEq)]
pub struct StressAssessment {
    pub id: i32,
    pub user_id: i32,
    /// Overall stress score 0 to 10.
    pub score: i32,
    pub physical_score: i32,
    pub emotional_score: i32,
    pub behavioral_score: i32,
    pub cognitive_score: i32,
    pub triggers: Vec<String>,
    pub symptoms: Vec<String>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl StressAssessment {
    /// Converts the assessment domain model to a DTO for API responses.
    pub fn into_dto(self) -> StressAssessmentDto {
        StressAssessmentDto {
            id: self.id,
            user_id: self.user_id,
            score: self.score,
            physical_score: self.physical_score,
            emotional_score: self.emotional_score,
            behavioral_score: self.behavioral_score,
            cognitive_score: self.cognitive_score,
            triggers: self.triggers,
            symptoms: self.symptoms,
            recorded_at: self.recorded_at,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an assessment domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(StressAssessment)` - The converted assessment
    /// - `Err(AppError::InternalError)` - Stored triggers or symptoms JSON is not
    ///   an array of strings
    pub fn from_entity(entity: entity::stress_assessment::Model) -> Result<Self, AppError> {
        let triggers = serde_json::from_value(entity.triggers).map_err(|e| {
            AppError::InternalError(format!("Malformed triggers JSON for assessment: {e}"))
        })?;
        let symptoms = serde_json::from_value(entity.symptoms).map_err(|e| {
            AppError::InternalError(format!("Malformed symptoms JSON for assessment: {e}"))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            score: entity.score,
            physical_score: entity.physical_score,
            emotional_score: entity.emotional_score,
            behavioral_score: entity.behavioral_score,
            cognitive_score: entity.cognitive_score,
            triggers,
            symptoms,
            recorded_at: entity.recorded_at,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a stress assessment.
#[derive(Debug, Clone)]
pub struct CreateStressAssessmentParams {
    pub user_id: i32,
    pub score: i32,
    pub physical_score: i32,
    pub emotional_score: i32,
    pub behavioral_score: i32,
    pub cognitive_score: i32,
    pub triggers: Vec<String>,
    pub symptoms: Vec<String>,
    pub recorded_at: DateTime<Utc>,
}

impl CreateStressAssessmentParams {
    /// Builds creation parameters from the request DTO.
    ///
    /// The recorded time defaults to now when the DTO omits it.
    pub fn from_dto(user_id: i32, dto: CreateStressAssessmentDto) -> Self {
        Self {
            user_id,
            score: dto.score,
            physical_score: dto.physical_score,
            emotional_score: dto.emotional_score,
            behavioral_score: dto.behavioral_score,
            cognitive_score: dto.cognitive_score,
            triggers: dto.triggers,
            symptoms: dto.symptoms,
            recorded_at: dto.recorded_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Paginated collection of stress assessments with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedStressAssessments {
    pub assessments: Vec<StressAssessment>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedStressAssessments {
    /// Converts the paginated assessments domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedStressAssessmentsDto {
        PaginatedStressAssessmentsDto {
            assessments: self.assessments.into_iter().map(|a| a.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Direction of the stress trend over an analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Worsening,
    Stable,
    Fluctuating,
    /// Fewer than three assessments in the window.
    InsufficientData,
}

impl Trend {
    /// Wire representation used by the insights endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "IMPROVING",
            Self::Worsening => "WORSENING",
            Self::Stable => "STABLE",
            Self::Fluctuating => "FLUCTUATING",
            Self::InsufficientData => "INSUFFICIENT_DATA",
        }
    }
}

/// Frequency of one trigger or symptom label in the analysis window.
#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    pub label: String,
    pub count: u64,
}

impl Frequency {
    pub fn into_dto(self) -> FrequencyDto {
        FrequencyDto {
            label: self.label,
            count: self.count,
        }
    }
}

/// Average stress score for one hour-of-day bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakHour {
    pub hour: u32,
    pub average_score: f64,
}

impl PeakHour {
    pub fn into_dto(self) -> PeakHourDto {
        PeakHourDto {
            hour: self.hour,
            average_score: self.average_score,
        }
    }
}

/// Windowed analysis of a user's stress assessments.
#[derive(Debug, Clone, PartialEq)]
pub struct StressInsights {
    /// Mean score rounded to one decimal.
    pub average_score: f64,
    pub trend: Trend,
    pub common_triggers: Vec<Frequency>,
    pub common_symptoms: Vec<Frequency>,
    pub peak_hours: Vec<PeakHour>,
    /// Template-generated summary strings.
    pub insights: Vec<String>,
}

impl StressInsights {
    /// Converts the insights domain model to a DTO for API responses.
    pub fn into_dto(self) -> StressInsightsDto {
        StressInsightsDto {
            average_score: self.average_score,
            trend: self.trend.as_str().to_string(),
            common_triggers: self
                .common_triggers
                .into_iter()
                .map(|f| f.into_dto())
                .collect(),
            common_symptoms: self
                .common_symptoms
                .into_iter()
                .map(|f| f.into_dto())
                .collect(),
            peak_hours: self.peak_hours.into_iter().map(|p| p.into_dto()).collect(),
            insights: self.insights,
        }
    }
}
