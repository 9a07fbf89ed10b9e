use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateStressAssessmentDto {
    /// Overall stress score from 0 to 10.
    pub score: i32,
    pub physical_score: i32,
    pub emotional_score: i32,
    pub behavioral_score: i32,
    pub cognitive_score: i32,
    pub triggers: Vec<String>,
    pub symptoms: Vec<String>,
    /// Defaults to now when omitted.
    pub recorded_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct StressAssessmentDto {
    pub id: i32,
    pub user_id: i32,
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

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedStressAssessmentsDto {
    pub assessments: Vec<StressAssessmentDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// How often a trigger or symptom appeared in the analysis window.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct FrequencyDto {
    pub label: String,
    pub count: u64,
}

/// Average stress score for one hour-of-day bucket.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PeakHourDto {
    pub hour: u32,
    pub average_score: f64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct StressInsightsDto {
    pub average_score: f64,
    /// One of `IMPROVING`, `WORSENING`, `STABLE`, `FLUCTUATING`, `INSUFFICIENT_DATA`.
    pub trend: String,
    pub common_triggers: Vec<FrequencyDto>,
    pub common_symptoms: Vec<FrequencyDto>,
    pub peak_hours: Vec<PeakHourDto>,
    pub insights: Vec<String>,
}
