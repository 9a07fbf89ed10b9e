use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateAchievementDto {
    pub name: String,
    pub description: String,
    /// One of `count`, `duration`, `streak`, `milestone`.
    pub category: String,
    /// Activity kind the achievement tracks, e.g. `meditation_completed`.
    pub criteria_type: String,
    pub criteria_value: i32,
    pub icon: String,
    pub points: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateAchievementDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub criteria_type: Option<String>,
    pub criteria_value: Option<i32>,
    pub icon: Option<String>,
    pub points: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AchievementDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub criteria_type: String,
    pub criteria_value: i32,
    pub icon: String,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

/// A user's progress against one achievement definition.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserAchievementDto {
    pub achievement: AchievementDto,
    pub progress: i32,
    pub is_completed: bool,
    pub date_earned: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TotalPointsDto {
    pub total_points: i64,
}
