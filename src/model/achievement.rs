//! Achievement domain models, activity events, and parameters.
//!
//! Achievement definitions describe how progress is measured (category) and
//! which activity kind feeds it (criteria type). Activity events are emitted
//! by the other services whenever the user does something that can move
//! achievement progress forward.

use chrono::{DateTime, Utc};

use crate::dto::achievement::{
    AchievementDto, CreateAchievementDto, UpdateAchievementDto, UserAchievementDto,
};

/// How an achievement measures progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCategory {
    /// Number of occurrences of the tracked activity.
    Count,
    /// Accumulated completed meditation time, target in minutes.
    Duration,
    /// Consecutive-day streak carried on the event payload.
    Streak,
    /// One-shot threshold on the event payload value.
    Milestone,
}

impl AchievementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Duration => "duration",
            Self::Streak => "streak",
            Self::Milestone => "milestone",
        }
    }

    /// Parses the stored category string.
    ///
    /// # Returns
    /// - `Some(AchievementCategory)` - Recognized category
    /// - `None` - Unknown category string
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "count" => Some(Self::Count),
            "duration" => Some(Self::Duration),
            "streak" => Some(Self::Streak),
            "milestone" => Some(Self::Milestone),
            _ => None,
        }
    }
}

/// Activity kinds that can feed achievement progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    MeditationCompleted,
    StressAssessmentCompleted,
    Login,
    Streak,
}

impl ActivityKind {
    /// Wire representation matching achievement `criteria_type` values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MeditationCompleted => "meditation_completed",
            Self::StressAssessmentCompleted => "stress_assessment_completed",
            Self::Login => "login",
            Self::Streak => "streak",
        }
    }
}

/// An activity event emitted toward the achievement progress calculator.
///
/// The payload fields are loosely typed on purpose, each category reads only
/// the field it cares about and ignores the rest.
#[derive(Debug, Clone, Copy)]
pub struct ActivityEvent {
    pub kind: ActivityKind,
    /// Current consecutive-day streak, present on `Streak` events.
    pub streak: Option<i32>,
    /// Milestone value, e.g. percentage score reduction, present when known.
    pub value: Option<f64>,
}

impl ActivityEvent {
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            kind,
            streak: None,
            value: None,
        }
    }

    pub fn with_streak(kind: ActivityKind, streak: i32) -> Self {
        Self {
            kind,
            streak: Some(streak),
            value: None,
        }
    }

    pub fn with_value(kind: ActivityKind, value: f64) -> Self {
        Self {
            kind,
            streak: None,
            value: Some(value),
        }
    }
}

/// An achievement definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// One of the `AchievementCategory` string values.
    pub category: String,
    /// Activity kind that feeds this achievement.
    pub criteria_type: String,
    /// Target threshold, unit depends on the category.
    pub criteria_value: i32,
    pub icon: String,
    /// Points awarded on completion.
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

impl Achievement {
    /// Converts the achievement domain model to a DTO for API responses.
    pub fn into_dto(self) -> AchievementDto {
        AchievementDto {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            criteria_type: self.criteria_type,
            criteria_value: self.criteria_value,
            icon: self.icon,
            points: self.points,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an achievement domain model at the repository boundary.
    pub fn from_entity(entity: entity::achievement::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            category: entity.category,
            criteria_type: entity.criteria_type,
            criteria_value: entity.criteria_value,
            icon: entity.icon,
            points: entity.points,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating an achievement definition.
#[derive(Debug, Clone)]
pub struct CreateAchievementParams {
    pub name: String,
    pub description: String,
    pub category: String,
    pub criteria_type: String,
    pub criteria_value: i32,
    pub icon: String,
    pub points: i32,
}

impl CreateAchievementParams {
    pub fn from_dto(dto: CreateAchievementDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            category: dto.category,
            criteria_type: dto.criteria_type,
            criteria_value: dto.criteria_value,
            icon: dto.icon,
            points: dto.points,
        }
    }
}

/// Parameters for updating an achievement definition.
///
/// None fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateAchievementParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub criteria_type: Option<String>,
    pub criteria_value: Option<i32>,
    pub icon: Option<String>,
    pub points: Option<i32>,
}

impl UpdateAchievementParams {
    pub fn from_dto(id: i32, dto: UpdateAchievementDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            category: dto.category,
            criteria_type: dto.criteria_type,
            criteria_value: dto.criteria_value,
            icon: dto.icon,
            points: dto.points,
        }
    }
}

/// A user's progress record joined with its achievement definition.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAchievementStatus {
    pub achievement: Achievement,
    /// Progress percentage 0 to 100, monotonically non-decreasing.
    pub progress: i32,
    pub is_completed: bool,
    /// Set exactly once, when progress first reaches 100.
    pub date_earned: Option<DateTime<Utc>>,
}

impl UserAchievementStatus {
    /// Converts the status domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserAchievementDto {
        UserAchievementDto {
            achievement: self.achievement.into_dto(),
            progress: self.progress,
            is_completed: self.is_completed,
            date_earned: self.date_earned,
        }
    }

    /// Builds the joined status from an achievement and its progress record.
    pub fn from_entities(
        achievement: entity::achievement::Model,
        record: entity::user_achievement::Model,
    ) -> Self {
        Self {
            achievement: Achievement::from_entity(achievement),
            progress: record.progress,
            is_completed: record.is_completed,
            date_earned: record.date_earned,
        }
    }
}
