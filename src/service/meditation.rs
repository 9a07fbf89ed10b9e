use chrono::{DateTime, Days, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::meditation_session::MeditationSessionRepository,
    error::AppError,
    model::{
        achievement::{ActivityEvent, ActivityKind},
        meditation::{
            CreateMeditationSessionParams, MeditationSession, PaginatedMeditationSessions,
            UpdateMeditationSessionParams, SESSION_TYPES,
        },
    },
    service::achievement::AchievementService,
};

pub struct MeditationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeditationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a new meditation session for the user.
    ///
    /// # Returns
    /// - `Ok(MeditationSession)` - The created session
    /// - `Err(AppError::BadRequest)` - Invalid session type, duration, or mood
    /// - `Err(AppError::Conflict)` - The user already has an active session
    pub async fn create(
        &self,
        params: CreateMeditationSessionParams,
    ) -> Result<MeditationSession, AppError> {
        validate_session_type(&params.session_type)?;
        validate_duration(params.duration_seconds)?;
        validate_mood(params.mood_before)?;

        let repo = MeditationSessionRepository::new(self.db);

        if repo.find_active_by_user(params.user_id).await?.is_some() {
            return Err(AppError::Conflict(
                "An active meditation session already exists".to_string(),
            ));
        }

        let session = repo.create(params).await?;

        Ok(session)
    }

    /// Gets one of the user's sessions.
    ///
    /// # Returns
    /// - `Ok(MeditationSession)` - The session
    /// - `Err(AppError::NotFound)` - No session with this id
    /// - `Err(AppError::Forbidden)` - The session belongs to another user
    pub async fn get_by_id(&self, id: i32, user_id: i32) -> Result<MeditationSession, AppError> {
        let session = MeditationSessionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Meditation session with id {} not found", id))
            })?;

        if session.user_id != user_id {
            return Err(AppError::Forbidden(
                "Meditation session belongs to another user".to_string(),
            ));
        }

        Ok(session)
    }

    /// Gets paginated sessions for the user, newest first, optionally bounded
    /// by a start-time range
    pub async fn get_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<PaginatedMeditationSessions, AppError> {
        let (sessions, total) = MeditationSessionRepository::new(self.db)
            .get_by_user_paginated(user_id, page, per_page, from, to)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedMeditationSessions {
            sessions,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates one of the user's sessions, leaving `None` fields unchanged
    pub async fn update(
        &self,
        params: UpdateMeditationSessionParams,
        user_id: i32,
    ) -> Result<MeditationSession, AppError> {
        if let Some(session_type) = &params.session_type {
            validate_session_type(session_type)?;
        }

        if let Some(duration_seconds) = params.duration_seconds {
            validate_duration(duration_seconds)?;
        }

        validate_mood(params.mood_before)?;

        self.get_by_id(params.id, user_id).await?;

        let session = MeditationSessionRepository::new(self.db)
            .update(params)
            .await?;

        Ok(session)
    }

    /// Completes one of the user's sessions.
    ///
    /// Sets the end time and optional after-mood, then fires a
    /// `meditation_completed` activity event followed by a `streak` event
    /// carrying the user's current consecutive-day streak.
    ///
    /// # Returns
    /// - `Ok(MeditationSession)` - The completed session
    /// - `Err(AppError::Conflict)` - The session is already completed
    pub async fn complete(
        &self,
        id: i32,
        user_id: i32,
        mood_after: Option<i32>,
    ) -> Result<MeditationSession, AppError> {
        validate_mood(mood_after)?;

        let session = self.get_by_id(id, user_id).await?;

        if session.completed {
            return Err(AppError::Conflict(
                "Meditation session is already completed".to_string(),
            ));
        }

        let repo = MeditationSessionRepository::new(self.db);

        let session = repo.complete(id, Utc::now(), mood_after).await?;

        let achievement_service = AchievementService::new(self.db);

        achievement_service
            .process_activity(user_id, ActivityEvent::new(ActivityKind::MeditationCompleted))
            .await?;

        let completed_days = repo.completed_started_at_by_user(user_id).await?;
        let streak = current_daily_streak(&completed_days, Utc::now().date_naive());

        achievement_service
            .process_activity(user_id, ActivityEvent::with_streak(ActivityKind::Streak, streak))
            .await?;

        Ok(session)
    }

    /// Deletes one of the user's sessions
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        self.get_by_id(id, user_id).await?;

        MeditationSessionRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}

/// Number of consecutive calendar days ending today with at least one
/// completed session. Zero when no session was completed today.
fn current_daily_streak(completed_at: &[DateTime<Utc>], today: NaiveDate) -> i32 {
    let mut streak = 0;
    let mut expected = today;

    for started_at in completed_at {
        let day = started_at.date_naive();

        if day == expected {
            streak += 1;

            expected = match expected.checked_sub_days(Days::new(1)) {
                Some(previous) => previous,
                None => break,
            };
        } else if day < expected {
            break;
        }
    }

    streak
}

fn validate_session_type(session_type: &str) -> Result<(), AppError> {
    if !SESSION_TYPES.contains(&session_type) {
        return Err(AppError::BadRequest(format!(
            "Session type must be one of {}, got '{}'",
            SESSION_TYPES.join(", "),
            session_type
        )));
    }

    Ok(())
}

fn validate_duration(duration_seconds: i32) -> Result<(), AppError> {
    if duration_seconds <= 0 {
        return Err(AppError::BadRequest(
            "Duration must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_mood(mood: Option<i32>) -> Result<(), AppError> {
    if let Some(mood) = mood {
        if !(1..=10).contains(&mood) {
            return Err(AppError::BadRequest(
                "Mood rating must be between 1 and 10".to_string(),
            ));
        }
    }

    Ok(())
}
