use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        meditation_session::MeditationSessionRepository,
        stress_assessment::StressAssessmentRepository,
    },
    error::AppError,
    model::{meditation::MeditationSession, stress::StressAssessment},
};

/// Export encodings supported by the export endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Parses the `format` query value.
    ///
    /// # Returns
    /// - `Ok(ExportFormat)` - Recognized format
    /// - `Err(AppError::BadRequest)` - Anything other than `csv` or `json`
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(AppError::BadRequest(format!(
                "Format must be csv or json, got '{}'",
                value
            ))),
        }
    }
}

/// A rendered export ready to be served as a file download.
pub struct ExportFile {
    pub content_type: &'static str,
    pub file_name: &'static str,
    pub body: Vec<u8>,
}

pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Exports the user's meditation sessions, oldest first
    pub async fn meditation_sessions(
        &self,
        user_id: i32,
        format: ExportFormat,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<ExportFile, AppError> {
        let sessions = MeditationSessionRepository::new(self.db)
            .get_by_user_in_range(user_id, from, to)
            .await?;

        match format {
            ExportFormat::Csv => Ok(ExportFile {
                content_type: "text/csv",
                file_name: "meditation_sessions.csv",
                body: meditation_sessions_csv(&sessions)?,
            }),
            ExportFormat::Json => {
                let dtos: Vec<_> = sessions.into_iter().map(|s| s.into_dto()).collect();

                Ok(ExportFile {
                    content_type: "application/json",
                    file_name: "meditation_sessions.json",
                    body: serde_json::to_vec(&dtos)
                        .map_err(|e| AppError::InternalError(e.to_string()))?,
                })
            }
        }
    }

    /// Exports the user's stress assessments, oldest first
    pub async fn stress_assessments(
        &self,
        user_id: i32,
        format: ExportFormat,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<ExportFile, AppError> {
        let assessments = StressAssessmentRepository::new(self.db)
            .get_by_user_in_range(user_id, from, to)
            .await?;

        match format {
            ExportFormat::Csv => Ok(ExportFile {
                content_type: "text/csv",
                file_name: "stress_assessments.csv",
                body: stress_assessments_csv(&assessments)?,
            }),
            ExportFormat::Json => {
                let dtos: Vec<_> = assessments.into_iter().map(|a| a.into_dto()).collect();

                Ok(ExportFile {
                    content_type: "application/json",
                    file_name: "stress_assessments.json",
                    body: serde_json::to_vec(&dtos)
                        .map_err(|e| AppError::InternalError(e.to_string()))?,
                })
            }
        }
    }
}

fn meditation_sessions_csv(sessions: &[MeditationSession]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record([
        "id",
        "title",
        "session_type",
        "duration_seconds",
        "started_at",
        "ended_at",
        "completed",
        "mood_before",
        "mood_after",
    ])?;

    for session in sessions {
        writer.write_record([
            session.id.to_string(),
            session.title.clone(),
            session.session_type.clone(),
            session.duration_seconds.to_string(),
            session.started_at.to_rfc3339(),
            session.ended_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
            session.completed.to_string(),
            session
                .mood_before
                .map(|m| m.to_string())
                .unwrap_or_default(),
            session
                .mood_after
                .map(|m| m.to_string())
                .unwrap_or_default(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("Failed to finish CSV export: {e}")))
}

fn stress_assessments_csv(assessments: &[StressAssessment]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record([
        "id",
        "score",
        "physical_score",
        "emotional_score",
        "behavioral_score",
        "cognitive_score",
        "triggers",
        "symptoms",
        "recorded_at",
    ])?;

    for assessment in assessments {
        writer.write_record([
            assessment.id.to_string(),
            assessment.score.to_string(),
            assessment.physical_score.to_string(),
            assessment.emotional_score.to_string(),
            assessment.behavioral_score.to_string(),
            assessment.cognitive_score.to_string(),
            assessment.triggers.join(";"),
            assessment.symptoms.join(";"),
            assessment.recorded_at.to_rfc3339(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("Failed to finish CSV export: {e}")))
}
