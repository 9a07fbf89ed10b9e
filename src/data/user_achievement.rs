use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::achievement::UserAchievementStatus;

pub struct UserAchievementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserAchievementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the progress row for one user and achievement, if any
    pub async fn find_by_user_and_achievement(
        &self,
        user_id: i32,
        achievement_id: i32,
    ) -> Result<Option<entity::user_achievement::Model>, DbErr> {
        entity::prelude::UserAchievement::find()
            .filter(entity::user_achievement::Column::UserId.eq(user_id))
            .filter(entity::user_achievement::Column::AchievementId.eq(achievement_id))
            .one(self.db)
            .await
    }

    /// Inserts or updates the progress row for one user and achievement
    ///
    /// `date_earned` is only written when transitioning to completed so the
    /// earned timestamp is never overwritten.
    pub async fn upsert_progress(
        &self,
        user_id: i32,
        achievement_id: i32,
        progress: i32,
        is_completed: bool,
        date_earned: Option<DateTime<Utc>>,
    ) -> Result<entity::user_achievement::Model, DbErr> {
        let existing = self
            .find_by_user_and_achievement(user_id, achievement_id)
            .await?;

        let now = Utc::now();

        match existing {
            Some(record) => {
                let already_earned = record.date_earned;

                let mut active_model: entity::user_achievement::ActiveModel = record.into();
                active_model.progress = ActiveValue::Set(progress);
                active_model.is_completed = ActiveValue::Set(is_completed);
                active_model.updated_at = ActiveValue::Set(now);

                if already_earned.is_none() {
                    if let Some(date_earned) = date_earned {
                        active_model.date_earned = ActiveValue::Set(Some(date_earned));
                    }
                }

                active_model.update(self.db).await
            }
            None => {
                entity::user_achievement::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    achievement_id: ActiveValue::Set(achievement_id),
                    progress: ActiveValue::Set(progress),
                    is_completed: ActiveValue::Set(is_completed),
                    date_earned: ActiveValue::Set(date_earned),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Gets the user's progress rows joined with their achievement definitions,
    /// ordered by achievement name
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<UserAchievementStatus>, DbErr> {
        let rows = entity::prelude::UserAchievement::find()
            .filter(entity::user_achievement::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Achievement)
            .order_by_asc(entity::user_achievement::Column::AchievementId)
            .all(self.db)
            .await?;

        let mut statuses = Vec::with_capacity(rows.len());

        for (record, achievement) in rows {
            let achievement = achievement.ok_or(DbErr::RecordNotFound(format!(
                "Achievement with id {} not found for progress row {}",
                record.achievement_id, record.id
            )))?;

            statuses.push(UserAchievementStatus::from_entities(achievement, record));
        }

        statuses.sort_by(|a, b| a.achievement.name.cmp(&b.achievement.name));

        Ok(statuses)
    }

    /// Sums the points of the user's completed achievements
    pub async fn total_points(&self, user_id: i32) -> Result<i64, DbErr> {
        let rows = entity::prelude::UserAchievement::find()
            .filter(entity::user_achievement::Column::UserId.eq(user_id))
            .filter(entity::user_achievement::Column::IsCompleted.eq(true))
            .find_also_related(entity::prelude::Achievement)
            .all(self.db)
            .await?;

        Ok(rows
            .iter()
            .filter_map(|(_, achievement)| achievement.as_ref())
            .map(|a| a.points as i64)
            .sum())
    }
}
