use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::achievement::{Achievement, CreateAchievementParams, UpdateAchievementParams};

pub struct AchievementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AchievementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new achievement definition
    pub async fn create(&self, params: CreateAchievementParams) -> Result<Achievement, DbErr> {
        let achievement = entity::achievement::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            category: ActiveValue::Set(params.category),
            criteria_type: ActiveValue::Set(params.criteria_type),
            criteria_value: ActiveValue::Set(params.criteria_value),
            icon: ActiveValue::Set(params.icon),
            points: ActiveValue::Set(params.points),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Achievement::from_entity(achievement))
    }

    /// Gets an achievement definition by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Achievement>, DbErr> {
        let achievement = entity::prelude::Achievement::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(achievement.map(Achievement::from_entity))
    }

    /// Gets all achievement definitions, ordered by name
    pub async fn get_all(&self) -> Result<Vec<Achievement>, DbErr> {
        let achievements = entity::prelude::Achievement::find()
            .order_by_asc(entity::achievement::Column::Name)
            .all(self.db)
            .await?;

        Ok(achievements
            .into_iter()
            .map(Achievement::from_entity)
            .collect())
    }

    /// Gets all achievement definitions fed by the given activity type
    pub async fn get_by_criteria_type(
        &self,
        criteria_type: &str,
    ) -> Result<Vec<Achievement>, DbErr> {
        let achievements = entity::prelude::Achievement::find()
            .filter(entity::achievement::Column::CriteriaType.eq(criteria_type))
            .all(self.db)
            .await?;

        Ok(achievements
            .into_iter()
            .map(Achievement::from_entity)
            .collect())
    }

    /// Updates an achievement definition, leaving `None` fields unchanged
    pub async fn update(&self, params: UpdateAchievementParams) -> Result<Achievement, DbErr> {
        let achievement = entity::prelude::Achievement::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Achievement with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::achievement::ActiveModel = achievement.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }

        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }

        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(category);
        }

        if let Some(criteria_type) = params.criteria_type {
            active_model.criteria_type = ActiveValue::Set(criteria_type);
        }

        if let Some(criteria_value) = params.criteria_value {
            active_model.criteria_value = ActiveValue::Set(criteria_value);
        }

        if let Some(icon) = params.icon {
            active_model.icon = ActiveValue::Set(icon);
        }

        if let Some(points) = params.points {
            active_model.points = ActiveValue::Set(points);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Achievement::from_entity(updated))
    }

    /// Deletes an achievement definition and any progress rows referencing it
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::UserAchievement::delete_many()
            .filter(entity::user_achievement::Column::AchievementId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Achievement::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
