use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct GroupParticipantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupParticipantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a user to a group session
    pub async fn add(
        &self,
        group_session_id: i32,
        user_id: i32,
    ) -> Result<entity::group_participant::Model, DbErr> {
        entity::group_participant::ActiveModel {
            group_session_id: ActiveValue::Set(group_session_id),
            user_id: ActiveValue::Set(user_id),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes a user from a group session
    pub async fn remove(&self, group_session_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::GroupParticipant::delete_many()
            .filter(entity::group_participant::Column::GroupSessionId.eq(group_session_id))
            .filter(entity::group_participant::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a user is a participant of a group session
    pub async fn is_participant(&self, group_session_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::GroupParticipant::find()
            .filter(entity::group_participant::Column::GroupSessionId.eq(group_session_id))
            .filter(entity::group_participant::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the participants of a group session
    pub async fn count_by_session(&self, group_session_id: i32) -> Result<u64, DbErr> {
        entity::prelude::GroupParticipant::find()
            .filter(entity::group_participant::Column::GroupSessionId.eq(group_session_id))
            .count(self.db)
            .await
    }
}
