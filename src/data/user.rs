use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::user::{RegisterUserParams, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account with a zero login count
    pub async fn create(&self, params: RegisterUserParams) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            display_name: ActiveValue::Set(params.display_name),
            password_hash: ActiveValue::Set(params.password_hash),
            login_count: ActiveValue::Set(0),
            last_login_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    /// Gets a user by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    /// Gets a user by email address
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Increments the user's login count and stamps the login time
    pub async fn record_login(&self, id: i32) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                id
            )))?;

        let login_count = user.login_count + 1;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.login_count = ActiveValue::Set(login_count);
        active_model.last_login_at = ActiveValue::Set(Some(Utc::now()));

        let updated = active_model.update(self.db).await?;

        Ok(User::from_entity(updated))
    }
}
