use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub login_count: i32,
    pub last_login_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meditation_session::Entity")]
    MeditationSession,
    #[sea_orm(has_many = "super::stress_assessment::Entity")]
    StressAssessment,
    #[sea_orm(has_many = "super::user_achievement::Entity")]
    UserAchievement,
    #[sea_orm(has_many = "super::group_participant::Entity")]
    GroupParticipant,
    #[sea_orm(has_many = "super::chat_message::Entity")]
    ChatMessage,
}

impl Related<super::meditation_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeditationSession.def()
    }
}

impl Related<super::stress_assessment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StressAssessment.def()
    }
}

impl Related<super::user_achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAchievement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
