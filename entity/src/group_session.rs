use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "group_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub host_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: DateTimeUtc,
    pub duration_minutes: i32,
    pub max_participants: i32,
    /// One of `scheduled`, `in_progress`, `completed`, `cancelled`.
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::HostId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Host,
    #[sea_orm(has_many = "super::group_participant::Entity")]
    GroupParticipant,
    #[sea_orm(has_many = "super::chat_message::Entity")]
    ChatMessage,
}

impl Related<super::group_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupParticipant.def()
    }
}

impl Related<super::chat_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatMessage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
