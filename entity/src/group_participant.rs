use sea_orm::entity::prelude::*;

/// Membership of a user in a group session. The (group_session_id, user_id)
/// pair is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "group_participant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_session_id: i32,
    pub user_id: i32,
    pub joined_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group_session::Entity",
        from = "Column::GroupSessionId",
        to = "super::group_session::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GroupSession,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::group_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupSession.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
