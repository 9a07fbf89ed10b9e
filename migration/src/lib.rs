pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_achievement_table;
mod m20260801_000003_create_user_achievement_table;
mod m20260801_000004_create_meditation_session_table;
mod m20260801_000005_create_stress_assessment_table;
mod m20260801_000006_create_group_session_table;
mod m20260801_000007_create_group_participant_table;
mod m20260801_000008_create_chat_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_achievement_table::Migration),
            Box::new(m20260801_000003_create_user_achievement_table::Migration),
            Box::new(m20260801_000004_create_meditation_session_table::Migration),
            Box::new(m20260801_000005_create_stress_assessment_table::Migration),
            Box::new(m20260801_000006_create_group_session_table::Migration),
            Box::new(m20260801_000007_create_group_participant_table::Migration),
            Box::new(m20260801_000008_create_chat_message_table::Migration),
        ]
    }
}
