use crate::data::user_achievement::UserAchievementRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_user_and_achievement;
mod get_by_user;
mod total_points;
mod upsert_progress;
