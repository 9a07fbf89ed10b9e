use crate::{
    data::achievement::AchievementRepository,
    model::achievement::{CreateAchievementParams, UpdateAchievementParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_criteria_type;
mod update;
