use crate::{
    data::meditation_session::MeditationSessionRepository,
    model::meditation::{CreateMeditationSessionParams, UpdateMeditationSessionParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod complete;
mod completed_started_at_by_user;
mod count_completed_by_user;
mod create;
mod delete;
mod get_by_user_in_range;
mod get_by_user_paginated;
mod total_completed_seconds_by_user;
mod update;
