use crate::{
    data::group_session::GroupSessionRepository,
    error::AppError,
    model::group::{CreateGroupSessionParams, GroupSessionStatus},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_upcoming_paginated;
mod update_status;
