use crate::{
    data::stress_assessment::StressAssessmentRepository, error::AppError,
    model::stress::CreateStressAssessmentParams,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod count_by_user;
mod create;
mod delete;
mod find_by_id;
mod find_previous;
mod get_by_user_in_range;
mod get_by_user_paginated;
