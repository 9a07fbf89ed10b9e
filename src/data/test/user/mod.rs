use crate::{data::user::UserRepository, model::user::RegisterUserParams};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod find_by_email;
mod find_by_id;
mod record_login;
