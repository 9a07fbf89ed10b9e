use crate::data::group_participant::GroupParticipantRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod count_by_session;
mod is_participant;
