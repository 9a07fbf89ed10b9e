use crate::{data::chat_message::ChatMessageRepository, model::chat::CreateChatMessageParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_session_paginated;
