mod achievement;
mod chat_message;
mod group_participant;
mod group_session;
mod meditation_session;
mod stress_assessment;
mod user;
mod user_achievement;
