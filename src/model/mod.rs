pub mod achievement;
pub mod chat;
pub mod group;
pub mod meditation;
pub mod stress;
pub mod user;
