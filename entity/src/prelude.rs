pub use super::achievement::Entity as Achievement;
pub use super::chat_message::Entity as ChatMessage;
pub use super::group_participant::Entity as GroupParticipant;
pub use super::group_session::Entity as GroupSession;
pub use super::meditation_session::Entity as MeditationSession;
pub use super::stress_assessment::Entity as StressAssessment;
pub use super::user::Entity as User;
pub use super::user_achievement::Entity as UserAchievement;
