mod friend_repository;
mod project_repository;
mod settings_repository;
mod social_media_repository;
mod user_repository;

pub use friend_repository::FriendRepository;
pub use project_repository::ProjectRepository;
pub use settings_repository::SettingsRepository;
pub use social_media_repository::SocialMediaRepository;
pub use user_repository::UserRepository;
