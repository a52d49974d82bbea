use serde::{Deserialize, Serialize};

/// The single admin account. Stored and compared as-is; it never crosses the
/// wire, so it carries no serde derives — login responses use [`PublicUser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// Wire projection of [`User`] for login responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Rotating status lines for the home page typing animation, keyed by locale.
/// Defaults on both fields let validation report a missing locale precisely
/// instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatusTexts {
    #[serde(default)]
    pub id: Vec<String>,
    #[serde(default)]
    pub en: Vec<String>,
}

/// Singleton profile settings; exactly one row exists and its id is always 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: i64,
    pub profile_image_url: String,
    pub profile_name: String,
    pub profile_age: i32,
    pub whatsapp_url: String,
    /// Absent is serialized as an explicit `null`.
    pub background_audio_url: Option<String>,
    pub status_texts: StatusTexts,
}

/// A friend card on the public page. `order` is the display rank presented to
/// clients; the store derives it from the persisted ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub order: i64,
}

/// A showcased project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub project_url: String,
    pub order: i64,
}

/// A social media link. `icon_class` names the glyph the frontend renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub url: String,
    pub icon_class: String,
    pub order: i64,
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
