//! Request bodies and their validated forms.
//!
//! Every create/update body deserializes with all fields optional so that
//! validation can report the full set of offending fields in one pass.
//! Server-managed fields (`id`, `order`) are not representable in any request
//! type; unknown JSON keys are ignored by serde and therefore stripped.

use serde::{Deserialize, Serialize};

use crate::models::{Friend, Project, PublicUser, SocialMedia, StatusTexts};
use crate::validate::{reject_empty, require_positive, require_string, ValidationError};

// ===== Auth =====

/// Body of POST /api/auth/login. Both fields stay optional at the serde level
/// so an incomplete body answers 400 instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: PublicUser,
}

// ===== Settings =====

/// Body of PUT /api/settings: a full replacement, not a merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub profile_name: Option<String>,
    #[serde(default)]
    pub profile_age: Option<i32>,
    #[serde(default)]
    pub whatsapp_url: Option<String>,
    #[serde(default)]
    pub background_audio_url: Option<String>,
    #[serde(default)]
    pub status_texts: Option<StatusTexts>,
}

/// A validated settings replacement; the singleton id is fixed by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSettings {
    pub profile_image_url: String,
    pub profile_name: String,
    pub profile_age: i32,
    pub whatsapp_url: String,
    pub background_audio_url: Option<String>,
    pub status_texts: StatusTexts,
}

impl UpdateSettingsRequest {
    pub fn validate(self) -> Result<NewSettings, ValidationError> {
        let mut errors = Vec::new();
        let profile_image_url =
            require_string("profileImageUrl", self.profile_image_url, &mut errors);
        let profile_name = require_string("profileName", self.profile_name, &mut errors);
        let profile_age = require_positive("profileAge", self.profile_age, &mut errors);
        let whatsapp_url = require_string("whatsappUrl", self.whatsapp_url, &mut errors);
        // An empty audio URL behaves exactly like an omitted one.
        let background_audio_url = self.background_audio_url.filter(|s| !s.is_empty());
        let status_texts = match self.status_texts {
            Some(texts) => {
                if texts.id.is_empty() {
                    errors.push("statusTexts.id".to_string());
                }
                if texts.en.is_empty() {
                    errors.push("statusTexts.en".to_string());
                }
                texts
            }
            None => {
                errors.push("statusTexts".to_string());
                StatusTexts::default()
            }
        };
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }
        Ok(NewSettings {
            profile_image_url,
            profile_name,
            profile_age,
            whatsapp_url,
            background_audio_url,
            status_texts,
        })
    }
}

// ===== Friends =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFriendRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A friend card accepted for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFriend {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl CreateFriendRequest {
    pub fn validate(self) -> Result<NewFriend, ValidationError> {
        let mut errors = Vec::new();
        let name = require_string("name", self.name, &mut errors);
        let description = require_string("description", self.description, &mut errors);
        let image_url = require_string("imageUrl", self.image_url, &mut errors);
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }
        Ok(NewFriend {
            name,
            description,
            image_url,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFriendRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A validated partial update. An all-`None` patch is a legal no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateFriendRequest {
    pub fn validate(self) -> Result<FriendPatch, ValidationError> {
        let mut errors = Vec::new();
        reject_empty("name", &self.name, &mut errors);
        reject_empty("description", &self.description, &mut errors);
        reject_empty("imageUrl", &self.image_url, &mut errors);
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }
        Ok(FriendPatch {
            name: self.name,
            description: self.description,
            image_url: self.image_url,
        })
    }
}

impl FriendPatch {
    /// Merge onto an existing record: present fields overwrite, absent fields
    /// keep their prior values. `id` and `order` are not representable here
    /// and therefore never change.
    pub fn apply(&self, friend: &mut Friend) {
        if let Some(name) = &self.name {
            friend.name = name.clone();
        }
        if let Some(description) = &self.description {
            friend.description = description.clone();
        }
        if let Some(image_url) = &self.image_url {
            friend.image_url = image_url.clone();
        }
    }
}

// ===== Projects =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub project_url: String,
}

impl CreateProjectRequest {
    pub fn validate(self) -> Result<NewProject, ValidationError> {
        let mut errors = Vec::new();
        let name = require_string("name", self.name, &mut errors);
        let description = require_string("description", self.description, &mut errors);
        let image_url = require_string("imageUrl", self.image_url, &mut errors);
        let project_url = require_string("projectUrl", self.project_url, &mut errors);
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }
        Ok(NewProject {
            name,
            description,
            image_url,
            project_url,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
}

impl UpdateProjectRequest {
    pub fn validate(self) -> Result<ProjectPatch, ValidationError> {
        let mut errors = Vec::new();
        reject_empty("name", &self.name, &mut errors);
        reject_empty("description", &self.description, &mut errors);
        reject_empty("imageUrl", &self.image_url, &mut errors);
        reject_empty("projectUrl", &self.project_url, &mut errors);
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }
        Ok(ProjectPatch {
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            project_url: self.project_url,
        })
    }
}

impl ProjectPatch {
    pub fn apply(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(image_url) = &self.image_url {
            project.image_url = image_url.clone();
        }
        if let Some(project_url) = &self.project_url {
            project.project_url = project_url.clone();
        }
    }
}

// ===== Social media =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSocialMediaRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSocialMedia {
    pub name: String,
    pub username: String,
    pub url: String,
    pub icon_class: String,
}

impl CreateSocialMediaRequest {
    pub fn validate(self) -> Result<NewSocialMedia, ValidationError> {
        let mut errors = Vec::new();
        let name = require_string("name", self.name, &mut errors);
        let username = require_string("username", self.username, &mut errors);
        let url = require_string("url", self.url, &mut errors);
        let icon_class = require_string("iconClass", self.icon_class, &mut errors);
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }
        Ok(NewSocialMedia {
            name,
            username,
            url,
            icon_class,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSocialMediaRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialMediaPatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
    pub icon_class: Option<String>,
}

impl UpdateSocialMediaRequest {
    pub fn validate(self) -> Result<SocialMediaPatch, ValidationError> {
        let mut errors = Vec::new();
        reject_empty("name", &self.name, &mut errors);
        reject_empty("username", &self.username, &mut errors);
        reject_empty("url", &self.url, &mut errors);
        reject_empty("iconClass", &self.icon_class, &mut errors);
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }
        Ok(SocialMediaPatch {
            name: self.name,
            username: self.username,
            url: self.url,
            icon_class: self.icon_class,
        })
    }
}

impl SocialMediaPatch {
    pub fn apply(&self, social: &mut SocialMedia) {
        if let Some(name) = &self.name {
            social.name = name.clone();
        }
        if let Some(username) = &self.username {
            social.username = username.clone();
        }
        if let Some(url) = &self.url {
            social.url = url.clone();
        }
        if let Some(icon_class) = &self.icon_class {
            social.icon_class = icon_class.clone();
        }
    }
}
