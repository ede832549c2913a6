//! Association record schemas
//!
//! Pure link records holding two foreign keys plus the status flag. Their
//! foreign keys are rendered by resolving against separately fetched active
//! reference lists, not joined server-side.

use crate::types::Transport;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ManagedResource;

/// Assignment of an analysis prompt to a camera
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraPrompt {
    /// Server-assigned identifier; absent in the create draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Camera side of the link
    #[validate(required(message = "Camera is required"))]
    pub camera_id: Option<i64>,

    /// Prompt side of the link
    #[validate(required(message = "Prompt is required"))]
    pub prompt_id: Option<i64>,

    /// Active/inactive flag
    pub status: bool,
}

impl Default for CameraPrompt {
    fn default() -> Self {
        Self {
            id: None,
            camera_id: None,
            prompt_id: None,
            status: true,
        }
    }
}

impl ManagedResource for CameraPrompt {
    const RESOURCE: &'static str = "CameraPrompt";
    const SLUG: &'static str = "/camera-prompts";
    const TRANSPORT: Transport = Transport::QueryString;
    const DISPLAY_NAME: &'static str = "Camera prompt";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn label(&self) -> String {
        format!(
            "camera {} / prompt {}",
            self.camera_id.unwrap_or_default(),
            self.prompt_id.unwrap_or_default()
        )
    }
}

/// Grant of camera access to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCamera {
    /// Server-assigned identifier; absent in the create draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// User side of the link
    #[validate(required(message = "User is required"))]
    pub user_id: Option<i64>,

    /// Camera side of the link
    #[validate(required(message = "Camera is required"))]
    pub camera_id: Option<i64>,

    /// Active/inactive flag
    pub status: bool,
}

impl Default for UserCamera {
    fn default() -> Self {
        Self {
            id: None,
            user_id: None,
            camera_id: None,
            status: true,
        }
    }
}

impl ManagedResource for UserCamera {
    const RESOURCE: &'static str = "UserCamera";
    const SLUG: &'static str = "/user-cameras";
    const TRANSPORT: Transport = Transport::QueryString;
    const DISPLAY_NAME: &'static str = "User camera";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn label(&self) -> String {
        format!(
            "user {} / camera {}",
            self.user_id.unwrap_or_default(),
            self.camera_id.unwrap_or_default()
        )
    }
}
