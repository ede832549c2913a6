//! User resource schema

use crate::error::{Error, Result};
use crate::types::Transport;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ManagedResource;

/// A platform operator account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Server-assigned identifier; absent in the create draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Full display name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Login name
    #[validate(length(min = 1, message = "User name is required"))]
    pub user_name: String,

    /// Contact email
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    /// Contact mobile number
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: String,

    /// Password; required when creating, empty leaves it unchanged on edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Role name, e.g. `admin` or `operator`
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,

    /// Address kind, e.g. `home` or `office`
    pub address_type: Option<String>,

    /// Street address
    pub street: Option<String>,

    /// Nearby landmark
    pub landmark: Option<String>,

    /// City
    pub city: Option<String>,

    /// State
    pub state: Option<String>,

    /// Postal code
    pub pin_code: Option<i64>,

    /// Active/inactive flag
    pub status: bool,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            user_name: String::new(),
            email: String::new(),
            mobile: String::new(),
            password: None,
            role: String::new(),
            address_type: None,
            street: None,
            landmark: None,
            city: None,
            state: None,
            pin_code: None,
            status: true,
        }
    }
}

impl ManagedResource for User {
    const RESOURCE: &'static str = "User";
    const SLUG: &'static str = "/users";
    const TRANSPORT: Transport = Transport::Multipart;
    const DISPLAY_NAME: &'static str = "User";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn validate_record(&self) -> Result<()> {
        self.validate().map_err(super::first_validation_error)?;
        // Password is only mandatory for a new account.
        if self.id.is_none() && self.password.as_deref().unwrap_or("").is_empty() {
            return Err(Error::validation("password", "Password is required"));
        }
        Ok(())
    }
}
