//! Managed resource schemas
//!
//! Each admin screen manages one resource type against the shared
//! `{Resource}/manage` endpoint. Resources share three conventions: a
//! server-assigned integer `id` (absent in the create draft), a boolean
//! `status` flag (flipped, never deleted), and camelCase wire field names.
//! Validation runs once at the submit boundary, before any request goes out.

mod associations;
mod camera;
mod client;
mod prompt;
mod subscription;
mod user;

pub use associations::{CameraPrompt, UserCamera};
pub use camera::Camera;
pub use client::Client;
pub use prompt::Prompt;
pub use subscription::Subscription;
pub use user::User;

use crate::error::{Error, Result};
use crate::types::Transport;
use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// A resource manageable through the shared CRUD endpoint
pub trait ManagedResource:
    Clone + std::fmt::Debug + Default + PartialEq + Serialize + DeserializeOwned + Validate + Send + Sync + 'static
{
    /// Endpoint path segment, e.g. `Camera` in `POST {base}/Camera/manage`
    const RESOURCE: &'static str;

    /// Page path sent as the `Slug` audit field
    const SLUG: &'static str;

    /// How this resource's fields travel to the backend
    const TRANSPORT: Transport;

    /// Human name used in notices and empty states
    const DISPLAY_NAME: &'static str;

    /// Server-assigned identity; `None` for a create draft
    fn id(&self) -> Option<i64>;

    /// Soft status flag driving the Active/Inactive badge
    fn is_active(&self) -> bool;

    /// Short display label, used when this resource feeds a picker
    fn label(&self) -> String;

    /// Full client-side validation, run before a mutation request is issued
    ///
    /// The default implementation runs the declarative `validator` rules;
    /// resources with conditional rules override and extend it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    fn validate_record(&self) -> Result<()> {
        self.validate().map_err(first_validation_error)
    }
}

/// Collapse a `validator` error set into the workspace error type,
/// keeping the first field and its message
fn first_validation_error(errors: ValidationErrors) -> Error {
    for (field, field_errors) in errors.field_errors() {
        if let Some(first) = field_errors.first() {
            let message = first
                .message
                .as_ref()
                .map_or_else(|| first.code.to_string(), ToString::to_string);
            return Error::validation(field.to_string(), message);
        }
    }
    Error::validation("record", "Invalid input")
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_first_validation_error_uses_message() {
        let camera = Camera {
            name: String::new(),
            rtsp_link: "rtsp://10.0.0.1/stream".to_string(),
            ..Camera::default()
        };

        let err = camera.validate_record().unwrap_err();
        match err {
            Error::Validation { field, message } => {
                assert_eq!(field, "name");
                assert!(!message.is_empty());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_transport_constants_follow_backend_contract() {
        assert_eq!(Camera::TRANSPORT, Transport::Multipart);
        assert_eq!(User::TRANSPORT, Transport::Multipart);
        assert_eq!(Client::TRANSPORT, Transport::Multipart);
        assert_eq!(Prompt::TRANSPORT, Transport::Multipart);
        assert_eq!(CameraPrompt::TRANSPORT, Transport::QueryString);
        assert_eq!(UserCamera::TRANSPORT, Transport::QueryString);
        assert_eq!(Subscription::TRANSPORT, Transport::QueryString);
    }

    #[test]
    fn test_resource_segments() {
        assert_eq!(Camera::RESOURCE, "Camera");
        // The backend names this one endpoint in the plural.
        assert_eq!(Client::RESOURCE, "Clients");
        assert_eq!(CameraPrompt::RESOURCE, "CameraPrompt");
        assert_eq!(Subscription::RESOURCE, "Subscription");
    }
}
