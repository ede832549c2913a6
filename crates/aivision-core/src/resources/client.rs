//! Client (alert recipient) resource schema

use crate::types::Transport;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ManagedResource;

/// An alert recipient tied to a camera feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    /// Server-assigned identifier; absent in the create draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Recipient name
    #[validate(length(min = 1, message = "Client name is required"))]
    pub name: String,

    /// Notification email
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    /// Notification mobile number
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: String,

    /// Camera this client receives alerts for; picked from active cameras
    #[validate(required(message = "Camera is required"))]
    pub camera_id: Option<i64>,

    /// Deliver alerts by email
    pub send_email: bool,

    /// Deliver alerts by SMS
    #[serde(rename = "sendSMS")]
    pub send_sms: bool,

    /// Deliver alerts by WhatsApp
    pub send_whatsapp: bool,

    /// Active/inactive flag
    pub status: bool,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            mobile: String::new(),
            camera_id: None,
            send_email: true,
            send_sms: false,
            send_whatsapp: false,
            status: true,
        }
    }
}

impl ManagedResource for Client {
    const RESOURCE: &'static str = "Clients";
    const SLUG: &'static str = "/clients";
    const TRANSPORT: Transport = Transport::Multipart;
    const DISPLAY_NAME: &'static str = "Client";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn valid_client() -> Client {
        Client {
            name: "Night Watch Desk".to_string(),
            email: "alerts@example.com".to_string(),
            mobile: "9000000001".to_string(),
            camera_id: Some(3),
            ..Client::default()
        }
    }

    #[test]
    fn test_valid_client_passes() {
        assert!(valid_client().validate_record().is_ok());
    }

    #[test]
    fn test_camera_is_required() {
        let client = Client {
            camera_id: None,
            ..valid_client()
        };
        let err = client.validate_record().unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "camera_id"));
    }

    #[test]
    fn test_sms_wire_name_is_uppercase() {
        let value = serde_json::to_value(valid_client()).unwrap();

        assert!(value.get("sendSMS").is_some());
        assert!(value.get("sendSms").is_none());
        assert!(value.get("sendWhatsapp").is_some());
        assert_eq!(value["cameraId"], 3);
    }
}
