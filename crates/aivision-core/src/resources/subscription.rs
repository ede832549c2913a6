//! Subscription plan resource schema

use crate::types::Transport;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ManagedResource;

/// A subscription plan defining platform usage limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscription {
    /// Server-assigned identifier; absent in the create draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Plan name
    #[validate(length(min = 1, message = "Plan name is required"))]
    pub name: String,

    /// Plan description
    pub about: Option<String>,

    /// Number of cameras included
    pub camera: Option<i32>,

    /// Plan duration in days
    pub days: Option<i32>,

    /// Alert quota per day
    pub alert_per_day: Option<i32>,

    /// Prompt quota per camera
    pub prompt_per_camera: Option<i32>,

    /// Active/inactive flag
    pub status: bool,
}

impl Default for Subscription {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            about: None,
            camera: None,
            days: None,
            alert_per_day: None,
            prompt_per_camera: None,
            status: true,
        }
    }
}

impl ManagedResource for Subscription {
    const RESOURCE: &'static str = "Subscription";
    const SLUG: &'static str = "/subscriptions";
    const TRANSPORT: Transport = Transport::QueryString;
    const DISPLAY_NAME: &'static str = "Subscription plan";

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

    #[test]
    fn test_name_is_required() {
        let plan = Subscription::default();
        let err = plan.validate_record().unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "name"));
    }

    #[test]
    fn test_wire_field_names() {
        let plan = Subscription {
            name: "Starter".to_string(),
            camera: Some(4),
            days: Some(30),
            alert_per_day: Some(50),
            prompt_per_camera: Some(3),
            ..Subscription::default()
        };
        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(value["alertPerDay"], 50);
        assert_eq!(value["promptPerCamera"], 3);
        assert_eq!(value["camera"], 4);
    }
}
