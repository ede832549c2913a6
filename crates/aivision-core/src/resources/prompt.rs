//! Prompt (AI analysis instruction) resource schema

use crate::types::Transport;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ManagedResource;

/// An AI analysis instruction run against camera frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Prompt {
    /// Server-assigned identifier; absent in the create draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Short prompt name shown in listings
    #[validate(length(min = 1, message = "Prompt name is required"))]
    pub name: String,

    /// The analysis instruction text sent to the vision model
    #[validate(length(min = 1, message = "Prompt text is required"))]
    pub prompt: String,

    /// Camera this prompt is pre-assigned to, if any
    pub camera_id: Option<i64>,

    /// Seconds between analysis runs
    pub timer: Option<i32>,

    /// Re-run the analysis continuously instead of once
    #[serde(rename = "loop")]
    pub loop_enabled: bool,

    /// Expected result format or last result summary
    pub result: Option<String>,

    /// Active/inactive flag
    pub status: bool,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            prompt: String::new(),
            camera_id: None,
            timer: None,
            loop_enabled: false,
            result: None,
            status: true,
        }
    }
}

impl ManagedResource for Prompt {
    const RESOURCE: &'static str = "Prompt";
    const SLUG: &'static str = "/prompts";
    const TRANSPORT: Transport = Transport::Multipart;
    const DISPLAY_NAME: &'static str = "Prompt";

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

    fn valid_prompt() -> Prompt {
        Prompt {
            name: "Loitering check".to_string(),
            prompt: "Report any person standing near the gate for over two minutes".to_string(),
            timer: Some(120),
            loop_enabled: true,
            ..Prompt::default()
        }
    }

    #[test]
    fn test_valid_prompt_passes() {
        assert!(valid_prompt().validate_record().is_ok());
    }

    #[test]
    fn test_prompt_text_is_required() {
        let prompt = Prompt {
            prompt: String::new(),
            ..valid_prompt()
        };
        let err = prompt.validate_record().unwrap_err();
        assert!(matches!(err, Error::Validation { field, .. } if field == "prompt"));
    }

    #[test]
    fn test_loop_keyword_wire_name() {
        let value = serde_json::to_value(valid_prompt()).unwrap();

        assert_eq!(value["loop"], true);
        assert!(value.get("loopEnabled").is_none());
    }

    #[test]
    fn test_decodes_loop_field() {
        let body = r#"{"id": 4, "name": "x", "prompt": "y", "loop": true, "status": false}"#;
        let prompt: Prompt = serde_json::from_str(body).unwrap();

        assert!(prompt.loop_enabled);
        assert!(!prompt.status);
        assert!(!prompt.is_active());
    }
}
