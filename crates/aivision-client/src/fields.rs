//! Record-to-form-field flattening
//!
//! Mutation requests carry the full resource field set as flat string
//! fields, whichever transport carries them. Nulls are omitted entirely,
//! booleans travel as `true`/`false`, and numbers in their decimal form —
//! the same shape the original form submission produced.

use aivision_core::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Flatten a record into wire form fields
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the record cannot be serialized, or
/// [`Error::Configuration`] if it does not serialize to a JSON object.
pub fn wire_fields<T: Serialize>(record: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(record)?;
    let Value::Object(map) = value else {
        return Err(Error::configuration(
            "record did not serialize to an object",
        ));
    };

    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::String(s) => fields.push((key, s)),
            Value::Bool(b) => fields.push((key, b.to_string())),
            Value::Number(n) => fields.push((key, n.to_string())),
            other => fields.push((key, other.to_string())),
        }
    }
    Ok(fields)
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use aivision_core::resources::{Camera, Client};
    use pretty_assertions::assert_eq;

    fn field<'a>(fields: &'a [(String, String)], key: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_strings_and_numbers_flatten() {
        let camera = Camera {
            id: Some(9),
            name: "Gate".to_string(),
            rtsp_link: "rtsp://cam/1".to_string(),
            latitude: Some(18.52),
            ..Camera::default()
        };

        let fields = wire_fields(&camera).unwrap();

        assert_eq!(field(&fields, "id"), Some("9"));
        assert_eq!(field(&fields, "name"), Some("Gate"));
        assert_eq!(field(&fields, "rtspLink"), Some("rtsp://cam/1"));
        assert_eq!(field(&fields, "latitude"), Some("18.52"));
    }

    #[test]
    fn test_nulls_are_omitted() {
        let camera = Camera::default();
        let fields = wire_fields(&camera).unwrap();

        assert_eq!(field(&fields, "id"), None);
        assert_eq!(field(&fields, "about"), None);
        assert_eq!(field(&fields, "city"), None);
    }

    #[test]
    fn test_booleans_travel_as_words() {
        let client = Client {
            name: "Ops".to_string(),
            email: "ops@example.com".to_string(),
            mobile: "1".to_string(),
            camera_id: Some(2),
            send_sms: true,
            ..Client::default()
        };

        let fields = wire_fields(&client).unwrap();

        assert_eq!(field(&fields, "sendSMS"), Some("true"));
        assert_eq!(field(&fields, "sendWhatsapp"), Some("false"));
        assert_eq!(field(&fields, "status"), Some("true"));
    }
}
