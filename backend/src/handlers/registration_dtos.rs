use serde::Serialize;
use serde_json::{Map, Value};

pub const REQUIRED_FIELDS: [&str; 3] = ["fullName", "email", "phone"];
pub const CAPTCHA_TOKEN_FIELD: &str = "captchaToken";

/// A register request split into the CAPTCHA token and the form fields.
///
/// The form fields are kept as a JSON object so the spreadsheet receives
/// whatever the wizard sent, in the wizard's own field names.
#[derive(Debug)]
pub struct RegistrationRequest {
    pub captcha_token: Option<String>,
    pub form: Map<String, Value>,
}

impl RegistrationRequest {
    /// `None` when the body is not a JSON object.
    pub fn from_json(body: Value) -> Option<Self> {
        let Value::Object(mut form) = body else {
            return None;
        };
        let captcha_token = form
            .remove(CAPTCHA_TOKEN_FIELD)
            .and_then(|v| v.as_str().map(str::to_string))
            .filter(|t| !t.trim().is_empty());
        Some(Self { captcha_token, form })
    }

    pub fn has_required_fields(&self) -> bool {
        REQUIRED_FIELDS.iter().all(|key| {
            self.form
                .get(*key)
                .and_then(Value::as_str)
                .map_or(false, |v| !v.trim().is_empty())
        })
    }

    /// The row sent to the webhook: the form fields plus a server timestamp.
    pub fn into_webhook_payload(self, timestamp: String) -> Map<String, Value> {
        let mut payload = self.form;
        payload.insert("timestamp".to_string(), Value::String(timestamp));
        payload
    }
}

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
    pub id: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_is_split_from_form() {
        let req = RegistrationRequest::from_json(json!({
            "fullName": "Ada",
            "email": "ada@example.com",
            "phone": "+91 98765 43210",
            "captchaToken": "tok",
        }))
        .unwrap();

        assert_eq!(req.captcha_token.as_deref(), Some("tok"));
        assert!(!req.form.contains_key("captchaToken"));
        assert!(req.has_required_fields());
    }

    #[test]
    fn blank_values_count_as_missing() {
        let req = RegistrationRequest::from_json(json!({
            "fullName": "  ",
            "email": "ada@example.com",
            "phone": "123",
            "captchaToken": "",
        }))
        .unwrap();

        assert!(req.captcha_token.is_none());
        assert!(!req.has_required_fields());
    }

    #[test]
    fn non_string_required_field_is_missing() {
        let req = RegistrationRequest::from_json(json!({
            "fullName": "Ada",
            "email": "ada@example.com",
            "phone": 123,
        }))
        .unwrap();
        assert!(!req.has_required_fields());
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert!(RegistrationRequest::from_json(json!(["fullName"])).is_none());
        assert!(RegistrationRequest::from_json(json!("hello")).is_none());
    }

    #[test]
    fn payload_gets_timestamp() {
        let req = RegistrationRequest::from_json(json!({"fullName": "Ada", "teamSize": 3})).unwrap();
        let payload = req.into_webhook_payload("2025-12-01T10:00:00.000Z".to_string());

        assert_eq!(payload.get("timestamp"), Some(&json!("2025-12-01T10:00:00.000Z")));
        assert_eq!(payload.get("teamSize"), Some(&json!(3)));
    }
}
