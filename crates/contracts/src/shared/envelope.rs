use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Canonical response body of the admin API: `{ "data": ..., "total"?, "message"? }`.
///
/// Bare arrays and alternative wrappers (`items`, `result`) are not accepted;
/// they fail to deserialize because `data` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    /// Parse a response body into the envelope.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extract the server message from a raw body, if it has one.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_parse_canonical_envelope() {
        let env = ApiEnvelope::<Vec<Value>>::parse(r#"{"data":[{"_id":"a"}],"total":1}"#).unwrap();
        assert_eq!(env.data.len(), 1);
        assert_eq!(env.total, Some(1));
        assert_eq!(env.message, None);
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(ApiEnvelope::<Vec<Value>>::parse(r#"[{"_id":"a"}]"#).is_err());
        assert!(ApiEnvelope::<Vec<Value>>::parse(r#"{"items":[]}"#).is_err());
        assert!(ApiEnvelope::<Vec<Value>>::parse(r#"{"result":[]}"#).is_err());
    }

    #[test]
    fn test_unit_payload_accepts_null() {
        let env = ApiEnvelope::<()>::parse(r#"{"data":null,"message":"ok"}"#).unwrap();
        assert_eq!(env.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            ApiErrorBody::message_from(r#"{"message":"Utilisateur introuvable"}"#),
            Some("Utilisateur introuvable".to_string())
        );
        assert_eq!(ApiErrorBody::message_from(r#"{"message":"  "}"#), None);
        assert_eq!(ApiErrorBody::message_from("<html>502</html>"), None);
    }
}
