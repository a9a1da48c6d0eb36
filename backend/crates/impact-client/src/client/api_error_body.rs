use serde_json::Value;

/// Fallback when an error response carries neither `errors` nor `message`
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Error payload of a non-2xx response.
///
/// The server sends `{"message": ..., "errors": [...]}`, but the body is
/// untrusted: either field may be missing, mistyped, or the body may not be
/// JSON at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorBody {
    /// Non-empty list of error strings
    Errors(Vec<String>),
    /// Single message
    Message(String),
    /// Neither field usable
    Unknown,
}

impl ApiErrorBody {
    /// Decode from a parsed JSON value. `errors` wins over `message`.
    pub fn from_value(value: &Value) -> Self {
        let errors: Vec<String> = value
            .get("errors")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        if !errors.is_empty() {
            return ApiErrorBody::Errors(errors);
        }

        match value.get("message").and_then(Value::as_str) {
            Some(message) => ApiErrorBody::Message(message.to_string()),
            None => ApiErrorBody::Unknown,
        }
    }

    /// Decode from raw response bytes; anything that is not JSON is `Unknown`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        serde_json::from_slice::<Value>(bytes)
            .map(|value| Self::from_value(&value))
            .unwrap_or(ApiErrorBody::Unknown)
    }

    /// Human-readable message: errors joined with ", ", else the message
    pub fn message(&self) -> String {
        match self {
            ApiErrorBody::Errors(errors) => errors.join(", "),
            ApiErrorBody::Message(message) => message.clone(),
            ApiErrorBody::Unknown => UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }
}
