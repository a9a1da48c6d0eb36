use crate::{ProjectInput, ProjectStatus};

use std::str::FromStr;

use serde_json::{Map, Value};

/// Check a submitted JSON-LD document and extract the project it describes.
///
/// Every structural problem is collected rather than stopping at the first, so
/// the caller can report them all in one response. The project name in the
/// returned input is trimmed.
pub fn validate_envelope(data: &Value) -> Result<ProjectInput, Vec<String>> {
    // Anything but an object has none of the required keys
    let empty = Map::new();
    let object = data.as_object().unwrap_or(&empty);

    let mut errors = Vec::new();

    if !object.contains_key("@context") {
        errors.push("@context is required in JSON-LD".to_string());
    }
    if !object.contains_key("@type") {
        errors.push("@type is required in JSON-LD".to_string());
    }

    let project_name = match object.get("projectName") {
        None => {
            errors.push("projectName is required".to_string());
            None
        }
        Some(Value::String(name)) if !name.trim().is_empty() => Some(name.as_str()),
        Some(_) => {
            errors.push("projectName must be a non-empty string".to_string());
            None
        }
    };

    let status = match object.get("status") {
        None => {
            errors.push("status is required".to_string());
            None
        }
        Some(value) => {
            let parsed = value.as_str().and_then(|s| ProjectStatus::from_str(s).ok());
            if parsed.is_none() {
                errors.push(ProjectStatus::allowed_values_message());
            }
            parsed
        }
    };

    match (project_name, status) {
        (Some(name), Some(status)) if errors.is_empty() => {
            ProjectInput::new(name, status).map_err(|e| vec![e.message()])
        }
        _ => Err(errors),
    }
}
