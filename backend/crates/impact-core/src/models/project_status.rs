use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Impact project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    /// Project is scoped but not started
    #[default]
    Planned,
    /// Project is in progress
    Ongoing,
    /// Project has finished
    Completed,
}

impl ProjectStatus {
    /// Every status the API accepts, in display order
    pub const ALL: [ProjectStatus; 3] = [Self::Planned, Self::Ongoing, Self::Completed];

    /// Convert to wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
        }
    }

    /// Message listing the accepted values, e.g. "status must be one of Planned, Ongoing, Completed"
    pub fn allowed_values_message() -> String {
        let values: Vec<&str> = Self::ALL.iter().map(ProjectStatus::as_str).collect();
        format!("status must be one of {}", values.join(", "))
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Planned" => Ok(Self::Planned),
            "Ongoing" => Ok(Self::Ongoing),
            "Completed" => Ok(Self::Completed),
            _ => Err(CoreError::InvalidProjectStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
