//! Per-domain credential record.

use serde::{Deserialize, Serialize};

/// Persisted credentials and defaults for one hosting domain.
///
/// Profiles are keyed by domain in the config store. A profile with an empty
/// token is valid on disk: it marks a domain that has been discovered but not
/// yet authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub token: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub default_project: String,
}

impl Profile {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: token.into(), default_project: String::new() }
    }

    pub fn default_project(&self) -> Option<&str> {
        (!self.default_project.is_empty()).then_some(self.default_project.as_str())
    }
}
