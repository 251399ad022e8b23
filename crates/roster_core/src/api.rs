//! Endpoint configuration and the JSON error body shared with the server.

use serde::{Deserialize, Serialize};

use crate::member::SynagogueId;

/// API base used when none is configured at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Where the backend lives; builds every endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET endpoint for the member list, optionally scoped to a synagogue.
    pub fn members_url(&self, synagogue: Option<SynagogueId>) -> String {
        match synagogue {
            Some(id) => format!("{}/members?synagogue={}", self.base_url, id),
            None => format!("{}/members", self.base_url),
        }
    }

    pub fn synagogues_url(&self) -> String {
        format!("{}/synagogues", self.base_url)
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    pub fn logout_url(&self) -> String {
        format!("{}/logout", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Error body returned by the API on 4xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}
