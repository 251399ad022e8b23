//! Login form data.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Username and password as typed into the login form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A required login field was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("Please input your username!")]
    MissingUsername,

    #[error("Please input your Password!")]
    MissingPassword,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check both fields are filled in. The username is checked first.
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.username.trim().is_empty() {
            return Err(CredentialsError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(CredentialsError::MissingPassword);
        }
        Ok(())
    }
}

/// Session token: the login response, and the logout request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
}
