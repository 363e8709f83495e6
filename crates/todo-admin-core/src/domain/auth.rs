//! Authentication payloads
//!
//! Token issuance happens on the server; the client only carries what the
//! login endpoint hands back.

use serde::{Deserialize, Serialize};

/// Role derived from the server's role string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    const ADMIN: &'static str = "ROLE_ADMIN";

    pub fn from_server(role: &str) -> Self {
        if role == Self::ADMIN {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub role: String,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl LoginResponse {
    /// Value sent in the `Authorization` header
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    pub fn role(&self) -> Role {
        Role::from_server(&self.role)
    }
}
