use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Registered account.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// PHC-format Argon2id hash; never exposed to templates.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl User {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Payload required to insert a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}

impl NewUser {
    /// Build a new account payload. Emails are stored lowercased so lookups
    /// are case-insensitive.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into().to_lowercase(),
            password_hash: password_hash.into(),
            roles: vec!["user".to_string()],
        }
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }
}

/// Patch data applied when updating an existing account.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub roles: Option<Vec<String>>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateUser {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateUser {
    pub fn new() -> Self {
        Self {
            name: None,
            roles: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn roles(mut self, roles: Vec<String>) -> Self {
        self.roles = Some(roles);
        self
    }
}
