//! User entity representing a registered account in LexVault.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique across all users
    pub email: String,

    /// Bcrypt hash of the password; `None` for accounts created through
    /// federated login
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,

    /// Name shown in the UI, derived from the email unless the identity
    /// provider supplied one
    pub display_name: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new user with a password hash (credential signup)
    pub fn with_password(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let email = email.into();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            display_name: display_name_from_email(&email),
            email,
            password_hash: Some(password_hash.into()),
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Creates a new user linked to an external identity provider
    pub fn federated(email: impl Into<String>, name: Option<String>) -> Self {
        let email = email.into();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            display_name: name.unwrap_or_else(|| display_name_from_email(&email)),
            email,
            password_hash: None,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Whether the account can be used for credential login
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }
}

/// Derives a display name from the local part of an email address
fn display_name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}
