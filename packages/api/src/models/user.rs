//! # User model for authenticated accounts
//!
//! Two representations of a WeightLog user:
//!
//! - [`User`] (server only) — the complete `users` row, loaded via
//!   [`sqlx::FromRow`]. Accounts are email + password only, so
//!   `password_hash` (Argon2, PHC format) is always present.
//! - [`UserInfo`] — the client-safe projection that crosses the
//!   server/client boundary. It drops the hash and the audit timestamps and
//!   converts the `Uuid` to a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email() {
        let mut info = UserInfo {
            id: "abc".into(),
            email: "sam@example.com".into(),
            name: None,
        };
        assert_eq!(info.display_name(), "sam@example.com");

        info.name = Some("Sam".into());
        assert_eq!(info.display_name(), "Sam");
    }
}
