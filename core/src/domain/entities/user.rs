//! User entity representing a registered account in the GuideChat system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// Every user carries at least one authentication method: a bcrypt
/// password hash, a linked Google subject id, or both. `email` is stored
/// normalized (trimmed, lowercased) and is globally unique, as is
/// `google_id` when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Normalized email address (globally unique)
    pub email: String,

    /// Bcrypt password hash; absent for Google-only accounts
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,

    /// Optional display name
    pub display_name: Option<String>,

    /// Whether the account may log in
    pub is_active: bool,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// Google subject id, set once the account is linked (globally unique)
    pub google_id: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new locally-registered user (password credential, unverified)
    pub fn new_local(email: String, password_hash: String, display_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash: Some(password_hash),
            display_name,
            is_active: true,
            is_verified: false,
            google_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a new federated user (Google identity, verified, no password)
    pub fn new_federated(email: String, google_id: String, display_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash: None,
            display_name,
            is_active: true,
            is_verified: true,
            google_id: Some(google_id),
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the user's email as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Links a Google subject id to this account
    ///
    /// Linking implies the provider attested the email, so the account is
    /// also marked verified. An existing password hash stays untouched.
    pub fn link_google(&mut self, google_id: String, display_name: Option<String>) {
        self.google_id = Some(google_id);
        self.is_verified = true;
        if self.display_name.is_none() {
            self.display_name = display_name;
        }
        self.updated_at = Utc::now();
    }

    /// Deactivates the account without deleting it
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Checks if the user holds a password credential
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Checks if the user is linked to a Google identity
    pub fn has_google_identity(&self) -> bool {
        self.google_id.is_some()
    }

    /// Invariant check: a user must hold at least one authentication method
    pub fn has_auth_method(&self) -> bool {
        self.has_password() || self.has_google_identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user() {
        let user = User::new_local(
            "alice@example.com".to_string(),
            "$2b$12$hash".to_string(),
            Some("Alice".to_string()),
        );

        assert_eq!(user.email, "alice@example.com");
        assert!(user.has_password());
        assert!(!user.has_google_identity());
        assert!(user.has_auth_method());
        assert!(user.is_active);
        assert!(!user.is_verified);
    }

    #[test]
    fn test_new_federated_user() {
        let user = User::new_federated(
            "bob@example.com".to_string(),
            "google-sub-123".to_string(),
            None,
        );

        assert!(!user.has_password());
        assert!(user.has_google_identity());
        assert!(user.has_auth_method());
        assert!(user.is_verified);
    }

    #[test]
    fn test_verify() {
        let mut user = User::new_local("a@x.com".to_string(), "h".to_string(), None);

        assert!(!user.is_verified);
        user.verify();
        assert!(user.is_verified);
    }

    #[test]
    fn test_link_google_keeps_password_and_verifies() {
        let mut user = User::new_local("a@x.com".to_string(), "h".to_string(), None);

        user.link_google("google-sub-456".to_string(), Some("Al".to_string()));
        assert_eq!(user.google_id.as_deref(), Some("google-sub-456"));
        assert_eq!(user.password_hash.as_deref(), Some("h"));
        assert_eq!(user.display_name.as_deref(), Some("Al"));
        assert!(user.is_verified);
    }

    #[test]
    fn test_link_google_does_not_overwrite_display_name() {
        let mut user =
            User::new_local("a@x.com".to_string(), "h".to_string(), Some("Alice".to_string()));

        user.link_google("g".to_string(), Some("Other".to_string()));
        assert_eq!(user.display_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_deactivate() {
        let mut user = User::new_local("a@x.com".to_string(), "h".to_string(), None);

        assert!(user.is_active);
        user.deactivate();
        assert!(!user.is_active);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new_local("a@x.com".to_string(), "secret-hash".to_string(), None);
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
