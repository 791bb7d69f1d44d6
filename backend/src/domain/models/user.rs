use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest username accepted before it is mapped onto a directory name
pub const MAX_USERNAME_LEN: usize = 40;

/// Domain model for a planner page owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Generate a unique ID for a new user
    pub fn generate_id() -> String {
        format!("user::{}", uuid::Uuid::new_v4())
    }

    /// Lowercase and validate a username so it is safe to use as a directory name.
    ///
    /// Returns `None` for anything outside `[a-z0-9_]{1,40}`.
    pub fn normalize_username(username: &str) -> Option<String> {
        let normalized = username.trim().to_lowercase();
        let valid = !normalized.is_empty()
            && normalized.len() <= MAX_USERNAME_LEN
            && normalized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        valid.then_some(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(User::normalize_username("alice"), Some("alice".to_string()));
        assert_eq!(User::normalize_username("  Alice_2 "), Some("alice_2".to_string()));
        assert_eq!(User::normalize_username(""), None);
        assert_eq!(User::normalize_username("../etc"), None);
        assert_eq!(User::normalize_username("bob smith"), None);
        assert_eq!(User::normalize_username(&"a".repeat(41)), None);
    }
}
