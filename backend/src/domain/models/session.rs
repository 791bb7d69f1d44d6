use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a freshly issued session stays valid
pub const SESSION_LIFETIME_DAYS: i64 = 30;

/// A server-side login session binding a cookie value to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub expiration_date: DateTime<Utc>,
}

impl Session {
    /// Start a session for `user_id` that expires after the default lifetime
    pub fn issue(id: String, user_id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            expiration_date: now + Duration::days(SESSION_LIFETIME_DAYS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration_date <= now
    }
}
