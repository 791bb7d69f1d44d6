//! Test utilities for repository, service and API tests.
//!
//! `TestEnvironment` owns a temporary data directory that is removed when the
//! environment is dropped, even if the test panics.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::activity_repository::ActivityRepository;
use super::connection::CsvConnection;
use super::session_repository::SessionRepository;
use super::user_repository::UserRepository;
use crate::domain::models::activity::Activity;
use crate::domain::models::session::Session;
use crate::domain::models::user::User;
use crate::storage::{ActivityStorage, SessionStorage, UserStorage};

pub struct TestEnvironment {
    _temp_dir: TempDir,
    pub connection: CsvConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    pub async fn seed_user(&self, id: &str, username: &str, name: Option<&str>) -> Result<User> {
        let user = User {
            id: id.to_string(),
            username: username.to_string(),
            name: name.map(str::to_string),
            image_id: None,
            created_at: Utc::now(),
        };
        UserRepository::new(self.connection.clone()).store_user(&user).await?;
        Ok(user)
    }

    pub async fn seed_activity(&self, owner_id: &str, id: &str, title: &str, tags: &str) -> Result<Activity> {
        let activity = Activity {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            tags: Activity::parse_tags(tags),
            created_at: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap_or_default(),
        };
        ActivityRepository::new(self.connection.clone())
            .store_activity(&activity)
            .await?;
        Ok(activity)
    }

    pub async fn seed_session(&self, session_id: &str, user_id: &str) -> Result<Session> {
        let session = Session::issue(session_id.to_string(), user_id.to_string(), Utc::now());
        SessionRepository::new(self.connection.clone())
            .store_session(&session)
            .await?;
        Ok(session)
    }

    /// Owner "alice" with activities Run (id "1") and Yoga (id "2"),
    /// plus a viewer session `alice-session`
    pub async fn seed_alice(&self) -> Result<User> {
        let alice = self.seed_user("user::1", "alice", Some("Alice")).await?;
        self.seed_activity(&alice.id, "1", "Run", "Health;Outdoor").await?;
        self.seed_activity(&alice.id, "2", "Yoga", "Health").await?;
        self.seed_session("alice-session", &alice.id).await?;
        Ok(alice)
    }
}
