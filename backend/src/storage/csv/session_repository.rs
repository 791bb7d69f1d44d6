use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs;
use tracing::info;

use super::connection::CsvConnection;
use crate::domain::models::session::Session;
use crate::storage::SessionStorage;

/// Session repository backed by a single `sessions.yaml` list
#[derive(Clone)]
pub struct SessionRepository {
    connection: CsvConnection,
}

impl SessionRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_sessions(&self) -> Result<Vec<Session>> {
        let path = self.connection.sessions_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let yaml_content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if yaml_content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[async_trait]
impl SessionStorage for SessionRepository {
    async fn store_session(&self, session: &Session) -> Result<()> {
        let mut sessions = self.read_sessions()?;
        sessions.retain(|existing| existing.id != session.id);
        sessions.push(session.clone());

        let yaml_content = serde_yaml::to_string(&sessions)?;
        CsvConnection::write_atomically(&self.connection.sessions_path(), yaml_content.as_bytes())?;

        info!("Stored session for user {}", session.user_id);
        Ok(())
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<Session>> {
        Ok(self
            .read_sessions()?
            .into_iter()
            .find(|session| session.id == session_id))
    }
}
