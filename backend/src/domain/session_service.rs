use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::errors::PlannerError;
use crate::domain::models::session::Session;
use crate::storage::SessionStorage;

/// Issues and resolves viewer sessions
#[derive(Clone)]
pub struct SessionService {
    sessions: Arc<dyn SessionStorage>,
}

impl SessionService {
    pub fn new(sessions: Arc<dyn SessionStorage>) -> Self {
        Self { sessions }
    }

    /// Start a new session for `user_id`
    pub async fn create_session(&self, user_id: &str) -> Result<Session, PlannerError> {
        let session = Session::issue(
            uuid::Uuid::new_v4().to_string(),
            user_id.to_string(),
            Utc::now(),
        );
        self.sessions.store_session(&session).await?;

        info!("Created session for user {}", user_id);
        Ok(session)
    }

    /// Map a session cookie value to the signed-in user's ID.
    ///
    /// Unknown and expired sessions are both `Unauthenticated`.
    pub async fn resolve_user_id(&self, session_id: &str) -> Result<String, PlannerError> {
        let session = self
            .sessions
            .get_session(session_id)
            .await?
            .ok_or(PlannerError::Unauthenticated)?;

        if session.is_expired(Utc::now()) {
            debug!("Session for user {} has expired", session.user_id);
            return Err(PlannerError::Unauthenticated);
        }

        Ok(session.user_id)
    }
}
