//! Failure kinds surfaced by the planner domain services.

/// Errors returned by planner and session operations
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// The requested page owner does not exist
    #[error("No user with the username \"{username}\" exists")]
    NotFound { username: String },
    /// The request carries no valid session
    #[error("Authentication required")]
    Unauthenticated,
    /// The data directory could not be read or written
    #[error("Storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

impl PlannerError {
    pub fn not_found(username: impl Into<String>) -> Self {
        PlannerError::NotFound {
            username: username.into(),
        }
    }

    /// Stable machine-readable code used in error bodies
    pub fn code(&self) -> &'static str {
        match self {
            PlannerError::NotFound { .. } => "NOT_FOUND",
            PlannerError::Unauthenticated => "UNAUTHENTICATED",
            PlannerError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_references_username() {
        let error = PlannerError::not_found("ghost");
        assert_eq!(error.to_string(), "No user with the username \"ghost\" exists");
        assert_eq!(error.code(), "NOT_FOUND");
    }

    #[test]
    fn test_storage_error_wraps_anyhow() {
        let error: PlannerError = anyhow::anyhow!("disk full").into();
        assert!(error.to_string().contains("disk full"));
        assert_eq!(error.code(), "STORAGE_ERROR");
    }
}
