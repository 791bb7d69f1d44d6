use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::planner::{LoadPlannerQuery, LoadPlannerResult};
use crate::domain::errors::PlannerError;
use crate::domain::models::activity::Activity;
use crate::domain::models::user::User;
use crate::storage::{ActivityStorage, UserStorage};

/// Service backing the activity planner page: owner lookup plus catalog listing
#[derive(Clone)]
pub struct PlannerService {
    users: Arc<dyn UserStorage>,
    activities: Arc<dyn ActivityStorage>,
}

impl PlannerService {
    pub fn new(users: Arc<dyn UserStorage>, activities: Arc<dyn ActivityStorage>) -> Self {
        Self { users, activities }
    }

    /// Find the page owner by username
    pub async fn find_owner(&self, username: &str) -> Result<User, PlannerError> {
        match self.users.get_user_by_username(username).await? {
            Some(owner) => Ok(owner),
            None => {
                warn!("Planner owner not found: {}", username);
                Err(PlannerError::not_found(username))
            }
        }
    }

    /// List an owner's activities exactly as the catalog stores them
    pub async fn list_activities(&self, owner_id: &str) -> Result<Vec<Activity>, PlannerError> {
        Ok(self.activities.list_activities(owner_id).await?)
    }

    /// Resolve the owner and their catalog for one planner page view
    pub async fn load_planner(&self, query: LoadPlannerQuery) -> Result<LoadPlannerResult, PlannerError> {
        info!(
            "Loading planner for {} (viewer {})",
            query.username, query.viewer_id
        );

        let owner = self.find_owner(&query.username).await?;
        let activities = self.list_activities(&owner.id).await?;

        info!(
            "Loaded planner for {} with {} activities",
            owner.username,
            activities.len()
        );

        Ok(LoadPlannerResult { owner, activities })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use crate::storage::{ActivityRepository, UserRepository};

    fn service_for(env: &TestEnvironment) -> PlannerService {
        PlannerService::new(
            Arc::new(UserRepository::new(env.connection.clone())),
            Arc::new(ActivityRepository::new(env.connection.clone())),
        )
    }

    fn query(username: &str) -> LoadPlannerQuery {
        LoadPlannerQuery {
            username: username.to_string(),
            viewer_id: "user::viewer".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_planner_for_existing_owner() {
        let env = TestEnvironment::new().await.unwrap();
        env.seed_alice().await.unwrap();
        let service = service_for(&env);

        let result = service.load_planner(query("alice")).await.expect("planner loads");

        assert_eq!(result.owner.username, "alice");
        let titles: Vec<&str> = result.activities.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Run", "Yoga"]);
    }

    #[tokio::test]
    async fn test_load_planner_for_missing_owner_is_not_found() {
        let env = TestEnvironment::new().await.unwrap();
        env.seed_alice().await.unwrap();
        let service = service_for(&env);

        let error = service.load_planner(query("ghost")).await.unwrap_err();

        match error {
            PlannerError::NotFound { ref username } => assert_eq!(username, "ghost"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(error.to_string().contains("\"ghost\""));
    }

    #[tokio::test]
    async fn test_owner_with_empty_catalog() {
        let env = TestEnvironment::new().await.unwrap();
        env.seed_user("user::7", "bob", None).await.unwrap();
        let service = service_for(&env);

        let result = service.load_planner(query("bob")).await.unwrap();
        assert!(result.activities.is_empty());
        assert!(result.owner.name.is_none());
    }
}
