//! # REST API for the Activity Planner page

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

use crate::domain::commands::planner::LoadPlannerQuery;
use crate::domain::errors::PlannerError;
use crate::io::rest::auth::AuthenticatedUser;
use crate::io::rest::mappers::activity_mapper::ActivityMapper;
use crate::AppState;
use shared::PlannerPageResponse;

/// Create the planner API router
pub fn router() -> Router<AppState> {
    Router::new().route("/users/:username/planner", get(get_planner_page))
}

/// Owner and activity catalog for `username`'s planner page
pub async fn get_planner_page(
    State(state): State<AppState>,
    Path(username): Path<String>,
    viewer: AuthenticatedUser,
) -> Result<Json<PlannerPageResponse>, PlannerError> {
    info!("GET /api/users/{}/planner", username);

    let query = LoadPlannerQuery {
        username,
        viewer_id: viewer.user_id,
    };
    let result = state.planner_service.load_planner(query).await?;

    Ok(Json(ActivityMapper::to_planner_page_response(result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::auth::SESSION_COOKIE;
    use crate::storage::csv::test_utils::TestEnvironment;
    use crate::{build_app_state, storage::CsvConnection};
    use axum::{
        body::Body,
        http::{header::COOKIE, Method, Request, StatusCode},
    };
    use shared::ErrorResponse;
    use tower::ServiceExt;

    fn setup_test_app(connection: CsvConnection) -> Router {
        router().with_state(build_app_state(connection))
    }

    fn planner_request(username: &str, session: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method(Method::GET)
            .uri(format!("/users/{}/planner", username));
        if let Some(session) = session {
            builder = builder.header(COOKIE, format!("{}={}", SESSION_COOKIE, session));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_get_planner_page_lists_activities_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let env = TestEnvironment::new().await?;
        env.seed_alice().await?;
        let app = setup_test_app(env.connection.clone());

        let response = app.oneshot(planner_request("alice", Some("alice-session"))).await?;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let page: PlannerPageResponse = serde_json::from_slice(&body)?;

        assert_eq!(page.owner.username, "alice");
        assert_eq!(page.owner.display_name(), "Alice");
        assert_eq!(page.activities.len(), 2);
        assert_eq!(page.activities[0].id, "1");
        assert_eq!(page.activities[0].title, "Run");
        assert_eq!(page.activities[1].id, "2");
        assert_eq!(page.activities[1].title, "Yoga");
        assert!(page.activities[0].tags.contains("Outdoor"));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_owner_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
        let env = TestEnvironment::new().await?;
        env.seed_alice().await?;
        let app = setup_test_app(env.connection.clone());

        let response = app.oneshot(planner_request("ghost", Some("alice-session"))).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let error: ErrorResponse = serde_json::from_slice(&body)?;
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.error.contains("\"ghost\""));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_session_is_unauthorized() -> Result<(), Box<dyn std::error::Error>> {
        let env = TestEnvironment::new().await?;
        env.seed_alice().await?;
        let app = setup_test_app(env.connection.clone());

        let response = app.oneshot(planner_request("alice", None)).await?;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_session_is_unauthorized() -> Result<(), Box<dyn std::error::Error>> {
        let env = TestEnvironment::new().await?;
        env.seed_alice().await?;
        let app = setup_test_app(env.connection.clone());

        let response = app.oneshot(planner_request("alice", Some("forged"))).await?;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let error: ErrorResponse = serde_json::from_slice(&body)?;
        assert_eq!(error.code, "UNAUTHENTICATED");
        Ok(())
    }

    #[tokio::test]
    async fn test_any_signed_in_viewer_can_see_another_owners_planner() -> Result<(), Box<dyn std::error::Error>> {
        let env = TestEnvironment::new().await?;
        env.seed_alice().await?;
        let bob = env.seed_user("user::2", "bob", None).await?;
        env.seed_session("bob-session", &bob.id).await?;
        let app = setup_test_app(env.connection.clone());

        let response = app.oneshot(planner_request("alice", Some("bob-session"))).await?;
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }
}
