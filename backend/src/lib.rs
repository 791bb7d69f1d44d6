//! # Activity Planner Backend
//!
//! Serves the data behind the activity planner page and the built frontend.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (REST API, session extractor)
//!     ↓
//! Domain Layer (planner and session services)
//!     ↓
//! Storage Layer (YAML/CSV data directory)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod seed;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::BackendConfig;
use crate::domain::{PlannerService, SessionService};
use crate::storage::{ActivityRepository, CsvConnection, SessionRepository, UserRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub planner_service: PlannerService,
    pub session_service: SessionService,
}

/// Wire repositories and services over a data directory connection
pub fn build_app_state(connection: CsvConnection) -> AppState {
    let users = Arc::new(UserRepository::new(connection.clone()));
    let activities = Arc::new(ActivityRepository::new(connection.clone()));
    let sessions = Arc::new(SessionRepository::new(connection));

    AppState {
        planner_service: PlannerService::new(users, activities),
        session_service: SessionService::new(sessions),
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &BackendConfig) -> Result<AppState> {
    info!("Opening data directory {}", config.data_directory.display());
    let connection = CsvConnection::new(&config.data_directory)?;

    info!("Setting up application state");
    Ok(build_app_state(connection))
}

/// Routes served under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(io::planner_apis::router())
        .merge(io::logging_apis::router())
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &BackendConfig) -> Router {
    // Session cookies cross origins in development, so credentials are allowed
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    // Unknown paths fall through to the SPA so `/users/<name>/planner` loads the app
    let frontend = ServeDir::new(&config.frontend_dist)
        .fallback(ServeFile::new(config.frontend_dist.join("index.html")));

    Router::new()
        .nest("/api", api_router())
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
