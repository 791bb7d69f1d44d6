use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{ErrorResponse, PlannerPageResponse};
use thiserror::Error;
use web_sys::RequestCredentials;

use super::logging::Logger;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Failures surfaced to the planner page
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The requested planner owner does not exist
    #[error("No user with the username \"{0}\" exists")]
    NotFound(String),

    #[error("You need to sign in to view this planner")]
    Unauthenticated,

    #[error("Server error: {0}")]
    Server(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// API client for communicating with the backend server
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL.to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Logger posting to this client's backend
    pub fn logger(&self) -> Logger {
        Logger::new(&self.base_url)
    }

    pub fn planner_page_url(&self, username: &str) -> String {
        format!(
            "{}/api/users/{}/planner",
            self.base_url,
            String::from(js_sys::encode_uri_component(username))
        )
    }

    /// Load the owner and activity catalog for `username`'s planner.
    ///
    /// The session cookie is sent along; the backend answers 401 without it.
    pub async fn get_planner_page(&self, username: &str) -> Result<PlannerPageResponse, ApiError> {
        let response = Request::get(&self.planner_page_url(username))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status() {
            200..=299 => Self::parse_json(response).await,
            404 => Err(ApiError::NotFound(username.to_string())),
            401 => Err(ApiError::Unauthenticated),
            status => Err(ApiError::Server(Self::error_message(response, status).await)),
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn error_message(response: Response, status: u16) -> String {
        match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("Unexpected status {}", status),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
