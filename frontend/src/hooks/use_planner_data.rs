use yew::prelude::*;
use shared::PlannerPageResponse;
use wasm_bindgen_futures::spawn_local;
use crate::services::api::{ApiClient, ApiError};

#[derive(Clone, Debug, PartialEq)]
pub enum PlannerLoadState {
    Loading,
    Loaded(PlannerPageResponse),
    NotFound { username: String },
    Failed(String),
}

impl PlannerLoadState {
    pub fn from_result(result: Result<PlannerPageResponse, ApiError>) -> Self {
        match result {
            Ok(page) => PlannerLoadState::Loaded(page),
            Err(ApiError::NotFound(username)) => PlannerLoadState::NotFound { username },
            Err(other) => PlannerLoadState::Failed(other.to_string()),
        }
    }
}

/// Load the owner and catalog once per username
#[hook]
pub fn use_planner_data(api_client: &ApiClient, username: &str) -> PlannerLoadState {
    let load_state = use_state(|| PlannerLoadState::Loading);

    {
        let api_client = api_client.clone();
        let load_state = load_state.clone();
        use_effect_with(username.to_string(), move |username| {
            let username = username.clone();
            load_state.set(PlannerLoadState::Loading);

            spawn_local(async move {
                let result = api_client.get_planner_page(&username).await;
                if let Err(e) = &result {
                    api_client.logger().warn_with_component(
                        "use_planner_data",
                        &format!("Failed to load planner for {}: {}", username, e),
                    );
                }
                load_state.set(PlannerLoadState::from_result(result));
            });

            || ()
        });
    }

    (*load_state).clone()
}
