use yew::prelude::*;
use crate::services::api::ApiClient;
use crate::state::{PlannerAction, PlannerState};

pub struct UsePlannerStateResult {
    pub state: PlannerState,
    pub dispatch: Callback<PlannerAction>,
}

/// Own the planner state for a page.
///
/// Actions are applied synchronously in the event callback; the events each
/// action yields go to `api_client`'s logger before the component re-renders.
#[hook]
pub fn use_planner_state(api_client: &ApiClient) -> UsePlannerStateResult {
    let state = use_mut_ref(PlannerState::new);
    let force_update = use_force_update();

    let dispatch = {
        let state = state.clone();
        use_callback(api_client.logger(), move |action: PlannerAction, logger| {
            let events = state.borrow_mut().apply(action);
            for event in &events {
                logger.planner_event(event);
            }
            force_update.force_update();
        })
    };

    let snapshot = state.borrow().clone();
    UsePlannerStateResult {
        state: snapshot,
        dispatch,
    }
}
