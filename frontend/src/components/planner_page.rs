use yew::prelude::*;
use chrono::NaiveDateTime;
use shared::{Activity, PlannerPageResponse};
use crate::components::activity_card::ActivityCard;
use crate::components::booking_modal::BookingModal as BookingDialog;
use crate::components::date_range_picker::DateRangePicker;
use crate::components::not_found::NotFound;
use crate::hooks::use_planner_data::{use_planner_data, PlannerLoadState};
use crate::hooks::use_planner_state::use_planner_state;
use crate::services::api::ApiClient;
use crate::services::date_utils::current_local_minute;
use crate::state::{PlannerAction, PlannerState};

#[derive(Properties, PartialEq)]
pub struct PlannerPageProps {
    pub username: String,
    #[prop_or_default]
    pub api_client: ApiClient,
}

#[function_component(PlannerPage)]
pub fn planner_page(props: &PlannerPageProps) -> Html {
    let load_state = use_planner_data(&props.api_client, &props.username);

    match load_state {
        PlannerLoadState::Loading => html! {
            <div class="loading">{"Loading planner..."}</div>
        },
        PlannerLoadState::NotFound { username } => html! {
            <NotFound {username} />
        },
        PlannerLoadState::Failed(message) => html! {
            <div class="error-banner">{message}</div>
        },
        PlannerLoadState::Loaded(page) => html! {
            <PlannerView {page} api_client={props.api_client.clone()} />
        },
    }
}

/// Action dispatched when the card for `activity_id` is activated at `now`
pub fn select_card_action(activity_id: String, now: NaiveDateTime) -> PlannerAction {
    PlannerAction::OpenFor { activity_id, now }
}

/// What the booking dialog shows while it is open
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDialogModel {
    /// `None` when the open id is no longer in the catalog
    pub activity: Option<Activity>,
    pub proposed_date_time: NaiveDateTime,
}

/// Everything the loaded planner renders, derived from the page and state
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerViewModel {
    pub owner_name: String,
    pub cards: Vec<Activity>,
    /// Present only while the booking modal is open
    pub dialog: Option<BookingDialogModel>,
}

impl PlannerViewModel {
    pub fn new(page: &PlannerPageResponse, state: &PlannerState) -> Self {
        let dialog = state.modal.activity_id().zip(state.modal.proposed_date_time()).map(
            |(id, proposed_date_time)| BookingDialogModel {
                activity: page.activities.iter().find(|a| a.id == id).cloned(),
                proposed_date_time,
            },
        );

        Self {
            owner_name: page.owner.display_name().to_string(),
            cards: page.activities.clone(),
            dialog,
        }
    }
}

#[derive(Properties, PartialEq)]
struct PlannerViewProps {
    page: PlannerPageResponse,
    api_client: ApiClient,
}

#[function_component(PlannerView)]
fn planner_view(props: &PlannerViewProps) -> Html {
    let planner = use_planner_state(&props.api_client);
    let state = &planner.state;
    let dispatch = planner.dispatch.clone();

    let on_day_click = dispatch.reform(PlannerAction::ClickDay);
    let on_previous_month = dispatch.reform(|_: ()| PlannerAction::PreviousMonth);
    let on_next_month = dispatch.reform(|_: ()| PlannerAction::NextMonth);
    let on_select_activity = dispatch.reform(|activity_id: String| {
        select_card_action(activity_id, current_local_minute())
    });
    let on_propose = dispatch.reform(PlannerAction::ProposeDateTime);
    let on_cancel = dispatch.reform(|_: ()| PlannerAction::Cancel);
    let on_dismiss = dispatch.reform(|_: ()| PlannerAction::Dismiss);
    let on_confirm = dispatch.reform(PlannerAction::Confirm);

    let view = PlannerViewModel::new(&props.page, state);

    html! {
        <div class="planner-page">
            <header class="planner-header">
                <h1>{"Activity Planner"}</h1>
                <p class="planner-owner">{view.owner_name}</p>
            </header>

            <DateRangePicker
                selected_range={state.calendar.selected_range()}
                pending_anchor={state.calendar.pending_anchor()}
                visible_year={state.calendar.visible_year()}
                visible_month={state.calendar.visible_month()}
                on_day_click={on_day_click}
                on_previous_month={on_previous_month}
                on_next_month={on_next_month}
            />

            <div class="activity-grid">
                {for view.cards.into_iter().map(|activity| html! {
                    <ActivityCard
                        key={activity.id.clone()}
                        activity={activity.clone()}
                        on_select={on_select_activity.clone()}
                    />
                })}
            </div>

            {match view.dialog {
                Some(dialog) => html! {
                    <BookingDialog
                        activity={dialog.activity}
                        proposed_date_time={dialog.proposed_date_time}
                        on_propose={on_propose}
                        on_cancel={on_cancel}
                        on_dismiss={on_dismiss}
                        on_confirm={on_confirm}
                    />
                },
                None => html! {},
            }}
        </div>
    }
}
