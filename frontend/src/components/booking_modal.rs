use yew::prelude::*;
use web_sys::{window, HtmlInputElement, KeyboardEvent};
use wasm_bindgen::JsCast;
use chrono::NaiveDateTime;
use shared::Activity;
use crate::services::date_utils::{format_datetime_local, parse_datetime_local};

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    /// The activity the dialog is open for, when it is in the catalog
    pub activity: Option<Activity>,
    /// Pre-filled with the time the dialog opened
    pub proposed_date_time: NaiveDateTime,
    pub on_propose: Callback<NaiveDateTime>,
    pub on_cancel: Callback<()>,
    /// Backdrop click or Escape
    pub on_dismiss: Callback<()>,
    pub on_confirm: Callback<NaiveDateTime>,
}

/// Booking dialog. Rendered only while the booking state machine is open.
#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    // Escape dismisses the dialog
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                gloo::events::EventListener::new(&window, "keydown", move |e| {
                    if let Some(event) = e.dyn_ref::<KeyboardEvent>() {
                        if event.key() == "Escape" {
                            on_dismiss.emit(());
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_backdrop_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    // Clicks inside the dialog must not reach the backdrop
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_input_change = {
        let on_propose = props.on_propose.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(date_time) = parse_datetime_local(&input.value()) {
                on_propose.emit(date_time);
            }
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        let proposed = props.proposed_date_time;
        Callback::from(move |_: MouseEvent| on_confirm.emit(proposed))
    };

    let title = props
        .activity
        .as_ref()
        .map(|activity| activity.title.clone())
        .unwrap_or_else(|| "Activity".to_string());
    let input_value = format_datetime_local(props.proposed_date_time);

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-content booking-modal" role="dialog" aria-modal="true" onclick={stop_propagation}>
                <h2>{format!("Book {}", title)}</h2>

                <label class="form-label" for="booking-date-time">{"When"}</label>
                <input
                    id="booking-date-time"
                    type="datetime-local"
                    class="form-input"
                    value={input_value}
                    onchange={on_input_change}
                />

                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                        {"Cancel"}
                    </button>
                    <button type="button" class="btn btn-primary" onclick={on_confirm_click}>
                        {"Confirm"}
                    </button>
                </div>
            </div>
        </div>
    }
}
