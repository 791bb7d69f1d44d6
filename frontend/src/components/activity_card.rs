use yew::prelude::*;
use shared::Activity;
use crate::services::date_utils::format_date_for_display;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub activity: Activity,
    /// Receives the activity id
    pub on_select: Callback<String>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let on_click = {
        let on_select = props.on_select.clone();
        let id = props.activity.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    let activity = &props.activity;

    html! {
        <button type="button" class="activity-card" onclick={on_click}>
            <h3 class="activity-title">{&activity.title}</h3>
            <div class="activity-tags">
                {for activity.tags.iter().map(|tag| html! {
                    <span class="tag-badge">{tag}</span>
                })}
            </div>
            <div class="activity-date">
                {format!("Added {}", format_date_for_display(activity.created_at))}
            </div>
        </button>
    }
}
