use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod state;

use components::planner_page::PlannerPage;

/// Extract `<username>` from a `/users/<username>/planner` path
pub fn username_from_path(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match segments.as_slice() {
        ["users", username, "planner"] if !username.is_empty() => Some(username.to_string()),
        _ => None,
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

#[function_component(App)]
fn app() -> Html {
    let path = current_path();

    match username_from_path(&path) {
        Some(username) => html! { <PlannerPage {username} /> },
        None => html! {
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"Open a planner at /users/<username>/planner"}</p>
            </div>
        },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
