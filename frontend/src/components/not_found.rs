use yew::prelude::*;

pub fn not_found_message(username: &str) -> String {
    format!("No user with the username \"{}\" exists", username)
}

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub username: String,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{not_found_message(&props.username)}</p>
        </div>
    }
}
