use gloo::net::http::Request;
use shared::{LogRequest, PlannerEvent};
use wasm_bindgen_futures::spawn_local;

/// Component name attached to planner state-machine events
pub const PLANNER_COMPONENT: &str = "planner";

/// Ships log lines to the backend that served the page
#[derive(Clone, Debug, PartialEq)]
pub struct Logger {
    logs_url: String,
}

impl Logger {
    pub fn new(base_url: &str) -> Self {
        Self {
            logs_url: format!("{}/api/logs", base_url.trim_end_matches('/')),
        }
    }

    pub fn logs_url(&self) -> &str {
        &self.logs_url
    }

    pub fn warn_with_component(&self, component: &str, message: &str) {
        self.send(log_request("warn", message, Some(component), None));
    }

    /// Report one state-machine transition
    pub fn planner_event(&self, event: &PlannerEvent) {
        self.send(log_request(
            "info",
            &event.to_string(),
            Some(PLANNER_COMPONENT),
            Some(event.clone()),
        ));
    }

    fn send(&self, request: LogRequest) {
        let url = self.logs_url.clone();

        // Fire and forget; a lost log line never affects the page
        spawn_local(async move {
            if let Ok(request) = Request::post(&url).json(&request) {
                let _ = request.send().await;
            }
        });
    }
}

fn log_request(
    level: &str,
    message: &str,
    component: Option<&str>,
    event: Option<PlannerEvent>,
) -> LogRequest {
    LogRequest {
        level: level.to_string(),
        message: message.to_string(),
        component: component.map(str::to_string),
        event,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_go_to_the_configured_backend() {
        assert_eq!(
            Logger::new("http://planner.local/").logs_url(),
            "http://planner.local/api/logs"
        );
        assert_eq!(
            Logger::new("http://localhost:3000").logs_url(),
            "http://localhost:3000/api/logs"
        );
    }

    #[test]
    fn test_planner_events_are_tagged_with_component() {
        let event = PlannerEvent::ModalOpened {
            activity_id: "2".to_string(),
        };
        let request = log_request(
            "info",
            &event.to_string(),
            Some(PLANNER_COMPONENT),
            Some(event.clone()),
        );

        assert_eq!(request.level, "info");
        assert_eq!(request.component.as_deref(), Some("planner"));
        assert_eq!(request.event, Some(event));
    }
}
