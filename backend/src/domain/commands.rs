//! Domain-level query and result types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined in
//! the `shared` crate to and from these internal types.

pub mod planner {
    use crate::domain::models::activity::Activity;
    use crate::domain::models::user::User;

    /// Input for loading a planner page.
    #[derive(Debug, Clone)]
    pub struct LoadPlannerQuery {
        /// Username of the page owner, as it appears in the URL
        pub username: String,
        /// Identity of the signed-in viewer
        pub viewer_id: String,
    }

    /// Result of loading a planner page.
    #[derive(Debug, Clone)]
    pub struct LoadPlannerResult {
        pub owner: User,
        pub activities: Vec<Activity>,
    }
}
