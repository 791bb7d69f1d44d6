pub mod use_planner_data;
pub mod use_planner_state;
