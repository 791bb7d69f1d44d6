pub mod activity_card;
pub mod booking_modal;
pub mod date_range_picker;
pub mod not_found;
pub mod planner_page;
