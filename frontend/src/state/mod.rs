//! Pure planner state: no Yew or browser types live here.

pub mod booking_modal;
pub mod calendar_selection;
pub mod planner;

pub use booking_modal::{BookingModal, BookingRequest};
pub use calendar_selection::CalendarSelection;
pub use planner::{PlannerAction, PlannerState};
