//! # Planner State
//!
//! Combines the calendar selection and the booking modal behind a single
//! `apply` entry point. Each applied action returns the `PlannerEvent`s for
//! the transitions that actually changed something; no-ops return nothing.

use chrono::{NaiveDate, NaiveDateTime};
use shared::{CloseReason, DateRange, PlannerEvent};

use super::booking_modal::{BookingModal, BookingRequest};
use super::calendar_selection::CalendarSelection;

/// Format used for date-times carried in planner events
const EVENT_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub enum PlannerAction {
    SelectRange(DateRange),
    ClickDay(NaiveDate),
    PreviousMonth,
    NextMonth,
    /// A card was activated at local time `now`
    OpenFor {
        activity_id: String,
        now: NaiveDateTime,
    },
    ProposeDateTime(NaiveDateTime),
    /// Cancel button inside the dialog
    Cancel,
    /// Backdrop click or Escape
    Dismiss,
    Confirm(NaiveDateTime),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlannerState {
    pub calendar: CalendarSelection,
    pub modal: BookingModal,
    /// Most recent acknowledged booking
    pub last_booking: Option<BookingRequest>,
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: PlannerAction) -> Vec<PlannerEvent> {
        match action {
            PlannerAction::SelectRange(range) => {
                let changed = self.calendar.select_range(range);
                self.range_event(changed)
            }
            PlannerAction::ClickDay(day) => {
                let changed = self.calendar.click_day(day);
                self.range_event(changed)
            }
            PlannerAction::PreviousMonth => {
                self.calendar.previous_month();
                Vec::new()
            }
            PlannerAction::NextMonth => {
                self.calendar.next_month();
                Vec::new()
            }
            PlannerAction::OpenFor { activity_id, now } => {
                if self.modal.open_for(&activity_id, now) {
                    vec![PlannerEvent::ModalOpened { activity_id }]
                } else {
                    Vec::new()
                }
            }
            PlannerAction::ProposeDateTime(date_time) => {
                self.modal.propose_date_time(date_time);
                Vec::new()
            }
            PlannerAction::Cancel => self.close_with(CloseReason::Cancelled),
            PlannerAction::Dismiss => self.close_with(CloseReason::Dismissed),
            PlannerAction::Confirm(date_time) => match self.modal.confirm(date_time) {
                Some(booking) => {
                    let activity_id = booking.activity_id.clone().unwrap_or_default();
                    self.last_booking = Some(booking);
                    vec![
                        PlannerEvent::BookingConfirmed {
                            activity_id: activity_id.clone(),
                            proposed_date_time: date_time
                                .format(EVENT_DATE_TIME_FORMAT)
                                .to_string(),
                        },
                        PlannerEvent::ModalClosed {
                            activity_id,
                            reason: CloseReason::Confirmed,
                        },
                    ]
                }
                None => Vec::new(),
            },
        }
    }

    fn range_event(&self, changed: bool) -> Vec<PlannerEvent> {
        if changed {
            vec![PlannerEvent::RangeSelected {
                range: self.calendar.selected_range(),
            }]
        } else {
            Vec::new()
        }
    }

    fn close_with(&mut self, reason: CloseReason) -> Vec<PlannerEvent> {
        match self.modal.close() {
            Some(activity_id) => vec![PlannerEvent::ModalClosed {
                activity_id,
                reason,
            }],
            None => Vec::new(),
        }
    }
}
