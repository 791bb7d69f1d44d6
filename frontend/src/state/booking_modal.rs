//! # Booking Modal State Machine
//!
//! `Closed` until a card is activated, then `Open` for that activity until
//! it is cancelled, dismissed or confirmed. Every transition is total.
//!
//! Confirming does not persist anything: it hands the acknowledged
//! [`BookingRequest`] back to the caller and closes the dialog.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookingModal {
    #[default]
    Closed,
    Open {
        activity_id: String,
        /// Date-time shown in the dialog; starts at the time it was opened
        proposed_date_time: NaiveDateTime,
    },
}

/// Flat view of the pending booking, as the dialog renders it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub activity_id: Option<String>,
    pub is_open: bool,
    pub proposed_date_time: Option<NaiveDateTime>,
}

impl BookingModal {
    pub fn is_open(&self) -> bool {
        matches!(self, BookingModal::Open { .. })
    }

    pub fn activity_id(&self) -> Option<&str> {
        match self {
            BookingModal::Open { activity_id, .. } => Some(activity_id),
            BookingModal::Closed => None,
        }
    }

    pub fn proposed_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            BookingModal::Open {
                proposed_date_time, ..
            } => Some(*proposed_date_time),
            BookingModal::Closed => None,
        }
    }

    pub fn booking_request(&self) -> BookingRequest {
        BookingRequest {
            activity_id: self.activity_id().map(str::to_string),
            is_open: self.is_open(),
            proposed_date_time: self.proposed_date_time(),
        }
    }

    /// Open the dialog for `activity_id`, proposing `now` as the booking time.
    ///
    /// Returns false when it was already open for that same activity.
    pub fn open_for(&mut self, activity_id: &str, now: NaiveDateTime) -> bool {
        if self.activity_id() == Some(activity_id) {
            return false;
        }

        *self = BookingModal::Open {
            activity_id: activity_id.to_string(),
            proposed_date_time: now,
        };
        true
    }

    /// Record the date-time typed into the dialog. No-op while closed.
    pub fn propose_date_time(&mut self, date_time: NaiveDateTime) {
        if let BookingModal::Open {
            proposed_date_time, ..
        } = self
        {
            *proposed_date_time = date_time;
        }
    }

    /// Close the dialog, returning the activity it was open for.
    ///
    /// Closing an already closed dialog returns `None` and changes nothing.
    pub fn close(&mut self) -> Option<String> {
        match std::mem::take(self) {
            BookingModal::Open { activity_id, .. } => Some(activity_id),
            BookingModal::Closed => None,
        }
    }

    /// Acknowledge a booking at `date_time` and close the dialog.
    ///
    /// Returns the acknowledged request, or `None` when the dialog was closed.
    pub fn confirm(&mut self, date_time: NaiveDateTime) -> Option<BookingRequest> {
        let activity_id = self.close()?;
        Some(BookingRequest {
            activity_id: Some(activity_id),
            is_open: false,
            proposed_date_time: Some(date_time),
        })
    }
}
