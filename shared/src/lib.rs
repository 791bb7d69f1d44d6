use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// First day of the default calendar selection shown before the user picks a range
pub const DEFAULT_RANGE_START: (i32, u32, u32) = (2023, 5, 5);

/// Number of days covered by the default calendar selection
pub const DEFAULT_RANGE_DAYS: u64 = 5;

/// Inclusive span of calendar days. `from <= to` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = std::convert::Infallible;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Ok(DateRange::new(raw.from, raw.to))
    }
}

impl DateRange {
    /// Build a range, swapping the endpoints if they arrive reversed
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        if to < from {
            Self { from: to, to: from }
        } else {
            Self { from, to }
        }
    }

    /// A range covering exactly one day
    pub fn single(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }

    /// The fixed five day range `[day0, day0 + 4]` used on first load
    pub fn default_selection() -> Self {
        let (year, month, day) = DEFAULT_RANGE_START;
        let from = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
        let to = from
            .checked_add_days(Days::new(DEFAULT_RANGE_DAYS - 1))
            .unwrap_or(from);
        Self { from, to }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Whether `day` falls inside the range (both ends inclusive)
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::default_selection()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// The user whose planner page is being viewed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub username: String,
    /// Optional display name; falls back to the username
    pub name: Option<String>,
    /// Identifier of the profile image, if the owner uploaded one
    pub image_id: Option<String>,
}

impl Owner {
    /// Name shown in the page header
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// A bookable item shown as a card in the planner list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    /// Sorted, de-duplicated labels rendered as badges
    pub tags: BTreeSet<String>,
    /// Day the activity was created (YYYY-MM-DD on the wire)
    pub created_at: NaiveDate,
}

/// Response for `GET /api/users/{username}/planner`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerPageResponse {
    pub owner: Owner,
    /// Activities in catalog order
    pub activities: Vec<Activity>,
}

/// Error body returned by every failing API call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Why the booking modal went from open to closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// The cancel button inside the dialog
    Cancelled,
    /// Backdrop click or Escape
    Dismissed,
    /// The booking was acknowledged
    Confirmed,
}

impl CloseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloseReason::Cancelled => "cancelled",
            CloseReason::Dismissed => "dismissed",
            CloseReason::Confirmed => "confirmed",
        }
    }
}

/// Structured event emitted at planner state-machine transition boundaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlannerEvent {
    RangeSelected {
        range: DateRange,
    },
    ModalOpened {
        activity_id: String,
    },
    ModalClosed {
        activity_id: String,
        reason: CloseReason,
    },
    BookingConfirmed {
        activity_id: String,
        /// Proposed local date-time, RFC 3339 without offset
        proposed_date_time: String,
    },
}

impl PlannerEvent {
    /// Short machine-readable name of the event
    pub fn kind(&self) -> &'static str {
        match self {
            PlannerEvent::RangeSelected { .. } => "range_selected",
            PlannerEvent::ModalOpened { .. } => "modal_opened",
            PlannerEvent::ModalClosed { .. } => "modal_closed",
            PlannerEvent::BookingConfirmed { .. } => "booking_confirmed",
        }
    }
}

impl fmt::Display for PlannerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerEvent::RangeSelected { range } => write!(f, "range selected: {}", range),
            PlannerEvent::ModalOpened { activity_id } => {
                write!(f, "booking modal opened for activity {}", activity_id)
            }
            PlannerEvent::ModalClosed { activity_id, reason } => write!(
                f,
                "booking modal for activity {} closed ({})",
                activity_id,
                reason.as_str()
            ),
            PlannerEvent::BookingConfirmed {
                activity_id,
                proposed_date_time,
            } => write!(
                f,
                "booking acknowledged for activity {} at {}",
                activity_id, proposed_date_time
            ),
        }
    }
}

/// Request body for `POST /api/logs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<PlannerEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}
