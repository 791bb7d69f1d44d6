use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Timelike};

/// Value format of `<input type="datetime-local">`
const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months
    pub is_current_month: bool,
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

/// Get days in a month (accounting for leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

/// Six Sunday-first weeks covering `month`, padded with adjacent-month days.
///
/// Returns an empty grid for an invalid year/month.
pub fn generate_calendar_days(year: i32, month: u32) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as i64;
    let grid_start = first - Duration::days(leading);

    (0..42)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            CalendarDay {
                date,
                is_current_month: date.month() == month && date.year() == year,
            }
        })
        .collect()
}

/// Format a date for display (e.g., "October 14, 2022")
pub fn format_date_for_display(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

/// Parse the value of a datetime-local input; seconds are optional
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

pub fn format_datetime_local(date_time: NaiveDateTime) -> String {
    date_time.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Browser-local wall clock at minute precision, the default booking time
pub fn current_local_minute() -> NaiveDateTime {
    truncate_to_minute(Local::now().naive_local())
}

fn truncate_to_minute(date_time: NaiveDateTime) -> NaiveDateTime {
    date_time
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(date_time)
}
