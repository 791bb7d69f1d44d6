//! # Calendar Selection State
//!
//! Holds the selected date range of the planner's range picker and the month
//! the picker is showing.
//!
//! Day clicks follow range-picker semantics: the first click anchors a new
//! selection on that day, the second click completes the range between the
//! anchor and the clicked day, in either order.

use chrono::{Datelike, NaiveDate};
use shared::DateRange;

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSelection {
    selected_range: DateRange,
    /// First day of a selection still waiting for its second click
    anchor: Option<NaiveDate>,
    visible_year: i32,
    /// Visible month (1-12)
    visible_month: u32,
}

impl CalendarSelection {
    /// Start with the default five day selection, showing its month
    pub fn new() -> Self {
        let selected_range = DateRange::default_selection();
        Self {
            visible_year: selected_range.from().year(),
            visible_month: selected_range.from().month(),
            selected_range,
            anchor: None,
        }
    }

    pub fn selected_range(&self) -> DateRange {
        self.selected_range
    }

    pub fn pending_anchor(&self) -> Option<NaiveDate> {
        self.anchor
    }

    pub fn visible_year(&self) -> i32 {
        self.visible_year
    }

    pub fn visible_month(&self) -> u32 {
        self.visible_month
    }

    /// Replace the selection. Returns whether the selected range changed.
    pub fn select_range(&mut self, range: DateRange) -> bool {
        self.anchor = None;
        let changed = self.selected_range != range;
        self.selected_range = range;
        changed
    }

    /// Apply a click on `day`. Returns whether the selected range changed.
    pub fn click_day(&mut self, day: NaiveDate) -> bool {
        match self.anchor.take() {
            Some(anchor) => {
                let range = DateRange::new(anchor, day);
                let changed = self.selected_range != range;
                self.selected_range = range;
                changed
            }
            None => {
                self.anchor = Some(day);
                let range = DateRange::single(day);
                let changed = self.selected_range != range;
                self.selected_range = range;
                changed
            }
        }
    }

    /// Navigate the picker to the previous month
    pub fn previous_month(&mut self) {
        if self.visible_month == 1 {
            self.visible_month = 12;
            self.visible_year -= 1;
        } else {
            self.visible_month -= 1;
        }
    }

    /// Navigate the picker to the next month
    pub fn next_month(&mut self) {
        if self.visible_month == 12 {
            self.visible_month = 1;
            self.visible_year += 1;
        } else {
            self.visible_month += 1;
        }
    }
}

impl Default for CalendarSelection {
    fn default() -> Self {
        Self::new()
    }
}
