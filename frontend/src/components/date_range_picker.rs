use yew::prelude::*;
use chrono::NaiveDate;
use shared::DateRange;
use crate::services::date_utils::{format_date_for_display, generate_calendar_days, month_name};

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    pub selected_range: DateRange,
    /// First day of an unfinished selection, if any
    pub pending_anchor: Option<NaiveDate>,
    pub visible_year: i32,
    pub visible_month: u32,
    pub on_day_click: Callback<NaiveDate>,
    pub on_previous_month: Callback<()>,
    pub on_next_month: Callback<()>,
}

/// CSS classes for one day cell
pub fn day_classes(day: NaiveDate, is_current_month: bool, range: &DateRange) -> Classes {
    let mut classes = classes!("calendar-day");
    if !is_current_month {
        classes.push("other-month");
    }
    if range.contains(day) {
        classes.push("in-range");
    }
    if day == range.from() {
        classes.push("range-start");
    }
    if day == range.to() {
        classes.push("range-end");
    }
    classes
}

#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let prev_month = {
        let on_previous_month = props.on_previous_month.clone();
        Callback::from(move |_: MouseEvent| on_previous_month.emit(()))
    };

    let next_month = {
        let on_next_month = props.on_next_month.clone();
        Callback::from(move |_: MouseEvent| on_next_month.emit(()))
    };

    let calendar_days = generate_calendar_days(props.visible_year, props.visible_month);
    let range = props.selected_range;

    html! {
        <div class="date-range-picker">
            <div class="selected-range">
                {format!(
                    "{} - {}",
                    format_date_for_display(range.from()),
                    format_date_for_display(range.to())
                )}
                {if props.pending_anchor.is_some() {
                    html! { <span class="range-hint">{" (pick an end date)"}</span> }
                } else { html! {} }}
            </div>

            <div class="calendar-header">
                <button type="button" class="nav-button" onclick={prev_month}>{"‹"}</button>
                <span class="month-year">
                    {format!("{} {}", month_name(props.visible_month), props.visible_year)}
                </span>
                <button type="button" class="nav-button" onclick={next_month}>{"›"}</button>
            </div>

            <div class="calendar-grid">
                <div class="weekday-header">
                    {for ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].iter().map(|d| html! { <span>{*d}</span> })}
                </div>

                <div class="calendar-days">
                    {for calendar_days.iter().map(|day| {
                        let date = day.date;
                        let on_click = {
                            let on_day_click = props.on_day_click.clone();
                            Callback::from(move |_: MouseEvent| on_day_click.emit(date))
                        };
                        html! {
                            <button
                                type="button"
                                class={day_classes(date, day.is_current_month, &range)}
                                onclick={on_click}
                            >
                                {date.format("%-d").to_string()}
                            </button>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, d).unwrap()
    }

    #[test]
    fn test_range_endpoints_get_marker_classes() {
        let range = DateRange::default_selection();

        let start = day_classes(day(5), true, &range);
        assert!(start.contains("in-range"));
        assert!(start.contains("range-start"));
        assert!(!start.contains("range-end"));

        let end = day_classes(day(9), true, &range);
        assert!(end.contains("range-end"));

        let outside = day_classes(day(10), false, &range);
        assert!(!outside.contains("in-range"));
        assert!(outside.contains("other-month"));
    }
}
