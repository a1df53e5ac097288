// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime, Time};

/// Format of the date field, as produced by a date picker.
pub const FORMAT_DATE: &str = "%Y-%m-%d";

/// Format of the time field, as produced by a time picker.
pub const FORMAT_TIME: &str = "%H:%M";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<Date> {
    Date::strptime(FORMAT_DATE, s.trim()).ok()
}

/// Parses a `HH:MM` time of day.
pub fn parse_time(s: &str) -> Option<Time> {
    Time::strptime(FORMAT_TIME, s.trim()).ok()
}

/// Combines the date and time fields into a civil datetime, if both parse.
///
/// No time zone is attached; the fields are taken at face value.
pub fn parse_schedule(date: &str, time: &str) -> Option<DateTime> {
    Some(parse_date(date)?.to_datetime(parse_time(time)?))
}

/// Where a schedule falls relative to the current moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePosition {
    /// The scheduled moment has passed.
    Past,

    /// Later today.
    Today,

    /// On a later day.
    Upcoming,
}

impl SchedulePosition {
    /// Classifies `at` against `now`.
    pub fn of(at: DateTime, now: DateTime) -> Self {
        if at < now {
            SchedulePosition::Past
        } else if at.date() == now.date() {
            SchedulePosition::Today
        } else {
            SchedulePosition::Upcoming
        }
    }
}
