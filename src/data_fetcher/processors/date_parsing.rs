//! Local game date extraction from scoreboard events.
//!
//! The scoreboard reports start times in UTC, which moves late evening games
//! in the Americas onto the next calendar day. The status display string
//! (`"11/23 - 8:00 PM EST"`) carries the local date, so it is preferred and
//! the UTC date is only a fallback.

use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::debug;

use crate::data_fetcher::models::EspnEvent;
use crate::error::AppError;

/// Separator between the date and time halves of the display string
const DETAIL_SEPARATOR: &str = " - ";

/// Returns the local calendar date of `event`.
///
/// When the display string cannot be parsed, the date portion of the UTC
/// timestamp is used instead and `parse_errors` is incremented once.
/// Returns `None` only when neither source yields a date.
///
/// # Examples
///
/// ```
/// use fantasy_hoops_week::data_fetcher::models::{EspnEvent, EspnStatus, EspnStatusType};
/// use fantasy_hoops_week::data_fetcher::processors::extract_local_date;
/// use chrono::NaiveDate;
///
/// let event = EspnEvent {
///     date: Some("2025-11-24T01:00Z".to_string()),
///     status: Some(EspnStatus {
///         status_type: Some(EspnStatusType {
///             short_detail: Some("11/23 - 8:00 PM EST".to_string()),
///         }),
///     }),
///     ..Default::default()
/// };
///
/// let mut parse_errors = 0;
/// let date = extract_local_date(&event, &mut parse_errors);
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 11, 23));
/// assert_eq!(parse_errors, 0);
/// ```
pub fn extract_local_date(event: &EspnEvent, parse_errors: &mut usize) -> Option<NaiveDate> {
    let utc_timestamp = event.date.as_deref().unwrap_or("");

    match parse_short_detail(event.short_detail(), utc_timestamp) {
        Ok(date) => Some(date),
        Err(e) => {
            *parse_errors += 1;
            debug!(
                "Falling back to UTC date for event {:?}: {e}",
                event.id.as_deref().unwrap_or("?")
            );
            utc_calendar_date(utc_timestamp)
        }
    }
}

/// Parses a display string like `"11/23 - 8:00 PM EST"` into a date, taking
/// the year from the event's UTC timestamp.
///
/// The string must split into exactly two parts on `" - "`. The second part
/// must be a 12-hour clock time, optionally followed by a timezone
/// abbreviation. A December date on an event whose UTC timestamp is already
/// in January belongs to the previous year.
pub fn parse_short_detail(short_detail: &str, utc_timestamp: &str) -> Result<NaiveDate, AppError> {
    let parts: Vec<&str> = short_detail.split(DETAIL_SEPARATOR).collect();
    let [date_part, time_part] = parts.as_slice() else {
        return Err(AppError::datetime_parse_error(format!(
            "Unexpected display string shape: '{short_detail}'"
        )));
    };

    let year: i32 = utc_timestamp
        .get(..4)
        .and_then(|y| y.parse().ok())
        .ok_or_else(|| {
            AppError::datetime_parse_error(format!("No year in timestamp '{utc_timestamp}'"))
        })?;

    parse_clock_time(time_part)?;

    let date = NaiveDate::parse_from_str(&format!("{}/{year}", date_part.trim()), "%m/%d/%Y")
        .map_err(|e| {
            AppError::datetime_parse_error(format!("Invalid month/day '{date_part}': {e}"))
        })?;

    let rolled_over = date.month() == 12
        && utc_calendar_date(utc_timestamp).is_some_and(|utc| utc.month() == 1);
    if rolled_over {
        return date.with_year(year - 1).ok_or_else(|| {
            AppError::datetime_parse_error(format!("Cannot move {date} to previous year"))
        });
    }

    Ok(date)
}

/// Parses `"8:00 PM EST"` or `"8:00 PM"`. The timezone abbreviation is only
/// checked to be alphabetic; it never changes the calendar date.
fn parse_clock_time(time_part: &str) -> Result<NaiveTime, AppError> {
    let time_part = time_part.trim();
    let clock = match time_part.rsplit_once(' ') {
        Some((head, tz))
            if !tz.is_empty()
                && tz.chars().all(|c| c.is_ascii_alphabetic())
                && !tz.eq_ignore_ascii_case("AM")
                && !tz.eq_ignore_ascii_case("PM") =>
        {
            head.trim_end()
        }
        _ => time_part,
    };

    NaiveTime::parse_from_str(clock, "%I:%M %p").map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid time '{time_part}': {e}"))
    })
}

/// Date portion of a timestamp like `2025-11-24T01:00Z`.
fn utc_calendar_date(utc_timestamp: &str) -> Option<NaiveDate> {
    let date_part = utc_timestamp.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
