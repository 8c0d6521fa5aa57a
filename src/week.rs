//! Week start selection.
//!
//! A week always runs Monday to Sunday. Blank input selects the next Monday
//! (today when today is a Monday) and any other day snaps back to the Monday
//! that starts its week.

use chrono::{Datelike, Days, Local, NaiveDate};
use tokio::io::{self, AsyncBufReadExt};
use tracing::info;

use crate::error::AppError;

/// The chosen week start and whether it had to be moved to a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSelection {
    pub monday: NaiveDate,
    pub adjusted: bool,
}

impl WeekSelection {
    pub fn sunday(&self) -> NaiveDate {
        self.monday + Days::new(6)
    }
}

/// The first Monday on or after `today`.
pub fn next_monday(today: NaiveDate) -> NaiveDate {
    let days_ahead = (7 - today.weekday().num_days_from_monday()) % 7;
    today + Days::new(u64::from(days_ahead))
}

/// The Monday on or before `date`.
pub fn previous_monday(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Resolves user input into a week start, using `today` for blank input.
///
/// # Examples
///
/// ```
/// use fantasy_hoops_week::week::resolve_week_start;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(); // Thursday
/// let blank = resolve_week_start("", today).unwrap();
/// assert_eq!(blank.monday, NaiveDate::from_ymd_opt(2025, 11, 24).unwrap());
///
/// let wednesday = resolve_week_start("2025-11-26", today).unwrap();
/// assert_eq!(wednesday.monday, NaiveDate::from_ymd_opt(2025, 11, 24).unwrap());
/// assert!(wednesday.adjusted);
/// ```
pub fn resolve_week_start(input: &str, today: NaiveDate) -> Result<WeekSelection, AppError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(WeekSelection {
            monday: next_monday(today),
            adjusted: false,
        });
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!(
            "Invalid week start '{input}', expected YYYY-MM-DD: {e}"
        ))
    })?;
    let monday = previous_monday(date);

    Ok(WeekSelection {
        monday,
        adjusted: monday != date,
    })
}

/// Asks for a week start on stdin and resolves it against today's local date.
pub async fn prompt_for_week_start() -> Result<WeekSelection, AppError> {
    println!(
        "Enter a Monday's date for a week START date (YYYY-MM-DD). Leave blank for nearest Monday in the future: "
    );
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;

    let today = Local::now().date_naive();
    let selection = resolve_week_start(&input, today)?;
    info!("Week start resolved to {}", selection.monday);
    Ok(selection)
}
