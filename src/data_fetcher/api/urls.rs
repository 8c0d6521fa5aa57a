//! URL building utilities for API endpoints

use chrono::NaiveDate;

/// Path of the NBA scoreboard below the API domain
const NBA_SCOREBOARD_PATH: &str = "/apis/site/v2/sports/basketball/nba/scoreboard";

/// Formats an inclusive date range as the scoreboard's `dates` parameter value.
///
/// # Example
/// ```
/// use fantasy_hoops_week::data_fetcher::api::format_date_range;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
/// assert_eq!(format_date_range(start, end), "20251124-20251130");
/// ```
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{}-{}", start.format("%Y%m%d"), end.format("%Y%m%d"))
}

/// Builds the scoreboard URL for all games between `start` and `end`, inclusive.
///
/// # Arguments
/// * `api_domain` - The base API domain
/// * `start` - First day of the range
/// * `end` - Last day of the range
///
/// # Example
/// ```
/// use fantasy_hoops_week::data_fetcher::api::build_scoreboard_url;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
/// let url = build_scoreboard_url("https://site.api.espn.com", start, end);
/// assert_eq!(
///     url,
///     "https://site.api.espn.com/apis/site/v2/sports/basketball/nba/scoreboard?dates=20251124-20251130"
/// );
/// ```
pub fn build_scoreboard_url(api_domain: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}{NBA_SCOREBOARD_PATH}?dates={}",
        api_domain.trim_end_matches('/'),
        format_date_range(start, end)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_scoreboard_url_trailing_slash() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
        assert_eq!(
            build_scoreboard_url("https://api.example.com/", start, end),
            "https://api.example.com/apis/site/v2/sports/basketball/nba/scoreboard?dates=20260105-20260111"
        );
    }

    #[test]
    fn test_format_date_range_across_years() {
        let start = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
        assert_eq!(format_date_range(start, end), "20251229-20260104");
    }
}
