use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::build_scoreboard_url;
use crate::config::Config;
use crate::data_fetcher::models::{EspnEvent, FetchedWeek, Game, ScoreboardResponse};
use crate::data_fetcher::processors::{extract_local_date, to_nba_code};
use crate::error::AppError;

/// Fetches every game scheduled between `start` and `end`, inclusive.
///
/// Makes one request to the configured scoreboard endpoint. A failed
/// request or non-success status is returned as an error; events that are
/// missing a team are skipped.
///
/// # Arguments
/// * `config` - Supplies the API domain and HTTP timeout
/// * `start` - First day of the range
/// * `end` - Last day of the range
///
/// # Returns
/// * `Result<FetchedWeek, AppError>` - Games plus the count of display dates that failed to parse
#[instrument(skip(config))]
pub async fn fetch_week_schedule(
    config: &Config,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<FetchedWeek, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let url = build_scoreboard_url(&config.api_domain, start, end);

    let response: ScoreboardResponse = fetch(&client, &url).await?;
    info!(
        "Scoreboard returned {} events for {start}..={end}",
        response.events.len()
    );

    let fetched = parse_scoreboard(&response);
    if fetched.parse_errors > 0 {
        warn!(
            "{} events used the UTC date because their display date did not parse",
            fetched.parse_errors
        );
    }
    Ok(fetched)
}

/// Converts a scoreboard response into games.
///
/// Team abbreviations are mapped to NBA codes. Events without both a home
/// and an away team, or without any usable date, are dropped.
pub fn parse_scoreboard(response: &ScoreboardResponse) -> FetchedWeek {
    let mut parse_errors = 0;
    let games = response
        .events
        .iter()
        .filter_map(|event| parse_event(event, &mut parse_errors))
        .collect();

    FetchedWeek {
        games,
        parse_errors,
    }
}

fn parse_event(event: &EspnEvent, parse_errors: &mut usize) -> Option<Game> {
    let event_id = event.id.as_deref().unwrap_or("?");

    let Some(competition) = event.competitions.first() else {
        debug!("Skipping event {event_id}: no competition");
        return None;
    };

    let mut home = None;
    let mut away = None;
    for competitor in &competition.competitors {
        let Some(abbr) = competitor.abbreviation() else {
            continue;
        };
        let code = to_nba_code(abbr);
        if competitor.is_home() {
            home = Some(code);
        } else {
            away = Some(code);
        }
    }

    let (Some(home), Some(away)) = (home, away) else {
        let names: Vec<&str> = competition
            .competitors
            .iter()
            .filter_map(|c| c.display_name())
            .collect();
        debug!(
            "Skipping event {event_id}: missing home or away team (have: {})",
            names.join(", ")
        );
        return None;
    };

    let Some(date) = extract_local_date(event, parse_errors) else {
        debug!("Skipping event {event_id}: no usable date");
        return None;
    };

    Some(Game { date, home, away })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{
        EspnCompetition, EspnCompetitor, EspnStatus, EspnStatusType, EspnTeam,
    };
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    const SCOREBOARD_PATH: &str = "/apis/site/v2/sports/basketball/nba/scoreboard";
    const FIXTURE: &str = include_str!("../../../tests/fixtures/scoreboard_week.json");

    fn create_mock_config(api_domain: String) -> Config {
        Config {
            api_domain,
            http_timeout_seconds: 5,
            ..Config::default()
        }
    }

    async fn fetch_fixture_week(mock_server: &MockServer) -> Result<FetchedWeek, AppError> {
        let config = create_mock_config(mock_server.uri());
        fetch_week_schedule(&config, ymd(2025, 11, 24), ymd(2025, 11, 30)).await
    }

    fn competitor(home_away: &str, abbr: &str) -> EspnCompetitor {
        EspnCompetitor {
            home_away: Some(home_away.to_string()),
            team: Some(EspnTeam {
                abbreviation: Some(abbr.to_string()),
                display_name: None,
            }),
        }
    }

    fn event(short_detail: &str, date: &str, competitors: Vec<EspnCompetitor>) -> EspnEvent {
        EspnEvent {
            id: Some("1".to_string()),
            date: Some(date.to_string()),
            status: Some(EspnStatus {
                status_type: Some(EspnStatusType {
                    short_detail: Some(short_detail.to_string()),
                }),
            }),
            competitions: vec![EspnCompetition { competitors }],
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_scoreboard_maps_codes_and_dates() {
        let response = ScoreboardResponse {
            events: vec![
                event(
                    "11/24 - 7:30 PM EST",
                    "2025-11-25T00:30Z",
                    vec![competitor("home", "NY"), competitor("away", "GS")],
                ),
                event(
                    "11/25 - 10:00 PM EST",
                    "2025-11-26T03:00Z",
                    vec![competitor("away", "UTAH"), competitor("home", "LAL")],
                ),
            ],
        };

        let fetched = parse_scoreboard(&response);
        assert_eq!(fetched.parse_errors, 0);
        assert_eq!(
            fetched.games,
            vec![
                Game::new(ymd(2025, 11, 24), "NYK", "GSW"),
                Game::new(ymd(2025, 11, 25), "LAL", "UTA"),
            ]
        );
    }

    #[test]
    fn test_parse_scoreboard_skips_incomplete_events() {
        let mut no_competition = event("11/24 - 7:30 PM EST", "2025-11-25T00:30Z", Vec::new());
        no_competition.competitions.clear();

        let response = ScoreboardResponse {
            events: vec![
                event(
                    "11/24 - 7:30 PM EST",
                    "2025-11-25T00:30Z",
                    vec![competitor("home", "BOS")],
                ),
                no_competition,
                event(
                    "11/24 - 8:00 PM EST",
                    "2025-11-25T01:00Z",
                    vec![competitor("home", "DEN"), competitor("away", "PHX")],
                ),
            ],
        };

        let fetched = parse_scoreboard(&response);
        assert_eq!(fetched.games, vec![Game::new(ymd(2025, 11, 24), "DEN", "PHX")]);
        assert_eq!(fetched.parse_errors, 0);
    }

    #[test]
    fn test_parse_scoreboard_counts_fallbacks() {
        let response = ScoreboardResponse {
            events: vec![
                event(
                    "Final",
                    "2025-11-25T00:30Z",
                    vec![competitor("home", "MIA"), competitor("away", "ORL")],
                ),
                event(
                    "Postponed",
                    "2025-11-26T00:30Z",
                    vec![competitor("home", "SA"), competitor("away", "NO")],
                ),
            ],
        };

        let fetched = parse_scoreboard(&response);
        assert_eq!(fetched.parse_errors, 2);
        assert_eq!(fetched.games[0].date, ymd(2025, 11, 25));
        assert_eq!(fetched.games[1], Game::new(ymd(2025, 11, 26), "SAS", "NOP"));
    }

    #[test]
    fn test_one_team_final_event_is_not_a_parse_error() {
        let response = ScoreboardResponse {
            events: vec![event("Final", "2025-11-25T00:30Z", vec![competitor("home", "LAL")])],
        };

        let fetched = parse_scoreboard(&response);
        assert!(fetched.games.is_empty());
        assert_eq!(fetched.parse_errors, 0);
    }

    #[tokio::test]
    async fn test_fetch_week_schedule_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SCOREBOARD_PATH))
            .and(query_param("dates", "20251124-20251130"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
            .mount(&mock_server)
            .await;

        let fetched = fetch_fixture_week(&mock_server).await.unwrap();
        assert_eq!(fetched.games.len(), 7);
        assert_eq!(fetched.parse_errors, 1);
        assert!(
            fetched
                .games
                .contains(&Game::new(ymd(2025, 11, 24), "BOS", "WAS"))
        );
        assert!(
            fetched
                .games
                .contains(&Game::new(ymd(2025, 11, 26), "MIL", "NYK"))
        );
    }

    #[tokio::test]
    async fn test_fetch_week_schedule_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SCOREBOARD_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = fetch_fixture_week(&mock_server).await;
        assert!(matches!(
            result,
            Err(AppError::ApiServerError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_week_schedule_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SCOREBOARD_PATH))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = fetch_fixture_week(&mock_server).await;
        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_week_schedule_html_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SCOREBOARD_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body>Service unavailable</body></html>"),
            )
            .mount(&mock_server)
            .await;

        let result = fetch_fixture_week(&mock_server).await;
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }
}
