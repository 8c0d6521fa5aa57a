//! ESPN to NBA team abbreviation mapping.

/// ESPN abbreviations that differ from the NBA's own three-letter codes.
/// The other 24 teams use the same code on both sides.
const ESPN_TO_NBA: &[(&str, &str)] = &[
    ("GS", "GSW"),
    ("NO", "NOP"),
    ("NY", "NYK"),
    ("SA", "SAS"),
    ("UTAH", "UTA"),
    ("WSH", "WAS"),
];

/// Translates an ESPN team abbreviation to the NBA code used by rosters.
/// Unknown abbreviations pass through unchanged.
///
/// # Examples
///
/// ```
/// use fantasy_hoops_week::data_fetcher::processors::to_nba_code;
///
/// assert_eq!(to_nba_code("GS"), "GSW");
/// assert_eq!(to_nba_code("BOS"), "BOS");
/// assert_eq!(to_nba_code("XYZ"), "XYZ");
/// ```
pub fn to_nba_code(espn_abbr: &str) -> String {
    ESPN_TO_NBA
        .iter()
        .find(|(espn, _)| *espn == espn_abbr)
        .map(|(_, nba)| (*nba).to_string())
        .unwrap_or_else(|| espn_abbr.to_string())
}
