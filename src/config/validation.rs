use crate::constants::lineup::SLOTS_PER_SIDE;
use crate::error::AppError;
use crate::lineup::Roster;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `api_domain` - The API domain to validate
/// * `log_file_path` - Optional log file path to validate
/// * `http_timeout_seconds` - Request timeout
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a valid URL or domain name
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_domain: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    // Without a protocol it should at least look like a domain
    if !api_domain.starts_with("http://")
        && !api_domain.starts_with("https://")
        && !api_domain.contains('.')
        && !api_domain.starts_with("localhost")
    {
        return Err(AppError::config_error(
            "API domain must be a valid URL or domain name",
        ));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Validates a roster: each position group needs exactly five non-empty codes.
/// The same team may fill several slots.
pub fn validate_roster(roster: &Roster) -> Result<(), AppError> {
    for (side, codes) in [
        ("frontcourt", &roster.frontcourt),
        ("backcourt", &roster.backcourt),
    ] {
        if codes.len() != SLOTS_PER_SIDE {
            return Err(AppError::invalid_roster(format!(
                "{side} needs {SLOTS_PER_SIDE} teams, got {}",
                codes.len()
            )));
        }
        if codes.iter().any(|code| code.trim().is_empty()) {
            return Err(AppError::invalid_roster(format!(
                "{side} contains an empty team code"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_config_accepts_defaults() {
        assert!(validate_config("https://site.api.espn.com", &None, 30).is_ok());
        assert!(validate_config("localhost:8080", &None, 30).is_ok());
        assert!(validate_config("api.example.com", &None, 30).is_ok());
    }

    #[test]
    fn test_validate_config_rejects_bad_domain() {
        assert!(matches!(
            validate_config("", &None, 30),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            validate_config("not-a-domain", &None, 30),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_validate_config_rejects_zero_timeout() {
        assert!(validate_config("https://site.api.espn.com", &None, 0).is_err());
    }

    #[test]
    fn test_validate_config_log_path() {
        assert!(validate_config("https://site.api.espn.com", &Some(String::new()), 30).is_err());

        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("app.log");
        let log_path = Some(log_path.to_string_lossy().to_string());
        assert!(validate_config("https://site.api.espn.com", &log_path, 30).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }

    #[test]
    fn test_validate_roster() {
        assert!(validate_roster(&Roster::default()).is_ok());

        let short = Roster::new(codes(&["BOS", "CHA"]), codes(&["OKC", "PHI", "PHI", "UTA", "MIL"]));
        let err = validate_roster(&short).unwrap_err();
        assert_eq!(err.to_string(), "Invalid roster: frontcourt needs 5 teams, got 2");

        let blank = Roster::new(
            codes(&["BOS", "CHA", "DEN", "WAS", "POR"]),
            codes(&["OKC", " ", "PHI", "UTA", "MIL"]),
        );
        assert!(matches!(
            validate_roster(&blank),
            Err(AppError::InvalidRoster(_))
        ));
    }
}
