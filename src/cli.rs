use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use fantasy_hoops_week::constants::DEFAULT_SAVE_FILE;
use fantasy_hoops_week::lineup::Roster;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Weekly fantasy basketball lineup planner
///
/// Fetches one Monday-to-Sunday week of NBA games and shows, for each day,
/// which of your frontcourt (FC) and backcourt (BC) teams play and which
/// complete lineups (3 FC + 2 BC or 2 FC + 3 BC) you can field.
///
/// The roster is read from the config file (or built-in defaults) and can be
/// overridden with --fc and --bc.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Week start in YYYY-MM-DD format. Non-Monday dates snap back to the Monday of that week.
    /// If not provided, you are prompted; a blank answer selects the next Monday.
    #[arg(short = 'w', long = "week", value_name = "DATE")]
    pub week: Option<String>,

    /// Frontcourt team codes, comma separated (e.g. "BOS,CHA,DEN,WAS,POR").
    /// The same team may be listed more than once.
    #[arg(long = "fc", value_name = "CODES", help_heading = "Roster")]
    pub frontcourt: Option<String>,

    /// Backcourt team codes, comma separated (e.g. "OKC,PHI,PHI,UTA,MIL").
    #[arg(long = "bc", value_name = "CODES", help_heading = "Roster")]
    pub backcourt: Option<String>,

    /// Store the roster in effect for this run in the config file.
    #[arg(long = "save-roster", help_heading = "Roster")]
    pub save_roster: bool,

    /// Save the full per-day results as JSON.
    #[arg(
        short = 's',
        long = "save",
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_SAVE_FILE,
        help_heading = "Output"
    )]
    pub save: Option<String>,

    /// Disable colors in the report.
    #[arg(long = "plain", short = 'p', help_heading = "Output")]
    pub plain: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror log output to stderr in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// `base` with any --fc/--bc overrides applied.
    pub fn roster_with_overrides(&self, base: &Roster) -> Roster {
        Roster {
            frontcourt: self
                .frontcourt
                .as_deref()
                .map(Roster::parse_codes)
                .unwrap_or_else(|| base.frontcourt.clone()),
            backcourt: self
                .backcourt
                .as_deref()
                .map(Roster::parse_codes)
                .unwrap_or_else(|| base.backcourt.clone()),
        }
    }
}
