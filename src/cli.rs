use std::path::PathBuf;
use clap::Parser;
use crate::config::{AppConfig, ConfigError};
use crate::screen_factory::ScreenFactory;

const ENV_HELP: &str = "\
Environment Variables:
  UPTIME_DISPLAY_INTERVAL=<seconds>         Refresh interval
  UPTIME_DISPLAY_SCREEN_DURATION=<seconds>  Screen duration
  UPTIME_DISPLAY_SCREENS=<screen1,screen2>  Enabled screens (uptime,countdown,overview)
  UPTIME_DISPLAY_COUNTDOWN=<seconds>        Countdown length
  UPTIME_DISPLAY_COUNTDOWN_REPEAT=<true|false>  Restart the countdown when it runs out
  UPTIME_DISPLAY_UPTIME_FILE=<path>         Text file holding uptime seconds first
  UPTIME_DISPLAY_SNAPSHOT_FILE=<path>       JSON monitoring snapshot
  UPTIME_DISPLAY_ONCE=<true|false>          Render once and exit";

fn help_footer() -> String {
    let descriptions = ScreenFactory::get_screen_descriptions();
    let mut footer = String::from("Screens:\n");
    for screen in ScreenFactory::get_available_screens() {
        let description = descriptions.get(screen).copied().unwrap_or_default();
        footer.push_str(&format!("  {:<12}{}\n", screen, description));
    }
    footer.push('\n');
    footer.push_str(ENV_HELP);
    footer
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "uptime_display",
    version = env!("CARGO_PKG_VERSION"),
    about = "System uptime and countdown timer in the terminal",
    after_help = help_footer()
)]
pub struct Args {
    /// Refresh interval in seconds
    #[arg(short, long, value_name = "N")]
    pub interval: Option<u64>,

    /// Duration each screen is shown
    #[arg(short = 's', long, value_name = "N")]
    pub screen_duration: Option<u64>,

    /// Comma-separated list of screens (uptime,countdown,overview)
    #[arg(long, value_delimiter = ',', value_name = "LIST")]
    pub screens: Option<Vec<String>>,

    /// Enable uptime screen
    #[arg(long)]
    pub uptime: bool,

    /// Enable countdown screen
    #[arg(long)]
    pub countdown: bool,

    /// Enable overview screen (default)
    #[arg(long)]
    pub overview: bool,

    /// Countdown length in seconds
    #[arg(short = 'c', long, value_name = "N")]
    pub countdown_secs: Option<u64>,

    /// Stop at 0:00 instead of restarting the countdown
    #[arg(long)]
    pub no_repeat: bool,

    /// Text file whose first field is the uptime in seconds
    #[arg(long, value_name = "PATH")]
    pub uptime_file: Option<PathBuf>,

    /// JSON monitoring snapshot to read uptime from
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Render a single frame and exit
    #[arg(long)]
    pub once: bool,

    /// Clear the terminal and exit
    #[arg(long)]
    pub clear: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

pub struct CliParser;

impl CliParser {
    pub fn parse() -> Result<AppConfig, ConfigError> {
        // Start with environment variables
        Self::apply(AppConfig::from_env(), Args::parse())
    }

    pub fn apply(mut config: AppConfig, args: Args) -> Result<AppConfig, ConfigError> {
        if let Some(seconds) = args.interval {
            config.interval_seconds = seconds;
        }
        if let Some(seconds) = args.screen_duration {
            config.screen_duration_secs = seconds;
        }
        if let Some(screens) = args.screens {
            config.enabled_screens = screens.into_iter().map(|s| s.trim().to_string()).collect();
        }
        if args.uptime {
            config.add_screen("uptime");
        }
        if args.countdown {
            config.add_screen("countdown");
        }
        if args.overview {
            config.add_screen("overview");
        }
        if let Some(seconds) = args.countdown_secs {
            config.countdown_secs = seconds;
        }
        if args.no_repeat {
            config.countdown_repeat = false;
        }
        if let Some(path) = args.uptime_file {
            config.uptime_file = path;
        }
        if let Some(path) = args.snapshot {
            config.snapshot_file = Some(path);
        }
        config.once |= args.once;
        config.clear_only |= args.clear;
        config.verbose |= args.verbose;

        // Validate the configuration before returning
        config.validate()?;
        Ok(config)
    }
}
