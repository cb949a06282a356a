use std::fmt;
use std::env;
use std::path::PathBuf;
use crate::screen_factory::ScreenFactory;

pub const DEFAULT_UPTIME_FILE: &str = "/proc/uptime";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub interval_seconds: u64,
    pub screen_duration_secs: u64,
    pub enabled_screens: Vec<String>,
    pub countdown_secs: u64,
    pub countdown_repeat: bool,
    pub uptime_file: PathBuf,
    pub snapshot_file: Option<PathBuf>,
    pub once: bool,
    pub clear_only: bool,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 1,
            screen_duration_secs: 10,
            enabled_screens: vec!["overview".to_string()],
            countdown_secs: 20 * 60,
            countdown_repeat: true,
            uptime_file: PathBuf::from(DEFAULT_UPTIME_FILE),
            snapshot_file: None,
            once: false,
            clear_only: false,
            verbose: false,
        }
    }
}

fn parse_positive(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|n| *n > 0)
}

fn parse_flag(value: &str) -> bool {
    value.to_lowercase() == "true" || value == "1"
}

impl AppConfig {
    pub fn enabled_screens_as_str_refs(&self) -> Vec<&str> {
        self.enabled_screens.iter().map(|s| s.as_str()).collect()
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_vars();
        config
    }

    pub fn apply_env_vars(&mut self) {
        // Interval
        if let Some(interval) = env::var("UPTIME_DISPLAY_INTERVAL").ok().as_deref().and_then(parse_positive) {
            self.interval_seconds = interval;
        }

        // Screen duration
        if let Some(duration) = env::var("UPTIME_DISPLAY_SCREEN_DURATION").ok().as_deref().and_then(parse_positive) {
            self.screen_duration_secs = duration;
        }

        // Enabled screens
        if let Ok(screens_str) = env::var("UPTIME_DISPLAY_SCREENS") {
            let screens: Vec<String> = screens_str
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty() && ScreenFactory::validate_screen_type(s))
                .collect();
            if !screens.is_empty() {
                self.enabled_screens = screens;
            }
        }

        // Countdown
        if let Some(secs) = env::var("UPTIME_DISPLAY_COUNTDOWN").ok().as_deref().and_then(parse_positive) {
            self.countdown_secs = secs;
        }

        if let Ok(repeat_str) = env::var("UPTIME_DISPLAY_COUNTDOWN_REPEAT") {
            self.countdown_repeat = parse_flag(&repeat_str);
        }

        // Uptime sources
        if let Ok(path) = env::var("UPTIME_DISPLAY_UPTIME_FILE") {
            if !path.trim().is_empty() {
                self.uptime_file = PathBuf::from(path);
            }
        }

        if let Ok(path) = env::var("UPTIME_DISPLAY_SNAPSHOT_FILE") {
            if !path.trim().is_empty() {
                self.snapshot_file = Some(PathBuf::from(path));
            }
        }

        if let Ok(once_str) = env::var("UPTIME_DISPLAY_ONCE") {
            self.once = parse_flag(&once_str);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_seconds == 0 {
            return Err(ConfigError::InvalidInterval);
        }

        if self.screen_duration_secs == 0 {
            return Err(ConfigError::InvalidScreenDuration);
        }

        if self.countdown_secs == 0 {
            return Err(ConfigError::InvalidCountdown);
        }

        if self.enabled_screens.is_empty() {
            return Err(ConfigError::NoScreensEnabled);
        }

        for screen in &self.enabled_screens {
            if !ScreenFactory::validate_screen_type(screen) {
                return Err(ConfigError::InvalidScreen(screen.clone()));
            }
        }

        Ok(())
    }

    pub fn add_screen(&mut self, screen: &str) {
        // Replace default overview with first specific screen
        if self.enabled_screens == vec!["overview"] && screen != "overview" {
            self.enabled_screens = vec![screen.to_string()];
        } else if !self.enabled_screens.contains(&screen.to_string()) {
            self.enabled_screens.push(screen.to_string());
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidInterval,
    InvalidScreenDuration,
    InvalidCountdown,
    NoScreensEnabled,
    InvalidScreen(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidInterval => write!(f, "Update interval must be greater than 0"),
            ConfigError::InvalidScreenDuration => write!(f, "Screen duration must be greater than 0"),
            ConfigError::InvalidCountdown => write!(f, "Countdown length must be greater than 0"),
            ConfigError::NoScreensEnabled => write!(f, "At least one screen must be enabled"),
            ConfigError::InvalidScreen(screen) => write!(f, "Invalid screen type: {}", screen),
        }
    }
}

impl std::error::Error for ConfigError {}
