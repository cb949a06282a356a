use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Display(String),
    SystemInfo(String),
    Config(crate::config::ConfigError),
    Application(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Display(msg) => write!(f, "Display error: {}", msg),
            AppError::SystemInfo(msg) => write!(f, "System info error: {}", msg),
            AppError::Config(err) => write!(f, "Configuration error: {}", err),
            AppError::Application(msg) => write!(f, "Application error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::SystemInfo(format!("System error: {:#}", err))
    }
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, AppError>;

// Helper functions for creating errors
impl AppError {
    pub fn display(msg: &str) -> Self {
        AppError::Display(msg.to_string())
    }

    pub fn system_info(msg: &str) -> Self {
        AppError::SystemInfo(msg.to_string())
    }

    pub fn application(msg: &str) -> Self {
        AppError::Application(msg.to_string())
    }
}
