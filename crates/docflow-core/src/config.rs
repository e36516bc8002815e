//! Configuration module
//!
//! Settings come from the process environment. Loading an optional `.env` file is
//! left to the binary, which has to do it before argument parsing. None of the
//! settings influence the document simulation; they only shape the diagnostics
//! written alongside it.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::{AppError, AppResult};

const DEFAULT_ENVIRONMENT: &str = "development";

/// Output format for diagnostic logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(AppError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub environment: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("DOCFLOW_ENV")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let log_format = match lookup("DOCFLOW_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        tracing::debug!(%environment, %log_format, "configuration loaded");

        Ok(Config {
            environment,
            log_format,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        matches!(
            self.environment.to_lowercase().as_str(),
            "production" | "prod"
        )
    }
}
