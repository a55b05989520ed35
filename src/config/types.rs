//! Configuration types and CLI options.
//!
//! This module defines the transport configuration used by the library and
//! the command-line options of the `score_events` binary.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CONNECT_TIMEOUT, CONNECT_TIMEOUT_MS, DEFAULT_USER_AGENT, ENDPOINT_ENV_VAR, REQUEST_TIMEOUT,
    REQUEST_TIMEOUT_MS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Settings of an event transport.
///
/// Both timeouts bound a single post: `connect_timeout` covers TCP connection
/// establishment, `request_timeout` the whole exchange.
///
/// # Examples
///
/// ```
/// use score_events::TransportConfig;
/// use std::time::Duration;
///
/// let config = TransportConfig {
///     request_timeout: Duration::from_millis(750),
///     ..Default::default()
/// };
/// assert_eq!(config.connect_timeout, Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// TCP connection timeout
    pub connect_timeout: Duration,
    /// Total request timeout
    pub request_timeout: Duration,
    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Command-line options of the `score_events` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "score_events",
    version,
    about = "Builds a score event from a play record and posts it to an HTTP endpoint"
)]
pub struct Config {
    /// JSON file holding a play record (`score`, `beatmap`, `extras`)
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Endpoint URL to post the event to
    #[arg(long, short = 'u', env = ENDPOINT_ENV_VAR)]
    pub url: Option<String>,

    /// Print the event document instead of posting it
    #[arg(long)]
    pub dry_run: bool,

    /// TCP connect timeout in milliseconds
    #[arg(long, default_value_t = CONNECT_TIMEOUT_MS)]
    pub connect_timeout_ms: u64,

    /// Total request timeout in milliseconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Config {
    /// Transport settings derived from the command-line options.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.timeout_ms),
            user_agent: self.user_agent.clone(),
        }
    }
}
