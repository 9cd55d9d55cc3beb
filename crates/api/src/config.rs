//! # API Configuration Module
//!
//! Loads the Timetabler server settings from environment variables, with
//! defaults where a sensible one exists.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `CATALOG_PATH`: Path to the course catalog JSON document (required)
//! - `DATABASE_URL`: PostgreSQL connection string (optional; without it the
//!   selected schedules live in memory)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `GENERATOR_MAX_TIMETABLES`: Accepted-candidate cap per run (default: 100)
//! - `CATALOG_SEARCH_LIMIT`: Maximum course search hits (default: 50)

use eyre::{Result, WrapErr};
use std::{env, path::PathBuf};
use timetabler_core::generator::DEFAULT_MAX_TIMETABLES;
use tracing::Level;

pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Configuration for the Timetabler API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use timetabler_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Course catalog document loaded once at startup
    pub catalog_path: PathBuf,

    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Enumeration stops after this many accepted timetables
    pub max_timetables: usize,

    /// Upper bound on catalog search results
    pub search_limit: usize,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The CATALOG_PATH environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - GENERATOR_MAX_TIMETABLES or CATALOG_SEARCH_LIMIT is not a positive integer
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Data sources
        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .wrap_err("CATALOG_PATH environment variable must be set")?;
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Generator settings
        let max_timetables = positive_var("GENERATOR_MAX_TIMETABLES", DEFAULT_MAX_TIMETABLES)?;
        let search_limit = positive_var("CATALOG_SEARCH_LIMIT", DEFAULT_SEARCH_LIMIT)?;

        Ok(Self {
            host,
            port,
            catalog_path,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            max_timetables,
            search_limit,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Unknown level names fall back to `INFO`.
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn positive_var(name: &str, default: usize) -> Result<usize> {
    let Ok(raw) = env::var(name) else {
        return Ok(default);
    };

    let value: usize = raw
        .trim()
        .parse()
        .wrap_err_with(|| format!("Invalid {} value", name))?;
    if value == 0 {
        eyre::bail!("{} must be greater than zero", name);
    }
    Ok(value)
}
