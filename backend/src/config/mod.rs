//! Configuration module for the campus board backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for API authentication (required in production)
    pub api_psk: Option<String>,
    /// Path to the JSON data file
    pub data_path: PathBuf,
    /// Truncate the data file to an empty document at startup
    pub reset_on_start: bool,
    /// Reject registrations whose student number or username already exists
    pub reject_duplicates: bool,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of the human-readable format
    pub log_json: bool,
    pub smtp: SmtpConfig,
}

/// Outbound mail settings for registration notices.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Sender address; not validated until a send is attempted
    pub sender_email: Option<String>,
    pub sender_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_psk = env::var("CAMPUS_API_PSK").ok();

        let data_path = env::var("CAMPUS_DATA_PATH")
            .unwrap_or_else(|_| "student_data.json".to_string())
            .into();

        let reset_on_start = parse_flag("CAMPUS_RESET_ON_START", true)?;
        let reject_duplicates = parse_flag("CAMPUS_REJECT_DUPLICATES", false)?;

        let bind_addr = env::var("CAMPUS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid CAMPUS_BIND_ADDR format: {}", e)))?;

        let log_level = env::var("CAMPUS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_json = env::var("CAMPUS_LOG_FORMAT")
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let port = env::var("CAMPUS_SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid CAMPUS_SMTP_PORT: {}", e)))?;

        let smtp = SmtpConfig {
            host: env::var("CAMPUS_SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            port,
            sender_email: env::var("SENDER_EMAIL").ok(),
            sender_password: env::var("SENDER_PASSWORD").ok(),
        };

        Ok(Self {
            api_psk,
            data_path,
            reset_on_start,
            reject_duplicates,
            bind_addr,
            log_level,
            log_json,
            smtp,
        })
    }
}

fn parse_flag(name: &str, default: bool) -> Result<bool, AppError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(AppError::Config(format!("Invalid {}: {}", name, other))),
        },
    }
}
