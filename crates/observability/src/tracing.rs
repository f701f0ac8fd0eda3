//! Tracing/logging initialization.
//!
//! Configured from the environment:
//! - `RUST_LOG`: filter directives (default `info`)
//! - `STOREFRONT_LOG_FORMAT`: `json` (default) or `pretty`

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format `{0}` (expected `json` or `pretty`)")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => Err(UnknownLogFormat(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TracingConfig {
    pub format: LogFormat,
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_format_var(std::env::var(LOG_FORMAT_VAR).ok().as_deref())
    }

    fn from_format_var(value: Option<&str>) -> Self {
        let format = match value.map(LogFormat::from_str) {
            None => LogFormat::default(),
            Some(Ok(format)) => format,
            Some(Err(err)) => {
                // No subscriber yet, so this cannot go through tracing.
                eprintln!("{err}; falling back to json");
                LogFormat::default()
            }
        };
        Self { format }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &TracingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" Pretty ".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown log format `xml` (expected `json` or `pretty`)"
        );
    }

    #[test]
    fn missing_or_bad_var_falls_back_to_json() {
        assert_eq!(TracingConfig::from_format_var(None).format, LogFormat::Json);
        assert_eq!(TracingConfig::from_format_var(Some("xml")).format, LogFormat::Json);
        assert_eq!(
            TracingConfig::from_format_var(Some("pretty")).format,
            LogFormat::Pretty
        );
    }

    #[test]
    fn init_is_idempotent() {
        let config = TracingConfig::default();
        init(&config);
        init(&config);
        ::tracing::info!("still logging after repeated init");
    }
}
