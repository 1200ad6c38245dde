//! CLI configuration parsed from environment variables.
//!
//! Settings can be supplied via environment variables prefixed with
//! `VEREXPR_` and overridden by command line flags.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CliError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so normal output stays quiet on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LogLevel {
    /// Every classified unit.
    Trace,
    /// Ignored units and their reasons.
    Debug,
    /// Catalog loading summaries.
    Info,
    /// Potential problems only.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub(crate) fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Resolved CLI settings.
///
/// # Environment Variables
///
/// - `VEREXPR_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `VEREXPR_CATALOG`: path of the version catalog file
#[derive(Debug, Clone, Default)]
pub(crate) struct CliConfig {
    /// Log level for the stderr subscriber.
    pub log_level: LogLevel,
    /// Catalog file, if configured.
    pub catalog: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub(crate) fn from_env() -> Result<Self, CliError> {
        Self::from_vars(
            env::var("VEREXPR_LOG_LEVEL").ok(),
            env::var_os("VEREXPR_CATALOG"),
        )
    }

    fn from_vars(log_level: Option<String>, catalog: Option<OsString>) -> Result<Self, CliError> {
        let log_level = log_level
            .map(|val| val.parse::<LogLevel>())
            .transpose()?
            .unwrap_or_default();
        let catalog = catalog.filter(|path| !path.is_empty()).map(PathBuf::from);
        Ok(Self { log_level, catalog })
    }

    /// Apply optional command line overrides on top of the environment.
    #[must_use]
    pub(crate) fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        catalog: Option<PathBuf>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(path) = catalog {
            self.catalog = Some(path);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("DEBUG", LogLevel::Debug)]
    #[case("Info", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_case_insensitively(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let Err(err) = "loud".parse::<LogLevel>() else {
            panic!("invalid log level should fail");
        };
        assert!(err.to_string().contains("unknown log level 'loud'"));
    }

    #[test]
    fn defaults_to_warn_without_catalog() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn reads_values_from_variables() {
        let config = match CliConfig::from_vars(
            Some("debug".into()),
            Some(OsString::from("versions.json")),
        ) {
            Ok(config) => config,
            Err(err) => panic!("variables should parse: {err}"),
        };
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.catalog, Some(PathBuf::from("versions.json")));
    }

    #[test]
    fn ignores_empty_catalog_variable() {
        let config = match CliConfig::from_vars(None, Some(OsString::new())) {
            Ok(config) => config,
            Err(err) => panic!("variables should parse: {err}"),
        };
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn overrides_take_precedence() {
        let config = CliConfig {
            log_level: LogLevel::Info,
            catalog: Some(PathBuf::from("env.txt")),
        }
        .apply_overrides(Some(LogLevel::Error), Some(PathBuf::from("flag.txt")));
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.catalog, Some(PathBuf::from("flag.txt")));

        let untouched = CliConfig::default().apply_overrides(None, None);
        assert_eq!(untouched.log_level, LogLevel::Warn);
    }
}
