//! Configuration module for the keeper engine.
//!
//! Loads league settings from YAML with environment variable interpolation
//! and validates them before any roster is evaluated.
//!
//! # Usage
//!
//! ```rust,ignore
//! use keeper_engine::config::load_config;
//!
//! // Load from default path (league.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("leagues/dynasty.yaml"))?;
//!
//! println!("rounds: {}", config.league.round_count.rounds());
//! ```

mod observability;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::league::LeagueSettings;

pub use observability::{LOG_FORMATS, LOG_LEVELS, LoggingConfig, ObservabilityConfig};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// League rules. Required; every fee and cap threshold must be given.
    pub league: LeagueSettings,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "league.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("league.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let default_value = caps.get(2).map_or("", |m| m.as_str());
        match caps.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(v)) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    config
        .league
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    let logging = &config.observability.logging;
    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level must be one of: {LOG_LEVELS:?}"
        )));
    }
    if !LOG_FORMATS.contains(&logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Money;
    use std::io::Write;

    const LEAGUE_YAML: &str = r#"
league:
  id: dynasty
  name: "Dynasty League"
  round_count: 13
  cap:
    first_apron: 195000000
    second_apron: 225000000
    max: 255000000
    floor: 170000000
  fees:
    franchise_tag_fee: 15
    redshirt_fee: 10
    redshirt_activation_fee: 25
    first_apron_fee: 50
    penalty_rate_per_m: 2
  limits:
    max_keepers: 8
    max_active: 13
    max_injured_reserve: 2
"#;

    #[test]
    fn test_load_league_config() {
        let config = match load_config_from_string(LEAGUE_YAML) {
            Ok(c) => c,
            Err(e) => panic!("should load league config: {e}"),
        };
        assert_eq!(config.league.round_count.rounds(), 13);
        assert_eq!(config.league.cap.second_apron, Money::millions(225));
        assert_eq!(config.league.fees.penalty_rate_per_m, Money::whole(2));
        assert_eq!(config.observability.logging.level, "info");
        assert!(config.league.regular_season_start.is_none());
    }

    #[test]
    fn test_missing_league_section_fails() {
        let yaml = r"
observability:
  logging:
    level: debug
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected parse error for missing league");
        };
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_fee_field_fails() {
        let yaml = LEAGUE_YAML.replace("    penalty_rate_per_m: 2\n", "");
        assert!(matches!(
            load_config_from_string(&yaml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_activation_fee_fails() {
        let yaml = LEAGUE_YAML.replace("    redshirt_activation_fee: 25\n", "");
        let Err(err) = load_config_from_string(&yaml) else {
            panic!("expected parse error for missing activation fee");
        };
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().contains("redshirt_activation_fee"));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let yaml = LEAGUE_YAML.replace("round_count: 13", "round_count: 0");
        assert!(load_config_from_string(&yaml).is_err());
    }

    #[test]
    fn test_validation_apron_order() {
        let yaml = LEAGUE_YAML.replace("second_apron: 225000000", "second_apron: 190000000");
        let Err(err) = load_config_from_string(&yaml) else {
            panic!("expected error for apron ordering");
        };
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("second_apron"));
    }

    #[test]
    fn test_validation_log_format() {
        let yaml = format!("{LEAGUE_YAML}observability:\n  logging:\n    format: xml\n");
        let Err(err) = load_config_from_string(&yaml) else {
            panic!("expected error for log format");
        };
        assert!(err.to_string().contains("format"));
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "round_count: ${KEEPER_CONFIG_TEST_NONEXISTENT_VAR:-14}";
        assert_eq!(interpolate_env_vars(input), "round_count: 14");
    }

    #[test]
    // ${...} is env var syntax, not format args
    #[allow(clippy::literal_string_with_formatting_args)]
    fn test_env_var_with_default_uses_existing() {
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);
        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "name: ${KEEPER_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "name: ");
    }

    #[test]
    fn test_interpolated_season_start() {
        let yaml = format!(
            "{LEAGUE_YAML}  regular_season_start: \
             \"${{KEEPER_CONFIG_TEST_SEASON_START:-2025-10-21T23:00:00Z}}\"\n"
        );
        let config = load_config_from_string(&yaml).unwrap();
        assert!(config.league.regular_season_start.is_some());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LEAGUE_YAML.as_bytes()).unwrap();

        let path = file.path().to_str().unwrap();
        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.league.id.as_str(), "dynasty");
    }

    #[test]
    fn test_load_config_missing_file() {
        let Err(err) = load_config(Some("/nonexistent/league.yaml")) else {
            panic!("expected read error");
        };
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
