//! User configuration loaded from `~/.config/keycalc/config.toml`.
//!
//! Every field is optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculator::{DEFAULT_MAX_DIGITS, EngineOptions, Layout, NumberFormat, NumberLocale};
use crate::error::ConfigError;

/// Upper bound for `max_digits`; beyond this `f64` cannot hold typed
/// integers exactly.
const MAX_DIGITS_LIMIT: usize = 15;
/// Upper bound for `max_fraction_digits`.
const MAX_FRACTION_DIGITS_LIMIT: usize = 15;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of digits in a typed number.
    pub max_digits: usize,
    /// Fraction digits shown on the formatted display.
    pub max_fraction_digits: usize,
    pub layout: Layout,
    pub locale: NumberLocale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            max_fraction_digits: NumberFormat::default().max_fraction_digits,
            layout: Layout::default(),
            locale: NumberLocale::default(),
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
    }

    /// Load the config from an explicit path, or the default location.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_digits == 0 || self.max_digits > MAX_DIGITS_LIMIT {
            return Err(ConfigError::Invalid {
                field: "max_digits",
                reason: format!("must be between 1 and {MAX_DIGITS_LIMIT}"),
            });
        }
        if self.max_fraction_digits > MAX_FRACTION_DIGITS_LIMIT {
            return Err(ConfigError::Invalid {
                field: "max_fraction_digits",
                reason: format!("must be at most {MAX_FRACTION_DIGITS_LIMIT}"),
            });
        }
        if self.locale.decimal_separator.is_empty() {
            return Err(ConfigError::Invalid {
                field: "locale.decimal_separator",
                reason: "must not be empty".to_string(),
            });
        }
        if self.locale.grouping && self.locale.grouping_separator == self.locale.decimal_separator {
            return Err(ConfigError::Invalid {
                field: "locale.grouping_separator",
                reason: "must differ from the decimal separator".to_string(),
            });
        }
        Ok(())
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            max_digits: self.max_digits,
            number_format: NumberFormat::new(self.locale.clone(), self.max_fraction_digits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_digits, 9);
        assert_eq!(config.max_fraction_digits, 3);
        assert_eq!(config.layout, Layout::Basic);
        assert_eq!(config.locale.grouping_separator, ",");
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
            layout = "scientific"

            [locale]
            grouping_separator = "."
            decimal_separator = ","
            "#,
        )
        .unwrap();
        assert_eq!(config.layout, Layout::Scientific);
        assert_eq!(config.max_digits, 9);
        assert_eq!(config.locale.decimal_separator, ",");
        assert!(config.locale.grouping);
    }

    #[test]
    fn test_engine_options() {
        let config = Config::from_toml("max_digits = 12\nmax_fraction_digits = 5").unwrap();
        let options = config.engine_options();
        assert_eq!(options.max_digits, 12);
        assert_eq!(options.number_format.max_fraction_digits, 5);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::from_toml("max_digits = \"nine\""),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            Config::from_toml("unknown_field = 1"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(matches!(
            Config::from_toml("max_digits = 0"),
            Err(ConfigError::Invalid { field: "max_digits", .. })
        ));
        assert!(matches!(
            Config::from_toml("max_fraction_digits = 40"),
            Err(ConfigError::Invalid { field: "max_fraction_digits", .. })
        ));
        assert!(matches!(
            Config::from_toml("[locale]\ngrouping_separator = \".\""),
            Err(ConfigError::Invalid { field: "locale.grouping_separator", .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let path = std::env::temp_dir().join("keycalc-does-not-exist.toml");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("keycalc-test-{}.toml", std::process::id()));
        fs::write(&path, "max_digits = 4\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.max_digits, 4);
    }
}
