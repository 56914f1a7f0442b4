//! Counter configuration with persistence.
//!
//! This module provides the [`CounterConfig`] structure for the settings the
//! front-end forwards to [`AmountDisplay`](crate::widgets::AmountDisplay).
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/countup/config.json`
//! - macOS: `~/Library/Application Support/countup/config.json`
//! - Windows: `%APPDATA%/countup/config.json`
//!
//! Missing fields fall back to the standard currency configuration, so an
//! empty `{}` file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::constants::{APP_NAME, AMOUNT_DECIMAL, AMOUNT_DECIMALS, AMOUNT_DURATION, AMOUNT_PREFIX};
use crate::counter::{
    CountUpError, CountUpOptions, CountUpResult, Easing, FormatOptions, SmartEasing,
};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// CounterConfig
// ============================================================================

/// Persisted counter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Length of one run in seconds.
    pub duration_secs: f64,
    /// Digits after the decimal mark.
    pub decimals: u8,
    /// Decimal mark.
    pub decimal: String,
    /// Thousands separator, empty for none.
    pub separator: String,
    /// Text before the number.
    pub prefix: String,
    /// Text after the number.
    pub suffix: String,
    /// Value every run starts from.
    pub start: f64,
    /// Curve of the final segment.
    pub easing: Easing,
    /// Whether long runs use smart easing.
    pub smart_easing: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_secs: AMOUNT_DURATION.as_secs_f64(),
            decimals: AMOUNT_DECIMALS,
            decimal: AMOUNT_DECIMAL.to_string(),
            separator: String::new(),
            prefix: AMOUNT_PREFIX.to_string(),
            suffix: String::new(),
            start: 0.0,
            easing: Easing::OutExpo,
            smart_easing: true,
        }
    }
}

impl CounterConfig {
    /// Returns the path to the configuration file. Nothing is created.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        Ok(Self::path_in(base))
    }

    /// Location of the configuration file under `base`.
    fn path_in(base: PathBuf) -> PathBuf {
        base.join(APP_NAME).join(CONFIG_FILE)
    }

    /// Loads the configuration from disk, or the defaults if that fails.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid configuration.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Saves the configuration to disk, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the configuration
    /// cannot be serialized or the file cannot be written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Builds the count-up options these settings describe.
    ///
    /// # Errors
    ///
    /// Returns an error for a negative or non-finite duration, or a
    /// non-finite start value.
    pub fn to_options(&self) -> CountUpResult<CountUpOptions> {
        let duration = std::time::Duration::try_from_secs_f64(self.duration_secs)
            .map_err(|_| CountUpError::InvalidDuration(self.duration_secs))?;
        if !self.start.is_finite() {
            return Err(CountUpError::non_finite("start", self.start));
        }

        Ok(CountUpOptions {
            start: self.start,
            duration,
            easing: self.easing,
            smart_easing: self.smart_easing.then(SmartEasing::default),
            format: FormatOptions {
                decimals: self.decimals,
                decimal: self.decimal.clone(),
                separator: self.separator.clone(),
                prefix: self.prefix.clone(),
                suffix: self.suffix.clone(),
            },
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::AmountDisplay;
    use rstest::*;

    #[test]
    fn test_default_matches_amount_display() {
        let options = CounterConfig::default().to_options().unwrap();
        assert_eq!(options, AmountDisplay::default_options());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = CounterConfig::from_json("{}").unwrap();
        assert_eq!(config, CounterConfig::default());
    }

    #[test]
    fn test_partial_json_overrides_fields() {
        let config =
            CounterConfig::from_json(r#"{"prefix":"$","separator":",","easing":"linear"}"#)
                .unwrap();
        assert_eq!(config.prefix, "$");
        assert_eq!(config.separator, ",");
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = CounterConfig {
            suffix: " INR".to_string(),
            smart_easing: false,
            ..CounterConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CounterConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(CounterConfig::from_json("not json").is_err());
        assert!(CounterConfig::from_json(r#"{"decimals":-1}"#).is_err());
    }

    #[rstest]
    #[case::negative(-1.0)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn test_invalid_duration(#[case] duration_secs: f64) {
        let config = CounterConfig {
            duration_secs,
            ..CounterConfig::default()
        };
        assert!(matches!(
            config.to_options(),
            Err(CountUpError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_smart_easing_toggle() {
        let config = CounterConfig {
            smart_easing: false,
            ..CounterConfig::default()
        };
        assert_eq!(config.to_options().unwrap().smart_easing, None);
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("countup-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_path_in_creates_nothing() {
        let base = scratch_dir("path");
        let path = CounterConfig::path_in(base.clone());

        assert_eq!(path, base.join(APP_NAME).join(CONFIG_FILE));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
        assert!(!base.exists());
    }

    #[test]
    fn test_save_creates_directory_and_loads_back() {
        let base = scratch_dir("save");
        let path = CounterConfig::path_in(base.clone());
        let config = CounterConfig {
            prefix: "$".to_string(),
            ..CounterConfig::default()
        };

        assert!(CounterConfig::load_from(&path).is_err());
        config.save_to(&path).unwrap();
        assert_eq!(CounterConfig::load_from(&path).unwrap(), config);

        fs::remove_dir_all(&base).unwrap();
    }
}
