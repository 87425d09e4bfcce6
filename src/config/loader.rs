use super::types::{Config, ConfigError};
use crate::debug_println;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured locale
pub const LOCALE_ENV: &str = "GA4COST_LOCALE";

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the config file path (~/.ga4cost/config.toml)
    pub fn get_config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".ga4cost").join("config.toml")
        } else {
            PathBuf::from(".ga4cost/config.toml")
        }
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Config, ConfigError> {
        let config_path = ConfigLoader::get_config_path();
        debug_println!("config: loading {}", config_path.display());

        let mut config = if config_path.exists() {
            ConfigLoader::load_from_path(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment overrides on top of file values
    pub fn apply_env_overrides(&mut self) {
        if let Ok(locale) = std::env::var(LOCALE_ENV) {
            if !locale.trim().is_empty() {
                debug_println!("config: locale overridden by {}={}", LOCALE_ENV, locale);
                self.locale = locale;
            }
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Initialize config directory and create default config
    pub fn init() -> Result<(), ConfigError> {
        let config_path = ConfigLoader::get_config_path();

        if Self::init_at(&config_path)? {
            println!("Created config at {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }

        Ok(())
    }

    /// Write the default config to `path` unless a file is already there.
    /// Returns whether a file was created.
    pub fn init_at<P: AsRef<Path>>(path: P) -> Result<bool, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Ok(false);
        }

        Config::default().save_to(path)?;
        Ok(true)
    }

    /// Validate configuration
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.locale.trim().is_empty() {
            return Err(ConfigError::Invalid("locale must not be empty".into()));
        }

        if !self.default_quantity.is_finite() || self.default_quantity < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "default_quantity must be a non-negative number, got {}",
                self.default_quantity
            )));
        }

        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "step must be greater than 0, got {}",
                self.step
            )));
        }

        Ok(())
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.locale, "pt_BR.UTF-8");
        assert_eq!(config.default_quantity, 55.0);
        assert_eq!(config.step, 10.0);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_init_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(Config::init_at(&path).unwrap());
        assert!(!Config::init_at(&path).unwrap());

        let loaded = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "locale = \"en_US\"\n").unwrap();

        let loaded = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(loaded.locale, "en_US");
        assert_eq!(loaded.default_quantity, 55.0);
        assert!(!loaded.show_breakdown);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "step = \"ten\"\n").unwrap();

        assert!(matches!(
            ConfigLoader::load_from_path(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_check_rejects_bad_values() {
        let mut config = Config::default();
        config.step = 0.0;
        assert!(matches!(config.check(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.default_quantity = -1.0;
        assert!(config.check().is_err());

        let mut config = Config::default();
        config.default_quantity = f64::NAN;
        assert!(config.check().is_err());

        let mut config = Config::default();
        config.locale = "  ".to_string();
        assert!(config.check().is_err());
    }
}
