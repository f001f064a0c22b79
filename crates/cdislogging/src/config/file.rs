//! File-based logging configuration (YAML or JSON)
//!
//! Supports user-level (~/.config/cdislogging/logging.yaml) and
//! workspace-level (.config/cdislogging/logging.yaml) files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoggingError;
use crate::level::Level;
use crate::logger::Logger;
use crate::registry::Registry;

/// Errors that can occur while loading or applying a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config file extension: {0}")]
    UnsupportedFormat(String),

    #[error("Logger '{name}': {source}")]
    Logger {
        name: String,
        #[source]
        source: LoggingError,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// One configured logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Dotted logger name
    pub name: String,
    /// Level string; omitted keeps the logger's current level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Optional file sink, attached when the logger is first configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            file: None,
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    fn parsed_level(&self) -> ConfigResult<Option<Level>> {
        Level::parse_optional(self.level.as_deref()).map_err(|source| ConfigError::Logger {
            name: self.name.clone(),
            source,
        })
    }
}

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level given to brand-new loggers obtained without a level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_level: Option<String>,

    /// Loggers to configure, applied in order
    #[serde(default)]
    pub loggers: Vec<LoggerConfig>,
}

impl LoggingConfig {
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse every level string, failing on the first invalid one
    pub fn validate(&self) -> ConfigResult<()> {
        self.parsed_default_level()?;
        for logger in &self.loggers {
            if logger.name.is_empty() {
                return Err(ConfigError::Logger {
                    name: String::new(),
                    source: LoggingError::EmptyName,
                });
            }
            logger.parsed_level()?;
        }
        Ok(())
    }

    fn parsed_default_level(&self) -> ConfigResult<Option<Level>> {
        Level::parse_optional(self.default_level.as_deref()).map_err(|source| ConfigError::Logger {
            name: "default_level".to_string(),
            source,
        })
    }

    /// Configure the listed loggers in `registry`
    ///
    /// Everything is validated first, so an invalid entry leaves the
    /// registry untouched. `default_level` only takes effect through
    /// [`LoggingConfig::build_registry`].
    pub fn apply(&self, registry: &Registry) -> ConfigResult<Vec<Logger>> {
        self.validate()?;

        let mut loggers = Vec::with_capacity(self.loggers.len());
        for entry in &self.loggers {
            let level = entry.parsed_level()?;
            let logger = registry
                .obtain(&entry.name, entry.file.as_deref(), level)
                .map_err(|source| ConfigError::Logger {
                    name: entry.name.clone(),
                    source,
                })?;
            loggers.push(logger);
        }
        Ok(loggers)
    }

    /// Build a fresh registry with this configuration applied
    pub fn build_registry(&self) -> ConfigResult<Registry> {
        self.validate()?;
        let registry = match self.parsed_default_level()? {
            Some(level) => Registry::with_default_level(level),
            None => Registry::new(),
        };
        self.apply(&registry)?;
        Ok(registry)
    }
}

/// Config file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn parse(self, content: &str) -> ConfigResult<LoggingConfig> {
        match self {
            ConfigFormat::Yaml => LoggingConfig::from_yaml_str(content),
            ConfigFormat::Json => LoggingConfig::from_json_str(content),
        }
    }

    pub fn render(self, config: &LoggingConfig) -> ConfigResult<String> {
        match self {
            ConfigFormat::Yaml => config.to_yaml(),
            ConfigFormat::Json => config.to_json(),
        }
    }
}

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/cdislogging/logging.yaml)
    User,
    /// Workspace-level config (.config/cdislogging/logging.yaml in workspace root)
    Workspace,
    /// Any other explicit path
    Custom,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
            ConfigLevel::Custom => "custom",
        }
    }
}

/// A logging configuration file on disk
///
/// # Example
///
/// ```no_run
/// use cdislogging::config::FileConfigSource;
///
/// let registry = FileConfigSource::user().load()?.build_registry()?;
/// # Ok::<(), cdislogging::config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
    level: ConfigLevel,
}

impl FileConfigSource {
    /// Create a source for a specific path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            level: ConfigLevel::Custom,
        }
    }

    /// User-level config (~/.config/cdislogging/logging.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self {
            path: config_dir.join("cdislogging").join("logging.yaml"),
            level: ConfigLevel::User,
        }
    }

    /// Workspace-level config (.config/cdislogging/logging.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        Self {
            path: workspace_root
                .as_ref()
                .join(".config")
                .join("cdislogging")
                .join("logging.yaml"),
            level: ConfigLevel::Workspace,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the config; a missing file yields the empty default
    pub fn load(&self) -> ConfigResult<LoggingConfig> {
        if !self.path.exists() {
            return Ok(LoggingConfig::default());
        }

        let format = ConfigFormat::from_path(&self.path)?;
        let content = fs::read_to_string(&self.path)?;
        format.parse(&content)
    }

    /// Write the config, creating parent directories as needed
    pub fn save(&self, config: &LoggingConfig) -> ConfigResult<()> {
        let format = ConfigFormat::from_path(&self.path)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format.render(config)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_YAML: &str = r#"
loggers:
  - name: app
    level: info
  - name: app.db
    level: WARN
  - name: app.http
"#;

    #[test]
    fn test_parse_yaml() {
        let config = LoggingConfig::from_yaml_str(SAMPLE_YAML).unwrap();
        assert_eq!(config.default_level, None);
        assert_eq!(config.loggers.len(), 3);
        assert_eq!(config.loggers[1], LoggerConfig::new("app.db").with_level("WARN"));
        assert_eq!(config.loggers[2].level, None);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"default_level": "debug", "loggers": [{"name": "svc", "level": "error"}]}"#;
        let config = LoggingConfig::from_json_str(json).unwrap();
        assert_eq!(config.default_level.as_deref(), Some("debug"));
        assert_eq!(config.loggers[0].name, "svc");
    }

    #[test]
    fn test_apply_configures_loggers() {
        let registry = Registry::new();
        let config = LoggingConfig::from_yaml_str(SAMPLE_YAML).unwrap();
        let loggers = config.apply(&registry).unwrap();

        assert_eq!(loggers.len(), 3);
        assert_eq!(loggers[0].level(), Level::Info);
        assert_eq!(loggers[1].level(), Level::Warning);
        assert_eq!(loggers[2].level(), Level::NotSet);
        assert_eq!(loggers[2].effective_level(), Level::Info);
        assert_eq!(registry.names(), vec!["app", "app.db", "app.http"]);
    }

    #[test]
    fn test_invalid_entry_leaves_registry_untouched() {
        let registry = Registry::new();
        let config = LoggingConfig {
            default_level: None,
            loggers: vec![
                LoggerConfig::new("good").with_level("info"),
                LoggerConfig::new("bad").with_level("verbose"),
            ],
        };

        let err = config.apply(&registry).unwrap_err();
        assert!(matches!(err, ConfigError::Logger { ref name, .. } if name == "bad"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalid_default_level() {
        let config = LoggingConfig {
            default_level: Some("loud".to_string()),
            loggers: vec![],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_registry_with_default_level() {
        let config = LoggingConfig {
            default_level: Some("debug".to_string()),
            loggers: vec![LoggerConfig::new("app").with_level("error")],
        };
        let registry = config.build_registry().unwrap();

        assert_eq!(registry.default_level(), Some(Level::Debug));
        assert_eq!(registry.logger("app").unwrap().level(), Level::Error);

        let fresh = registry.get_logger("other", None, None).unwrap();
        assert_eq!(fresh.level(), Level::Debug);
    }

    #[test]
    fn test_apply_with_file_sink() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("app.log");
        let config = LoggingConfig {
            default_level: None,
            loggers: vec![LoggerConfig::new("app").with_level("info").with_file(&log_path)],
        };

        let registry = Registry::new();
        let loggers = config.apply(&registry).unwrap();
        assert_eq!(loggers[0].sink_count(), 2);
        assert!(log_path.exists());
    }

    #[test]
    fn test_file_source_load_missing() {
        let dir = TempDir::new().unwrap();
        let source = FileConfigSource::new(dir.path().join("logging.yaml"));
        assert!(!source.exists());
        assert_eq!(source.load().unwrap(), LoggingConfig::default());
    }

    #[test]
    fn test_file_source_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = LoggingConfig {
            default_level: Some("notset".to_string()),
            loggers: vec![LoggerConfig::new("app").with_level("warn")],
        };

        for name in ["logging.yaml", "logging.json"] {
            let source = FileConfigSource::new(dir.path().join("nested").join(name));
            source.save(&config).unwrap();
            assert!(source.exists());
            assert_eq!(source.load().unwrap(), config);
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logging.toml");
        fs::write(&path, "").unwrap();

        let err = FileConfigSource::new(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_workspace_path() {
        let source = FileConfigSource::workspace("/srv/project");
        assert_eq!(source.level(), ConfigLevel::Workspace);
        assert_eq!(
            source.path(),
            Path::new("/srv/project/.config/cdislogging/logging.yaml")
        );
    }

    #[test]
    fn test_user_path() {
        let source = FileConfigSource::user();
        assert_eq!(source.level(), ConfigLevel::User);
        assert_eq!(source.level().as_str(), "user");
        assert!(source.path().ends_with("cdislogging/logging.yaml"));
    }
}
