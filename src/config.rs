use crate::keybindings::{Keybindings, KeybindingsConfig};
use crate::tui::theme::ThemeName;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    /// Where lesson modules come from
    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Width of the course and lesson sidebar, as a percentage of the screen
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
}

/// Content source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory of lesson modules. When unset the bundled lessons are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "info" or "coursebook=debug"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file used while the TUI owns the terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            sidebar_width: default_sidebar_width(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_theme() -> String {
    "OceanDark".to_string()
}

fn default_sidebar_width() -> u16 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/coursebook/config.toml
    /// - Linux: ~/.config/coursebook/config.toml
    /// - Windows: %APPDATA%/coursebook/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("coursebook").join("config.toml"))
    }

    /// Read config from a file. A missing file gives the defaults; an
    /// unreadable or invalid one is an error for the caller to report.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Write config atomically: a temp file in the same directory is
    /// renamed over the target.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let contents = toml::to_string_pretty(self)?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(path).map_err(|e| ConfigError::Io(e.error))?;

        Ok(())
    }

    /// Parse theme name from string
    pub fn theme_name(&self) -> ThemeName {
        ThemeName::from_str(&self.ui.theme).unwrap_or(ThemeName::OceanDark)
    }

    /// Update theme and save config
    pub fn set_theme(&mut self, theme: ThemeName) -> Result<(), ConfigError> {
        self.ui.theme = theme.to_string();
        self.save()
    }

    /// Get keybindings with user customizations applied
    pub fn keybindings(&self) -> Keybindings {
        self.keybindings.to_keybindings()
    }

    /// Default log file: `<cache dir>/coursebook/coursebook.log`
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging
            .file
            .clone()
            .or_else(|| dirs::cache_dir().map(|p| p.join("coursebook").join("coursebook.log")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let config: Config = toml::from_str("[ui]\ntheme = \"Nord\"\n").unwrap();
        assert_eq!(config.theme_name(), ThemeName::Nord);
        assert_eq!(config.ui.sidebar_width, 30);
        assert_eq!(config.logging.level, "info");
        assert!(config.content.root.is_none());
        assert!(config.keybindings.is_empty());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let mut config = Config::default();
        config.ui.theme = "Neon".into();
        assert_eq!(config.theme_name(), ThemeName::OceanDark);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.ui.theme = ThemeName::Gruvbox.to_string();
        config.ui.sidebar_width = 40;
        config.content.root = Some(PathBuf::from("/srv/lessons"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme_name(), ThemeName::Gruvbox);
        assert_eq!(loaded.ui.sidebar_width, 40);
        assert_eq!(loaded.content.root, Some(PathBuf::from("/srv/lessons")));
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "ui = 3").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(&err, ConfigError::Parse { path: p, .. } if *p == path));
        assert!(err.to_string().contains("config.toml"));

        let missing = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(missing.ui.sidebar_width, 30);
        assert_eq!(missing.ui.theme, "OceanDark");
    }
}
