use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub general: GeneralConfig,
    /// Explicit theme choice. Absent means follow the system preference, and
    /// only an explicit choice overrides later system-theme changes.
    #[serde(default)]
    pub theme: Option<Theme>,
    /// Where this config was loaded from; `save` writes back to it.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub favorites_file: PathBuf,
    pub color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nanoguide");

        Self {
            favorites_file: config_dir.join("favorites.json"),
            color: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Light => "淺色",
            Theme::Dark => "深色",
        }
    }

    /// Best-effort system preference. Terminals have no color-scheme media
    /// query; NANOGUIDE_THEME wins, then the COLORFGBG convention, then dark.
    pub fn system_default() -> Theme {
        if let Ok(value) = std::env::var("NANOGUIDE_THEME") {
            match value.as_str() {
                "light" => return Theme::Light,
                "dark" => return Theme::Dark,
                _ => {}
            }
        }

        if let Ok(value) = std::env::var("COLORFGBG") {
            // "fg;bg" with bg 7 or 15 meaning a light background
            if let Some(bg) = value.rsplit(';').next() {
                if bg == "7" || bg == "15" {
                    return Theme::Light;
                }
            }
        }

        Theme::Dark
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &std::path::Path) -> AppResult<Self> {
        if !config_path.exists() {
            let mut default_config = Config::default();
            default_config.source_path = Some(config_path.to_path_buf());
            default_config.save()?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Storage(e.to_string()))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| AppError::System(format!("Failed to parse config file: {}", e)))?;
        config.source_path = Some(config_path.to_path_buf());

        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let config_path = self
            .source_path
            .clone()
            .unwrap_or_else(Self::config_file_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Storage(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content).map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nanoguide")
            .join("config.toml")
    }

    /// The theme in effect right now: the explicit choice if one was made,
    /// the system preference otherwise.
    pub fn effective_theme(&self) -> Theme {
        self.theme.unwrap_or_else(Theme::system_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.theme.is_none());
        assert!(config.general.color);
        assert!(config
            .general
            .favorites_file
            .ends_with("nanoguide/favorites.json"));
    }

    #[test]
    fn test_theme_round_trips_through_toml() {
        let mut config = Config::default();
        config.theme = Some(Theme::Dark);

        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_absent_theme_follows_system() {
        let config = Config::default();
        assert_eq!(config.effective_theme(), Theme::system_default());

        let mut explicit = Config::default();
        explicit.theme = Some(Theme::Light);
        assert_eq!(explicit.effective_theme(), Theme::Light);
    }

    #[test]
    fn test_theme_flip() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
    }
}
