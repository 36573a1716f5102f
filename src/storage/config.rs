use super::Result;
use crate::core::banner::{
    BannerRenderer, DEFAULT_LEFT_MARKER, DEFAULT_RIGHT_MARKER, DEFAULT_WIDTH,
};
use crate::error::{AppError, ConfigError, StorageError};
use crate::utils::validation::{
    MAX_WIDTH, parse_bool, parse_width, validate_marker, validate_width,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_KEYS: &[&str] = &[
    "width",
    "left_marker",
    "right_marker",
    "minor_spacing",
    "display_columns",
];

/// Banner defaults persisted in `config.toml`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub width: usize,
    pub left_marker: String,
    pub right_marker: String,
    pub minor_spacing: bool,
    pub display_columns: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            left_marker: DEFAULT_LEFT_MARKER.to_string(),
            right_marker: DEFAULT_RIGHT_MARKER.to_string(),
            minor_spacing: false,
            display_columns: false,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it does not exist.
    /// Values are validated the same way `config set` validates them.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                path: config_path.to_string_lossy().to_string(),
                message: e.message().to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if validate_width(self.width).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "width".to_string(),
                value: self.width.to_string(),
                reason: format!("must be between 1 and {}", MAX_WIDTH),
            }
            .into());
        }
        validate_marker("left_marker", &self.left_marker)?;
        validate_marker("right_marker", &self.right_marker)?;
        Ok(())
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|_| StorageError::ConfigSaveFailed)?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = config_dir.join("banner-cli");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Update one field from its textual form, validating it first
    pub fn set_value(&mut self, key: &str, value: &str) -> crate::Result<()> {
        match key {
            "width" => self.width = parse_width(key, value)?,
            "left_marker" => {
                validate_marker(key, value)?;
                self.left_marker = value.to_string();
            }
            "right_marker" => {
                validate_marker(key, value)?;
                self.right_marker = value.to_string();
            }
            "minor_spacing" => self.minor_spacing = parse_bool(key, value)?,
            "display_columns" => self.display_columns = parse_bool(key, value)?,
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn get_value(&self, key: &str) -> Option<String> {
        match key {
            "width" => Some(self.width.to_string()),
            "left_marker" => Some(self.left_marker.clone()),
            "right_marker" => Some(self.right_marker.clone()),
            "minor_spacing" => Some(self.minor_spacing.to_string()),
            "display_columns" => Some(self.display_columns.to_string()),
            _ => None,
        }
    }

    /// Build a renderer from these defaults, with an optional width override
    pub fn renderer(&self, width: Option<usize>) -> std::result::Result<BannerRenderer, AppError> {
        Ok(BannerRenderer::new(width.unwrap_or(self.width))?
            .with_markers(self.left_marker.clone(), self.right_marker.clone())
            .with_minor_spacing(self.minor_spacing)
            .with_display_columns(self.display_columns))
    }
}
