use crate::storage::config::CONFIG_KEYS;
use crate::utils::validation::MAX_WIDTH;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("RenderError: {0}")]
    Render(#[from] RenderError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("Display width must be between 1 and {max} (got {width})", max = MAX_WIDTH)]
    InvalidWidth { width: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed")]
    ConfigSaveFailed,
    #[error("Parse error in {path}: {message}")]
    ConfigParseError { path: String, message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "error",
            ErrorSeverity::Low => "warning",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Render(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::High,
            AppError::Display(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Render(RenderError::InvalidWidth { .. }) => {
                Some(format!(
                "pass a value from 1 to {} to --width or 'config set width <n>'",
                MAX_WIDTH
            ))
            }
            AppError::Config(ConfigError::UnknownKey { .. }) => {
                Some(format!("valid keys are: {}", CONFIG_KEYS.join(", ")))
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("check the TOML syntax of the file".to_string())
            }
            _ => None,
        }
    }
}
