//! Input validation utilities
//!
//! Checks applied to user-supplied rendering parameters before they reach
//! the renderer or the configuration file.

use crate::error::{ConfigError, RenderError};

/// Widest field a renderer accepts
pub const MAX_WIDTH: usize = 4096;

/// Validate that a display width is usable
pub fn validate_width(width: usize) -> std::result::Result<usize, RenderError> {
    if width == 0 || width > MAX_WIDTH {
        return Err(RenderError::InvalidWidth { width });
    }
    Ok(width)
}

/// Parse and validate a width given as text (config values, env)
pub fn parse_width(field: &str, value: &str) -> crate::Result<usize> {
    let width = value
        .trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })?;
    Ok(validate_width(width)?)
}

/// Validate a border marker: markers must stay on a single line
pub fn validate_marker(field: &str, marker: &str) -> crate::Result<()> {
    if marker.contains(['\n', '\r']) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: marker.escape_default().to_string(),
            reason: "marker must not contain line breaks".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Parse a boolean config value
pub fn parse_bool(field: &str, value: &str) -> crate::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_width_accepts_positive() {
        assert_eq!(validate_width(1), Ok(1));
        assert_eq!(validate_width(50), Ok(50));
    }

    #[test]
    fn test_validate_width_rejects_zero() {
        assert_eq!(
            validate_width(0),
            Err(RenderError::InvalidWidth { width: 0 })
        );
    }

    #[test]
    fn test_validate_width_rejects_oversized() {
        assert_eq!(validate_width(MAX_WIDTH), Ok(MAX_WIDTH));
        assert_eq!(
            validate_width(MAX_WIDTH + 1),
            Err(RenderError::InvalidWidth {
                width: MAX_WIDTH + 1
            })
        );
        assert_eq!(
            validate_width(usize::MAX),
            Err(RenderError::InvalidWidth { width: usize::MAX })
        );
    }

    #[test]
    fn test_parse_width() {
        assert_eq!(parse_width("width", " 72 ").ok(), Some(72));
        assert!(parse_width("width", "0").is_err());
        assert!(parse_width("width", "-5").is_err());
        assert!(parse_width("width", "wide").is_err());
        assert!(parse_width("width", "18446744073709551615").is_err());
    }

    #[test]
    fn test_validate_marker() {
        assert!(validate_marker("left_marker", "//").is_ok());
        assert!(validate_marker("left_marker", "").is_ok());
        assert!(validate_marker("right_marker", "|\n|").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("minor_spacing", "true").unwrap());
        assert!(parse_bool("minor_spacing", "YES").unwrap());
        assert!(!parse_bool("minor_spacing", "off").unwrap());
        assert!(parse_bool("minor_spacing", "maybe").is_err());
    }
}
