//! Storage layer for banner-cli
//!
//! Handles the configuration file (TOML) holding banner defaults.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
