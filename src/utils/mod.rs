//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Terminal logging and verbose diagnostics
pub mod logging;

/// Display-width aware text layout
pub mod text;

/// Input validation for widths, markers and flags
pub mod validation;
