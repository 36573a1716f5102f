pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Banner rendering and title catalog
pub mod storage; // Configuration persistence

/// Support modules (used across layers)
pub mod display; // Output sinks
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
