//! Input/output, configuration and error handling

/// Command-line interface
pub mod cli;
/// Defaults and constants
pub mod configuration;
/// Error types
pub mod error;
/// PNG loading, palette export and preview rendering
pub mod image;
