//! Input/output operations: script processing and plane rendering

/// Command-line interface and batch script processing
pub mod cli;
/// Parsing of scripted plane commands
pub mod commands;
/// Execution constants and output settings
pub mod configuration;
/// Error types for script processing
pub mod error;
/// Progress tracking for batch runs
pub mod progress;
/// Plane rasterization and PNG export
pub mod render;
/// Line-by-line script execution
pub mod script;
