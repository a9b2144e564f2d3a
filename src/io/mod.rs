//! Input/output operations: CLI, project loading, KML emission, errors

/// Command-line interface and project processor
pub mod cli;
/// Reference grid constants and styling defaults
pub mod configuration;
/// Error types for all operations
pub mod error;
/// KML document emission
pub mod kml;
/// Project file loading
pub mod project;
