//! Collaborators around the pattern core: terminal, settings and image files

/// Command-line parsing and job orchestration
pub mod cli;
/// Output naming, settings location and runtime defaults
pub mod configuration;
/// Error types and constructor helpers
pub mod error;
/// Image encoding and output paths
pub mod image;
/// Spinner for long generations
pub mod progress;
/// Interactive parameter collection
pub mod prompt;
/// Last-used dimension storage
pub mod settings;
