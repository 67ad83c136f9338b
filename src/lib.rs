// Domain layer - Core business logic
pub mod domain;

// Application layer - Driver loop state
pub mod application;

// Infrastructure layer - rendering, input, settings
pub mod config;
pub mod error;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::Simulation;
pub use config::Settings;
pub use domain::{Grid, GridView, Pattern, presets};
pub use error::{ConfigError, GridError};
