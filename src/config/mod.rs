//! TOML configuration: types, loading, validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DisplayConfig, ServerConfig};
