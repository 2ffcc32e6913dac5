//! Demo configuration: TOML file with serde defaults for every field.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CounterConfig, Defaults, DemoConfig, ThemeConfig};
