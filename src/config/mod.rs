//! Configuration loading for the site viewer.
//!
//! All user-tunable settings are loaded from `conf/config.toml` if present.
//! Missing or invalid entries fall back to defaults so the window still opens.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, serialize_config};
pub use models::{AppConfig, LogLevel, ThemeMode};
