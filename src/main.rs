//! Entry point for the NeuralChat site viewer.
//!
//! - Initialize tracing, then re-level it from the config.
//! - Load user configuration from `conf/config.toml`.
//! - Load the compiled-in site content.
//! - Launch the GUI with both.

mod app;
mod config;
mod links;
mod outbox;
mod theme;

use crate::app::run_app;
use crate::config::load_config;
use anyhow::{Context, Result};
use neuralchat_core::ContentRegistry;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_PATH);
    let config = load_config(&config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        theme = %config.theme,
        level = %config.log_level,
        reduced_motion = config.reduced_motion,
        "Starting NeuralChat site"
    );
    let content = ContentRegistry::builtin().context("Failed to load site content")?;
    info!(
        plans = content.pricing().plans.len(),
        albums = content.album_cube().albums.len(),
        "Loaded site content"
    );
    run_app(config, config_path, content).context("Failed to start the GUI")?;
    Ok(())
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
