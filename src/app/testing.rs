use super::state::{App, NAV_BAR_HEIGHT};
use crate::config::AppConfig;
use neuralchat_core::ContentRegistry;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_APP: AtomicUsize = AtomicUsize::new(0);

fn scratch_dir(name: &str) -> PathBuf {
    let n = NEXT_APP.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "neuralchat-site-test-{}-{n}-{name}",
        std::process::id()
    ))
}

/// App with a 1280x800 page viewport, narrower than the gallery track.
pub(crate) fn build_test_app(reduced_motion: bool) -> App {
    let config = AppConfig {
        window_width: 1280.0,
        window_height: 800.0 + NAV_BAR_HEIGHT,
        reduced_motion,
        outbox_dir: scratch_dir("outbox").to_string_lossy().into_owned(),
        ..AppConfig::default()
    };
    let config_path = scratch_dir("conf").join("config.toml");
    let content = ContentRegistry::builtin().expect("builtin content parses");
    App::bootstrap(config, config_path, content).0
}
