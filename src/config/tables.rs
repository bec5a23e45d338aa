use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    animation: AnimationConfig,
    #[serde(default)]
    contact: ContactConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.window.width,
            window_height: tables.window.height,
            decode_tick_ms: tables.animation.decode_tick_ms,
            frame_interval_ms: tables.animation.frame_interval_ms,
            reduced_motion: tables.animation.reduced_motion,
            outbox_dir: tables.contact.outbox_dir,
            sales_email: tables.contact.sales_email,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            animation: AnimationConfig {
                decode_tick_ms: config.decode_tick_ms,
                frame_interval_ms: config.frame_interval_ms,
                reduced_motion: config.reduced_motion,
            },
            contact: ContactConfig {
                outbox_dir: config.outbox_dir.clone(),
                sales_email: config.sales_email.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AnimationConfig {
    #[serde(default = "defaults::default_decode_tick_ms")]
    decode_tick_ms: u64,
    #[serde(default = "defaults::default_frame_interval_ms")]
    frame_interval_ms: u64,
    #[serde(default)]
    reduced_motion: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            decode_tick_ms: defaults::default_decode_tick_ms(),
            frame_interval_ms: defaults::default_frame_interval_ms(),
            reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ContactConfig {
    #[serde(default = "defaults::default_outbox_dir")]
    outbox_dir: String,
    #[serde(default = "defaults::default_sales_email")]
    sales_email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            outbox_dir: defaults::default_outbox_dir(),
            sales_email: defaults::default_sales_email(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
