use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load `path`, falling back to defaults when it is missing or invalid.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Failed to parse config tables")?;
    Ok(AppConfig::from(tables).sanitized())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("Failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config is valid");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn nested_tables_are_flattened() {
        let config = parse_config(
            r#"
            [appearance]
            theme = "day"

            [window]
            width = 1440.0

            [animation]
            decode_tick_ms = 25
            reduced_motion = true

            [contact]
            sales_email = "sales@example.test"

            [logging]
            log_level = "warn"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.window_width, 1440.0);
        assert_eq!(config.window_height, 800.0, "unset keys keep defaults");
        assert_eq!(config.decode_tick_ms, 25);
        assert!(config.reduced_motion);
        assert_eq!(config.sales_email, "sales@example.test");
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn serialized_config_parses_back() {
        let config = AppConfig {
            theme: ThemeMode::Day,
            frame_interval_ms: 33,
            outbox_dir: "/tmp/outbox".into(),
            ..AppConfig::default()
        };
        let text = serialize_config(&config).expect("serializable");
        assert!(text.contains("[animation]"));
        assert_eq!(parse_config(&text).expect("round trip"), config);
    }

    #[test]
    fn zero_intervals_are_clamped() {
        let config = parse_config("[animation]\ndecode_tick_ms = 0\nframe_interval_ms = 0")
            .expect("valid config");
        assert_eq!(config.decode_tick_ms, 1);
        assert_eq!(config.frame_interval_ms, 1);
    }

    #[test]
    fn bad_values_are_errors_and_missing_files_fall_back() {
        assert!(parse_config("[logging]\nlog_level = \"loud\"").is_err());
        let missing = std::env::temp_dir().join(format!(
            "neuralchat-missing-{}/config.toml",
            std::process::id()
        ));
        assert_eq!(load_config(&missing), AppConfig::default());
    }
}
