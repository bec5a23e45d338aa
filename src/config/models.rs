use serde::Deserialize;

/// Flattened app configuration; the on-disk file nests these under tables.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_decode_tick_ms")]
    pub decode_tick_ms: u64,
    #[serde(default = "crate::config::defaults::default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default = "crate::config::defaults::default_outbox_dir")]
    pub outbox_dir: String,
    #[serde(default = "crate::config::defaults::default_sales_email")]
    pub sales_email: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            decode_tick_ms: crate::config::defaults::default_decode_tick_ms(),
            frame_interval_ms: crate::config::defaults::default_frame_interval_ms(),
            reduced_motion: false,
            outbox_dir: crate::config::defaults::default_outbox_dir(),
            sales_email: crate::config::defaults::default_sales_email(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Clamp timings so subscriptions never spin.
    pub fn sanitized(mut self) -> Self {
        self.decode_tick_ms = self.decode_tick_ms.max(1);
        self.frame_interval_ms = self.frame_interval_ms.max(1);
        if !self.window_width.is_finite() || self.window_width < 320.0 {
            self.window_width = crate::config::defaults::default_window_width();
        }
        if !self.window_height.is_finite() || self.window_height < 240.0 {
            self.window_height = crate::config::defaults::default_window_height();
        }
        self
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Logging verbosity.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
