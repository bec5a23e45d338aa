pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_decode_tick_ms() -> u64 {
    neuralchat_core::decode::DEFAULT_TICK_MS
}

/// Roughly 60 fps while a scrubbed zone catches up.
pub(crate) fn default_frame_interval_ms() -> u64 {
    16
}

pub(crate) fn default_outbox_dir() -> String {
    ".cache/outbox".to_string()
}

pub(crate) fn default_sales_email() -> String {
    "enterprise@neuralchat.ai".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}
