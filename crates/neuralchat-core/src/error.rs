use crate::engine::ZoneHandle;
use thiserror::Error;

/// Errors raised by the scroll-sync engine and its marker parser.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// Invalid zone setup; fatal to that registration only.
    #[error("invalid zone configuration: {0}")]
    Configuration(String),
    /// The handle was never registered or has already been released.
    #[error("unknown zone handle {0}")]
    UnknownZone(ZoneHandle),
}

impl SyncError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        SyncError::Configuration(message.into())
    }
}
