use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

pub(crate) const NAV_BAR_HEIGHT: f32 = 56.0;
pub(crate) const NAV_SCROLL_DURATION: Duration = Duration::from_millis(700);
/// Gallery track offsets closer than this are not re-synced.
pub(crate) const TRACK_SYNC_EPSILON: f32 = 0.5;
pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
pub(crate) static GALLERY_TRACK_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("gallery-track"));
