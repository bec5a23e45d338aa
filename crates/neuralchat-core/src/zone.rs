//! Trigger-zone configuration and the samples pushed through it.

use crate::error::SyncError;
use crate::marker::{DEFAULT_END, DEFAULT_START, EndMarker, Marker};

/// Row travel direction for parallax strips; `Left` maps to `+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDirection {
    Left,
    Right,
}

impl RowDirection {
    pub fn sign(self) -> f32 {
        match self {
            RowDirection::Left => 1.0,
            RowDirection::Right => -1.0,
        }
    }
}

/// How a zone turns progress into derived state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivationKind {
    /// Cube rotation plus active face; also drives the velocity blur.
    AlbumRotation,
    BlurVelocity,
    ParallaxRow {
        direction: RowDirection,
        base_offset: f32,
    },
    TitleParallax,
    /// Pinned horizontal gallery sliding `travel` pixels to the left.
    HorizontalTrack { travel: f32 },
    /// One-shot entrance latch.
    Reveal,
}

impl DerivationKind {
    pub fn is_discretizing(self) -> bool {
        matches!(self, DerivationKind::AlbumRotation)
    }

    pub fn label(self) -> &'static str {
        match self {
            DerivationKind::AlbumRotation => "album-rotation",
            DerivationKind::BlurVelocity => "blur-velocity",
            DerivationKind::ParallaxRow { .. } => "parallax-row",
            DerivationKind::TitleParallax => "title-parallax",
            DerivationKind::HorizontalTrack { .. } => "horizontal-track",
            DerivationKind::Reveal => "reveal",
        }
    }
}

/// One scroll-bound region.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneConfig {
    pub id: String,
    pub start: Marker,
    pub end: EndMarker,
    pub pinned: bool,
    /// Seconds of lag between raw scroll and reported progress.
    pub scrub: f32,
    pub item_count: usize,
    pub kind: DerivationKind,
}

impl ZoneConfig {
    /// Zone with the default `top 80%` / `bottom 20%` markers.
    pub fn new(id: impl Into<String>, kind: DerivationKind) -> Self {
        ZoneConfig {
            id: id.into(),
            start: DEFAULT_START,
            end: DEFAULT_END,
            pinned: false,
            scrub: 0.0,
            item_count: 1,
            kind,
        }
    }

    /// Replace both markers, parsing them from trigger syntax.
    pub fn with_markers(mut self, start: &str, end: &str) -> Result<Self, SyncError> {
        self.start = start.parse()?;
        self.end = end.parse()?;
        Ok(self)
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn scrub(mut self, scrub: f32) -> Self {
        self.scrub = scrub;
        self
    }

    pub fn item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn validate(&self) -> Result<(), SyncError> {
        if self.kind.is_discretizing() && self.item_count == 0 {
            return Err(SyncError::config(format!(
                "zone `{}` ({}) needs at least one item",
                self.id,
                self.kind.label()
            )));
        }
        if !self.scrub.is_finite() || self.scrub < 0.0 {
            return Err(SyncError::config(format!(
                "zone `{}` has negative or non-finite scrub {}",
                self.id, self.scrub
            )));
        }
        if let DerivationKind::HorizontalTrack { travel } = self.kind {
            if !travel.is_finite() || travel < 0.0 {
                return Err(SyncError::config(format!(
                    "zone `{}` has invalid track travel {travel}",
                    self.id
                )));
            }
        }
        if let DerivationKind::ParallaxRow { base_offset, .. } = self.kind {
            if !base_offset.is_finite() {
                return Err(SyncError::config(format!(
                    "zone `{}` has non-finite row offset",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

/// Progress and velocity reported for one zone on one update tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressSample {
    pub progress: f32,
    /// Scroll speed in px/s; only the magnitude is used.
    pub velocity: f32,
}

impl ProgressSample {
    pub fn new(progress: f32, velocity: f32) -> Self {
        ProgressSample { progress, velocity }
    }

    /// Overscroll is clamped; NaN collapses to zero.
    pub fn clamped_progress(&self) -> f32 {
        if self.progress.is_nan() {
            0.0
        } else {
            self.progress.clamp(0.0, 1.0)
        }
    }

    pub fn speed(&self) -> f32 {
        if self.velocity.is_finite() {
            self.velocity.abs()
        } else if self.velocity.is_nan() {
            0.0
        } else {
            f32::INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_album_zone() {
        let config = ZoneConfig::new("album", DerivationKind::AlbumRotation).item_count(0);
        assert!(matches!(
            config.validate(),
            Err(SyncError::Configuration(_))
        ));
    }

    #[test]
    fn empty_item_list_is_fine_for_continuous_kinds() {
        let config = ZoneConfig::new("title", DerivationKind::TitleParallax).item_count(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_negative_scrub() {
        let config = ZoneConfig::new("rows", DerivationKind::BlurVelocity).scrub(-0.5);
        assert!(config.validate().is_err());
        let config = ZoneConfig::new("rows", DerivationKind::BlurVelocity).scrub(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_track_travel() {
        let config = ZoneConfig::new(
            "gallery",
            DerivationKind::HorizontalTrack { travel: -10.0 },
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn marker_builder_propagates_parse_errors() {
        let result =
            ZoneConfig::new("x", DerivationKind::Reveal).with_markers("top 85%", "+=oops");
        assert!(result.is_err());
    }

    #[test]
    fn sample_clamps_overscroll_and_drops_sign() {
        let sample = ProgressSample::new(1.3, -900.0);
        assert_eq!(sample.clamped_progress(), 1.0);
        assert_eq!(sample.speed(), 900.0);
        assert_eq!(ProgressSample::new(-0.2, 0.0).clamped_progress(), 0.0);
        assert_eq!(ProgressSample::new(f32::NAN, f32::NAN).speed(), 0.0);
    }
}
