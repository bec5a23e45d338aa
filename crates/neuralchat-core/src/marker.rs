//! Trigger-zone markers and their resolution to document scroll offsets.
//!
//! A marker pairs a point on the observed element with a point on the
//! viewport, written the way the site's scroll triggers are written:
//! `"top 80%"` means "when the element's top reaches 80% of the viewport
//! height". End markers may instead be relative to the start (`"+=300%"`).

use crate::error::SyncError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static NUMERIC_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?\d+(?:\.\d+)?)(%|px)?$").expect("numeric anchor regex is valid")
});
static RELATIVE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+=\s*(\S+)$").expect("relative end regex is valid"));

/// `"top 80%"`.
pub const DEFAULT_START: Marker = Marker {
    element: Anchor::Ratio(0.0),
    viewport: Anchor::Ratio(0.8),
};
/// `"bottom 20%"`.
pub const DEFAULT_END: EndMarker = EndMarker::Absolute(Marker {
    element: Anchor::Ratio(1.0),
    viewport: Anchor::Ratio(0.2),
});

/// A position along one axis of the element or the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Fraction of the extent (`top` = 0, `center` = 0.5, `bottom` = 1).
    Ratio(f32),
    Pixels(f32),
}

impl Anchor {
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Anchor::Ratio(ratio) => ratio * extent.max(0.0),
            Anchor::Pixels(px) => px,
        }
    }

    fn parse(token: &str) -> Result<Self, SyncError> {
        match token {
            "top" => return Ok(Anchor::Ratio(0.0)),
            "center" => return Ok(Anchor::Ratio(0.5)),
            "bottom" => return Ok(Anchor::Ratio(1.0)),
            _ => {}
        }
        let caps = NUMERIC_ANCHOR
            .captures(token)
            .ok_or_else(|| SyncError::config(format!("unrecognized marker anchor `{token}`")))?;
        let value: f32 = caps[1]
            .parse()
            .map_err(|_| SyncError::config(format!("invalid number in anchor `{token}`")))?;
        Ok(match caps.get(2).map(|m| m.as_str()) {
            Some("%") => Anchor::Ratio(value / 100.0),
            _ => Anchor::Pixels(value),
        })
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Ratio(r) if *r == 0.0 => write!(f, "top"),
            Anchor::Ratio(r) if *r == 0.5 => write!(f, "center"),
            Anchor::Ratio(r) if *r == 1.0 => write!(f, "bottom"),
            Anchor::Ratio(r) => write!(f, "{}%", r * 100.0),
            Anchor::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// `"<element-anchor> <viewport-anchor>"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl Marker {
    /// Scroll offset at which the element anchor meets the viewport anchor.
    pub fn resolve(&self, geometry: &ZoneGeometry) -> f32 {
        geometry.element_top + self.element.resolve(geometry.element_height)
            - self.viewport.resolve(geometry.viewport_height)
    }
}

impl FromStr for Marker {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(SyncError::config(format!(
                "marker `{s}` must have the form `<element> <viewport>`"
            )));
        };
        Ok(Marker {
            element: Anchor::parse(element)?,
            viewport: Anchor::parse(viewport)?,
        })
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

/// Where a zone ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndMarker {
    Absolute(Marker),
    /// Distance past the resolved start; ratios scale the viewport height.
    Relative(Anchor),
}

impl FromStr for EndMarker {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(caps) = RELATIVE_END.captures(trimmed) {
            return Ok(EndMarker::Relative(Anchor::parse(&caps[1])?));
        }
        Ok(EndMarker::Absolute(trimmed.parse()?))
    }
}

impl fmt::Display for EndMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndMarker::Absolute(marker) => write!(f, "{marker}"),
            EndMarker::Relative(anchor) => write!(f, "+={anchor}"),
        }
    }
}

/// Layout facts needed to turn markers into scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneGeometry {
    /// Element top in document coordinates (scroll offset 0 = document top).
    pub element_top: f32,
    pub element_height: f32,
    pub viewport_height: f32,
}

/// Resolved scroll offsets bounding a zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: f32,
    pub end: f32,
}

impl ScrollRange {
    pub fn resolve(start: &Marker, end: &EndMarker, geometry: &ZoneGeometry) -> Self {
        let start_px = start.resolve(geometry);
        let end_px = match end {
            EndMarker::Absolute(marker) => marker.resolve(geometry),
            EndMarker::Relative(anchor) => start_px + anchor.resolve(geometry.viewport_height),
        };
        ScrollRange {
            start: start_px,
            end: end_px,
        }
    }

    pub fn len(&self) -> f32 {
        (self.end - self.start).max(0.0)
    }

    /// Unsmoothed progress for a scroll offset, clamped to `[0, 1]`.
    pub fn raw_progress(&self, scroll: f32) -> f32 {
        if !scroll.is_finite() {
            return 0.0;
        }
        let len = self.len();
        if len <= f32::EPSILON {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / len).clamp(0.0, 1.0)
    }

    /// Offset that keeps pinned content fixed in the viewport.
    pub fn pin_offset(&self, scroll: f32) -> f32 {
        if !scroll.is_finite() {
            return 0.0;
        }
        (scroll - self.start).clamp(0.0, self.len())
    }

    /// Extra document height a pinned zone occupies while pinned.
    pub fn pin_spacer(&self) -> f32 {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> ZoneGeometry {
        ZoneGeometry {
            element_top: 1000.0,
            element_height: 600.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn parses_keywords_and_percentages() {
        let marker: Marker = "top 80%".parse().expect("valid marker");
        assert_eq!(marker.element, Anchor::Ratio(0.0));
        assert_eq!(marker.viewport, Anchor::Ratio(0.8));

        let marker: Marker = "bottom top".parse().expect("valid marker");
        assert_eq!(marker.element, Anchor::Ratio(1.0));
        assert_eq!(marker.viewport, Anchor::Ratio(0.0));

        let marker: Marker = "center 120px".parse().expect("valid marker");
        assert_eq!(marker.viewport, Anchor::Pixels(120.0));
    }

    #[test]
    fn rejects_malformed_markers() {
        assert!("top".parse::<Marker>().is_err());
        assert!("top middle".parse::<Marker>().is_err());
        assert!("top 80% extra".parse::<Marker>().is_err());
        assert!(matches!(
            "sideways 10%".parse::<Marker>(),
            Err(SyncError::Configuration(_))
        ));
    }

    #[test]
    fn relative_end_extends_from_start() {
        let start: Marker = "top top".parse().expect("valid start");
        let end: EndMarker = "+=300%".parse().expect("valid end");
        let range = ScrollRange::resolve(&start, &end, &geometry());
        assert_eq!(range.start, 1000.0);
        assert_eq!(range.end, 1000.0 + 2400.0);

        let end: EndMarker = "+=1200".parse().expect("valid pixel end");
        let range = ScrollRange::resolve(&start, &end, &geometry());
        assert_eq!(range.end, 2200.0);
    }

    #[test]
    fn default_markers_resolve_against_viewport() {
        let start: Marker = "top 80%".parse().expect("default start");
        let end: EndMarker = "bottom 20%".parse().expect("default end");
        assert_eq!(start, DEFAULT_START);
        assert_eq!(end, DEFAULT_END);
        let range = ScrollRange::resolve(&DEFAULT_START, &DEFAULT_END, &geometry());
        // top of element at 80% of viewport: 1000 - 640
        assert!((range.start - 360.0).abs() < 1e-3);
        // bottom of element at 20% of viewport: 1600 - 160
        assert!((range.end - 1440.0).abs() < 1e-3);
    }

    #[test]
    fn progress_clamps_outside_range() {
        let range = ScrollRange {
            start: 100.0,
            end: 300.0,
        };
        assert_eq!(range.raw_progress(0.0), 0.0);
        assert_eq!(range.raw_progress(200.0), 0.5);
        assert_eq!(range.raw_progress(900.0), 1.0);
        assert_eq!(range.raw_progress(f32::NAN), 0.0);
    }

    #[test]
    fn degenerate_range_is_a_step() {
        let range = ScrollRange {
            start: 50.0,
            end: 50.0,
        };
        assert_eq!(range.raw_progress(49.0), 0.0);
        assert_eq!(range.raw_progress(50.0), 1.0);
    }

    #[test]
    fn pin_offset_tracks_scroll_within_range() {
        let range = ScrollRange {
            start: 1000.0,
            end: 3400.0,
        };
        assert_eq!(range.pin_offset(500.0), 0.0);
        assert_eq!(range.pin_offset(1500.0), 500.0);
        assert_eq!(range.pin_offset(9000.0), 2400.0);
        assert_eq!(range.pin_spacer(), 2400.0);
    }

    #[test]
    fn markers_display_in_trigger_syntax() {
        let end: EndMarker = "+=300%".parse().expect("valid end");
        assert_eq!(end.to_string(), "+=300%");
        let marker: Marker = "top 85%".parse().expect("valid marker");
        assert_eq!(marker.to_string(), "top 85%");
    }
}
