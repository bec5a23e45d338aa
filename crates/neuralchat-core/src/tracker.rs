//! Scroll progress source: turns raw scroll offsets into per-zone samples.
//!
//! Velocity is measured between consecutive updates in px/s. Scrubbed zones
//! lag behind the raw progress with an exponential catch-up whose time
//! constant is the zone's `scrub` seconds, so the caller keeps ticking frames
//! while `is_settling` reports true.

use crate::engine::ZoneHandle;
use crate::marker::{ScrollRange, ZoneGeometry};
use crate::zone::{ProgressSample, ZoneConfig};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Instant;
use tracing::debug;

/// Scrubbed progress snaps to raw once it is this close.
pub const SETTLE_EPSILON: f32 = 1e-3;

/// Cancels one observation; checked before every emission.
#[derive(Clone, Debug, Default)]
pub struct ObservationHandle {
    cancelled: Arc<AtomicBool>,
}

impl ObservationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone)]
pub struct ZoneTracker {
    range: ScrollRange,
    scrub: f32,
    pinned: bool,
    reported: f32,
    last: Option<(f32, Instant)>,
}

impl ZoneTracker {
    pub fn new(config: &ZoneConfig, geometry: &ZoneGeometry) -> Self {
        ZoneTracker {
            range: ScrollRange::resolve(&config.start, &config.end, geometry),
            scrub: config.scrub.max(0.0),
            pinned: config.pinned,
            reported: 0.0,
            last: None,
        }
    }

    /// Re-resolve markers after a layout change; keeps the reported progress.
    pub fn relayout(&mut self, config: &ZoneConfig, geometry: &ZoneGeometry) {
        self.range = ScrollRange::resolve(&config.start, &config.end, geometry);
    }

    pub fn range(&self) -> ScrollRange {
        self.range
    }

    pub fn pinned(&self) -> bool {
        self.pinned
    }

    pub fn progress(&self) -> f32 {
        self.reported
    }

    /// Offset holding pinned content in place; zero for unpinned zones.
    pub fn pin_offset(&self, scroll: f32) -> f32 {
        if self.pinned {
            self.range.pin_offset(scroll)
        } else {
            0.0
        }
    }

    pub fn is_settling(&self, scroll: f32) -> bool {
        (self.range.raw_progress(scroll) - self.reported).abs() > 0.0
    }

    pub fn update(&mut self, scroll: f32, now: Instant) -> ProgressSample {
        let raw = self.range.raw_progress(scroll);
        let (velocity, dt) = match self.last {
            Some((last_scroll, last_at)) => {
                let dt = now.saturating_duration_since(last_at).as_secs_f32();
                let velocity = if dt > f32::EPSILON && scroll.is_finite() {
                    (scroll - last_scroll) / dt
                } else {
                    0.0
                };
                (velocity, Some(dt))
            }
            None => (0.0, None),
        };

        self.reported = match dt {
            Some(dt) if self.scrub > 0.0 => {
                let alpha = 1.0 - (-dt / self.scrub).exp();
                let next = self.reported + (raw - self.reported) * alpha;
                if (raw - next).abs() < SETTLE_EPSILON {
                    raw
                } else {
                    next
                }
            }
            _ => raw,
        };
        if scroll.is_finite() {
            self.last = Some((scroll, now));
        }
        ProgressSample::new(self.reported, velocity)
    }
}

struct Observation {
    zone: ZoneHandle,
    handle: ObservationHandle,
    tracker: ZoneTracker,
}

/// All live observations, updated together on each scroll event or frame.
#[derive(Default)]
pub struct ScrollSource {
    observations: Vec<Observation>,
}

impl ScrollSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(
        &mut self,
        zone: ZoneHandle,
        config: &ZoneConfig,
        geometry: &ZoneGeometry,
    ) -> ObservationHandle {
        let handle = ObservationHandle::new();
        let tracker = ZoneTracker::new(config, geometry);
        let range = tracker.range();
        debug!(
            zone = %config.id,
            start = range.start,
            end = range.end,
            "Observing trigger zone"
        );
        self.observations.push(Observation {
            zone,
            handle: handle.clone(),
            tracker,
        });
        handle
    }

    pub fn relayout(&mut self, zone: ZoneHandle, config: &ZoneConfig, geometry: &ZoneGeometry) {
        if let Some(observation) = self.live_mut(zone) {
            observation.tracker.relayout(config, geometry);
        }
    }

    pub fn tracker(&self, zone: ZoneHandle) -> Option<&ZoneTracker> {
        self.observations
            .iter()
            .find(|obs| obs.zone == zone && !obs.handle.is_cancelled())
            .map(|obs| &obs.tracker)
    }

    /// Emit one sample per live observation, in registration order.
    pub fn update(&mut self, scroll: f32, now: Instant) -> Vec<(ZoneHandle, ProgressSample)> {
        self.observations.retain(|obs| !obs.handle.is_cancelled());
        self.observations
            .iter_mut()
            .map(|obs| (obs.zone, obs.tracker.update(scroll, now)))
            .collect()
    }

    pub fn is_settling(&self, scroll: f32) -> bool {
        self.observations
            .iter()
            .any(|obs| !obs.handle.is_cancelled() && obs.tracker.is_settling(scroll))
    }

    pub fn len(&self) -> usize {
        self.observations
            .iter()
            .filter(|obs| !obs.handle.is_cancelled())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn live_mut(&mut self, zone: ZoneHandle) -> Option<&mut Observation> {
        self.observations
            .iter_mut()
            .find(|obs| obs.zone == zone && !obs.handle.is_cancelled())
    }
}
