//! Wires the scroll source to the engine for a set of mounted sections.

use crate::derive::DerivedState;
use crate::engine::{ScrollSyncEngine, ZoneHandle};
use crate::error::SyncError;
use crate::marker::ZoneGeometry;
use crate::tracker::{ObservationHandle, ScrollSource, ZoneTracker};
use crate::zone::ZoneConfig;
use std::collections::HashMap;
use std::time::Instant;
use tracing::warn;

#[derive(Default)]
pub struct ScrollDriver {
    engine: ScrollSyncEngine,
    source: ScrollSource,
    observations: HashMap<ZoneHandle, ObservationHandle>,
    scroll: f32,
}

impl ScrollDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone and start observing it.
    pub fn mount(
        &mut self,
        config: ZoneConfig,
        geometry: &ZoneGeometry,
    ) -> Result<ZoneHandle, SyncError> {
        let handle = self.engine.register_zone(config)?;
        let config = self.engine.config(handle)?;
        let observation = self.source.observe(handle, config, geometry);
        self.observations.insert(handle, observation);
        Ok(handle)
    }

    /// Stop observation and release the zone before returning.
    pub fn unmount(&mut self, handle: ZoneHandle) -> Result<(), SyncError> {
        if let Some(observation) = self.observations.remove(&handle) {
            observation.cancel();
        }
        self.engine.unregister_zone(handle)
    }

    pub fn relayout(&mut self, handle: ZoneHandle, geometry: &ZoneGeometry) -> Result<(), SyncError> {
        let config = self.engine.config(handle)?;
        self.source.relayout(handle, config, geometry);
        Ok(())
    }

    /// Feed a new scroll offset to every live zone.
    pub fn scroll_to(&mut self, scroll: f32, now: Instant) {
        if scroll.is_finite() {
            self.scroll = scroll;
        }
        self.pump(now);
    }

    /// Advance scrubbed zones and smoothed fields without new scroll input.
    pub fn frame(&mut self, now: Instant) {
        self.pump(now);
    }

    /// True while another frame would still change some zone: a scrub is
    /// catching up, or rotation/blur trails its resting target.
    pub fn is_settling(&self) -> bool {
        self.source.is_settling(self.scroll) || self.engine.is_converging()
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn state(&self, handle: ZoneHandle) -> Result<&DerivedState, SyncError> {
        self.engine.derived(handle)
    }

    pub fn tracker(&self, handle: ZoneHandle) -> Option<&ZoneTracker> {
        self.source.tracker(handle)
    }

    pub fn pin_offset(&self, handle: ZoneHandle) -> f32 {
        self.tracker(handle)
            .map(|tracker| tracker.pin_offset(self.scroll))
            .unwrap_or(0.0)
    }

    pub fn engine(&self) -> &ScrollSyncEngine {
        &self.engine
    }

    fn pump(&mut self, now: Instant) {
        for (handle, sample) in self.source.update(self.scroll, now) {
            if let Err(err) = self.engine.on_sample(handle, sample) {
                warn!(%handle, "Dropping sample for released zone: {err}");
            }
        }
    }
}
