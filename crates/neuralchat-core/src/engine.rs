//! Arena of independent trigger zones.
//!
//! Each zone owns its config and its last published `DerivedState`. Handles
//! carry a generation so a released slot can be reused without a stale handle
//! reaching the new occupant.

use crate::derive::{DerivedState, derive};
use crate::error::SyncError;
use crate::zone::{ProgressSample, ZoneConfig};
use std::fmt;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneHandle {
    index: u32,
    generation: u32,
}

impl fmt::Display for ZoneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

struct ZoneSlot {
    generation: u32,
    zone: Option<Zone>,
}

struct Zone {
    config: ZoneConfig,
    state: DerivedState,
}

#[derive(Default)]
pub struct ScrollSyncEngine {
    slots: Vec<ZoneSlot>,
    free: Vec<u32>,
    live: usize,
}

impl ScrollSyncEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_zone(&mut self, config: ZoneConfig) -> Result<ZoneHandle, SyncError> {
        config.validate()?;
        let zone = Zone {
            state: DerivedState::initial(&config),
            config,
        };
        debug!(
            zone = %zone.config.id,
            kind = zone.config.kind.label(),
            pinned = zone.config.pinned,
            scrub = zone.config.scrub,
            items = zone.config.item_count,
            "Registered trigger zone"
        );

        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.zone = Some(zone);
                ZoneHandle {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = u32::try_from(self.slots.len())
                    .map_err(|_| SyncError::config("zone arena is full"))?;
                self.slots.push(ZoneSlot {
                    generation: 0,
                    zone: Some(zone),
                });
                ZoneHandle {
                    index,
                    generation: 0,
                }
            }
        };
        self.live += 1;
        Ok(handle)
    }

    /// Push one sample through the zone and publish the result.
    pub fn on_sample(
        &mut self,
        handle: ZoneHandle,
        sample: ProgressSample,
    ) -> Result<DerivedState, SyncError> {
        let zone = self.zone_mut(handle)?;
        let next = derive(&zone.state, sample, &zone.config);
        if let Some(transition) = next.last_transition {
            debug!(zone = %zone.config.id, ?transition, progress = next.progress, "Zone boundary crossed");
        }
        trace!(
            zone = %zone.config.id,
            progress = next.progress,
            velocity = sample.velocity,
            index = next.active_index,
            "Derived zone state"
        );
        zone.state = next;
        Ok(next)
    }

    /// Release the zone; the handle is dead afterwards.
    pub fn unregister_zone(&mut self, handle: ZoneHandle) -> Result<(), SyncError> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation && slot.zone.is_some())
            .ok_or(SyncError::UnknownZone(handle))?;
        if let Some(zone) = slot.zone.take() {
            debug!(zone = %zone.config.id, "Unregistered trigger zone");
        }
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.live -= 1;
        Ok(())
    }

    pub fn derived(&self, handle: ZoneHandle) -> Result<&DerivedState, SyncError> {
        self.zone(handle).map(|zone| &zone.state)
    }

    pub fn config(&self, handle: ZoneHandle) -> Result<&ZoneConfig, SyncError> {
        self.zone(handle).map(|zone| &zone.config)
    }

    pub fn contains(&self, handle: ZoneHandle) -> bool {
        self.zone(handle).is_ok()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Whether any zone's smoothed fields still need idle samples.
    pub fn is_converging(&self) -> bool {
        self.slots
            .iter()
            .filter_map(|slot| slot.zone.as_ref())
            .any(|zone| zone.state.is_converging(&zone.config))
    }

    pub fn handles(&self) -> impl Iterator<Item = ZoneHandle> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.zone.as_ref().map(|_| ZoneHandle {
                index: index as u32,
                generation: slot.generation,
            })
        })
    }

    fn zone(&self, handle: ZoneHandle) -> Result<&Zone, SyncError> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.zone.as_ref())
            .ok_or(SyncError::UnknownZone(handle))
    }

    fn zone_mut(&mut self, handle: ZoneHandle) -> Result<&mut Zone, SyncError> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.zone.as_mut())
            .ok_or(SyncError::UnknownZone(handle))
    }
}
