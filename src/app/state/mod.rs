mod constants;
mod nav;
mod ui;
mod zones;

use super::layout::PageLayout;
use super::messages::Message;
use crate::config::AppConfig;
use anyhow::{Context, Result};
use iced::Task;
use neuralchat_core::{
    ContentRegistry, DecodeText, DerivedState, ScrollDriver, SectionName, ZoneHandle,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

pub(crate) use constants::*;
pub(in crate::app) use nav::NavAnimation;
pub(in crate::app) use ui::{PaymentDialogState, StatusLine, UiState};
pub(crate) use zones::ZoneKey;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) config_path: PathBuf,
    pub(super) content: ContentRegistry,
    pub(super) layout: PageLayout,
    pub(super) driver: ScrollDriver,
    pub(super) zones: HashMap<ZoneKey, ZoneHandle>,
    pub(super) decode: DecodeText,
    pub(super) rng: StdRng,
    pub(super) nav: Option<NavAnimation>,
    /// Last horizontal offset pushed to the gallery track.
    pub(super) gallery_offset: f32,
    pub(super) ui: UiState,
}

impl App {
    pub fn bootstrap(
        config: AppConfig,
        config_path: PathBuf,
        content: ContentRegistry,
    ) -> (Self, Task<Message>) {
        let layout = PageLayout::compute(
            config.window_width,
            config.window_height - NAV_BAR_HEIGHT,
            content.item_count(SectionName::ParallaxGallery),
        );
        let hero = content.hero();
        let decode = if config.reduced_motion {
            DecodeText::finished(&hero.decode_text)
        } else {
            DecodeText::new(&hero.decode_text, &hero.decode_chars)
        };
        let ui = UiState::new(content.item_count(SectionName::Testimonials));

        let mut app = App {
            config,
            config_path,
            content,
            layout,
            driver: ScrollDriver::new(),
            zones: HashMap::new(),
            decode,
            rng: StdRng::from_entropy(),
            nav: None,
            gallery_offset: 0.0,
            ui,
        };
        if let Err(err) = app.mount_zones() {
            warn!("{err:?}");
            app.ui.status = Some(StatusLine::error(
                "Scroll animations are unavailable for this window size.",
            ));
        }
        app.driver.scroll_to(0.0, Instant::now());
        info!(
            zones = app.zones.len(),
            content_height = app.layout.content_height(),
            reduced_motion = app.config.reduced_motion,
            "Site ready"
        );
        (app, Task::none())
    }

    fn mount_zones(&mut self) -> Result<()> {
        for key in ZoneKey::ALL {
            self.mount_zone(key)?;
        }
        Ok(())
    }

    pub(super) fn mount_zone(&mut self, key: ZoneKey) -> Result<()> {
        let config = zones::zone_config(key, &self.layout, &self.content, self.config.reduced_motion)
            .with_context(|| format!("Failed to configure {key:?} zone"))?;
        let handle = self
            .driver
            .mount(config, &self.layout.geometry(key.block()))
            .with_context(|| format!("Failed to mount {key:?} zone"))?;
        self.zones.insert(key, handle);
        Ok(())
    }

    /// Recompute the layout for a new viewport and move every zone with it.
    pub(super) fn relayout(&mut self, viewport_width: f32, viewport_height: f32) {
        if self.layout.same_viewport(viewport_width, viewport_height) {
            return;
        }
        let previous_travel = self.layout.gallery_travel();
        self.layout = PageLayout::compute(
            viewport_width,
            viewport_height,
            self.content.item_count(SectionName::ParallaxGallery),
        );
        debug!(
            width = self.layout.viewport_width(),
            height = self.layout.viewport_height(),
            content_height = self.layout.content_height(),
            "Relayout"
        );

        for key in ZoneKey::ALL {
            let Some(handle) = self.zones.get(&key).copied() else {
                continue;
            };
            if key.depends_on_travel() && self.layout.gallery_travel() != previous_travel {
                // Travel is baked into the zone's end marker; replace the zone.
                if let Err(err) = self.driver.unmount(handle) {
                    warn!(?key, "Failed to release zone: {err}");
                }
                self.zones.remove(&key);
                if let Err(err) = self.mount_zone(key) {
                    warn!("{err:?}");
                }
                continue;
            }
            if let Err(err) = self.driver.relayout(handle, &self.layout.geometry(key.block())) {
                warn!(?key, "Failed to relayout zone: {err}");
            }
        }
    }

    pub(super) fn zone_state(&self, key: ZoneKey) -> DerivedState {
        self.zones
            .get(&key)
            .and_then(|handle| self.driver.state(*handle).ok())
            .copied()
            .unwrap_or_default()
    }

    pub(super) fn pin_offset(&self, key: ZoneKey) -> f32 {
        self.zones
            .get(&key)
            .map(|handle| self.driver.pin_offset(*handle))
            .unwrap_or(0.0)
    }

    pub(super) fn needs_frames(&self) -> bool {
        self.nav.is_some() || self.driver.is_settling()
    }
}
