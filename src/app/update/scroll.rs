use super::super::state::{App, NAV_BAR_HEIGHT, NAV_SCROLL_DURATION, NavAnimation, TRACK_SYNC_EPSILON, ZoneKey};
use super::Effect;
use neuralchat_core::SectionName;
use std::time::{Duration, Instant};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        effects: &mut Vec<Effect>,
    ) {
        self.relayout(viewport_width, viewport_height);
        self.driver.scroll_to(sanitize_offset(offset_y), Instant::now());
        self.sync_gallery_track(effects);
    }

    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<Effect>,
    ) {
        if width.is_finite() && height.is_finite() {
            self.config.window_width = width;
            self.config.window_height = height;
        }
        self.relayout(width, height - NAV_BAR_HEIGHT);
        let scroll = self.driver.scroll().min(self.layout.max_scroll());
        self.driver.scroll_to(scroll, Instant::now());
        self.sync_gallery_track(effects);
    }

    pub(super) fn handle_frame(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if let Some(nav) = self.nav {
            let (y, done) = nav.position(now);
            effects.push(Effect::ScrollTo(y));
            self.driver.scroll_to(y, now);
            if done {
                self.nav = None;
            }
        } else {
            self.driver.frame(now);
        }
        self.sync_gallery_track(effects);
    }

    pub(super) fn handle_navigate(&mut self, section: SectionName, effects: &mut Vec<Effect>) {
        let target = self.layout.section_offset(section);
        let from = self.driver.scroll();
        info!(%section, from, target, "Navigating to section");
        let duration = if self.config.reduced_motion {
            Duration::ZERO
        } else {
            NAV_SCROLL_DURATION
        };
        if duration.is_zero() || (target - from).abs() < 1.0 {
            self.nav = None;
            effects.push(Effect::ScrollTo(target));
            self.driver.scroll_to(target, Instant::now());
            self.sync_gallery_track(effects);
        } else {
            self.nav = Some(NavAnimation::new(from, target, Instant::now(), duration));
        }
    }

    /// Push the gallery zone's translation to the horizontal track.
    pub(super) fn sync_gallery_track(&mut self, effects: &mut Vec<Effect>) {
        let offset = -self.zone_state(ZoneKey::Gallery).translate_x;
        if (offset - self.gallery_offset).abs() >= TRACK_SYNC_EPSILON {
            debug!(offset, "Syncing gallery track");
            self.gallery_offset = offset;
            effects.push(Effect::SyncGalleryTrack(offset));
        }
    }
}

fn sanitize_offset(offset: f32) -> f32 {
    if offset.is_finite() { offset.max(0.0) } else { 0.0 }
}
