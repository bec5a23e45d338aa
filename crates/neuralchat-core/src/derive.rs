//! The pure per-zone state transition.
//!
//! `derive` maps (previous state, sample, zone config) to the next state and
//! holds every formula the renderers depend on. The engine only stores the
//! result.

use crate::smoothing::{ROTATION_SMOOTHING, SMOOTHING_RATE, smooth_step};
use crate::zone::{DerivationKind, ProgressSample, ZoneConfig};
use std::f32::consts::PI;

pub const MAX_BLUR: f32 = 8.0;
pub const MAX_SPACING: f32 = 30.0;
pub const BLUR_VELOCITY_DIVISOR: f32 = 500.0;
pub const SPACING_VELOCITY_DIVISOR: f32 = 100.0;
pub const ROTATION_TILT: f32 = 0.3;
pub const PARALLAX_ROW_TRAVEL: f32 = 200.0;
pub const TITLE_PARALLAX_TRAVEL: f32 = 100.0;
/// Smoothed fields closer than this to their target count as settled.
pub const CONVERGE_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZonePhase {
    #[default]
    Inactive,
    Active,
}

/// Side of the zone an inactive zone rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    #[default]
    Start,
    End,
}

/// Edge crossed by the latest sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneTransition {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

/// Everything renderers read for one zone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedState {
    pub progress: f32,
    pub phase: ZonePhase,
    pub boundary: Boundary,
    pub last_transition: Option<ZoneTransition>,
    pub active_index: usize,
    pub smoothed_blur: f32,
    pub smoothed_spacing: f32,
    pub rotation_y: f32,
    pub rotation_x: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub revealed: bool,
}

impl DerivedState {
    /// Resting state of a freshly registered zone.
    pub fn initial(config: &ZoneConfig) -> Self {
        let mut state = DerivedState::default();
        if let DerivationKind::ParallaxRow { base_offset, .. } = config.kind {
            state.translate_x = base_offset;
        }
        state
    }

    pub fn is_active(&self) -> bool {
        self.phase == ZonePhase::Active
    }

    /// True while a smoothed field still trails the value it rests at when
    /// scrolling stops (rotation at the current progress, blur and spacing
    /// at zero velocity).
    pub fn is_converging(&self, config: &ZoneConfig) -> bool {
        let trails = |value: f32, target: f32| (value - target).abs() > CONVERGE_EPSILON;
        let blurring = trails(self.smoothed_blur, 0.0) || trails(self.smoothed_spacing, 0.0);
        match config.kind {
            DerivationKind::AlbumRotation => {
                blurring
                    || trails(self.rotation_y, rotation_y_target(self.progress))
                    || trails(self.rotation_x, rotation_x_target(self.progress))
            }
            DerivationKind::BlurVelocity => blurring,
            _ => false,
        }
    }
}

pub fn rotation_y_target(progress: f32) -> f32 {
    progress.clamp(0.0, 1.0) * 2.0 * PI
}

pub fn rotation_x_target(progress: f32) -> f32 {
    (progress.clamp(0.0, 1.0) * PI).sin() * ROTATION_TILT
}

/// `min(floor(progress * count), count - 1)`; zero for empty lists.
pub fn active_index(progress: f32, item_count: usize) -> usize {
    if item_count <= 1 {
        return 0;
    }
    let scaled = (progress.clamp(0.0, 1.0) * item_count as f32).floor() as usize;
    scaled.min(item_count - 1)
}

pub fn blur_target(speed: f32) -> f32 {
    (speed.max(0.0) / BLUR_VELOCITY_DIVISOR).min(MAX_BLUR)
}

pub fn spacing_target(speed: f32) -> f32 {
    (speed.max(0.0) / SPACING_VELOCITY_DIVISOR).min(MAX_SPACING)
}

fn classify(progress: f32, previous: &DerivedState) -> (ZonePhase, Boundary) {
    if progress <= 0.0 {
        (ZonePhase::Inactive, Boundary::Start)
    } else if progress >= 1.0 {
        (ZonePhase::Inactive, Boundary::End)
    } else {
        (ZonePhase::Active, previous.boundary)
    }
}

fn transition(previous: &DerivedState, phase: ZonePhase, boundary: Boundary) -> Option<ZoneTransition> {
    match (previous.phase, phase) {
        (ZonePhase::Inactive, ZonePhase::Active) => Some(match previous.boundary {
            Boundary::Start => ZoneTransition::Enter,
            Boundary::End => ZoneTransition::EnterBack,
        }),
        (ZonePhase::Active, ZonePhase::Inactive) => Some(match boundary {
            Boundary::End => ZoneTransition::Leave,
            Boundary::Start => ZoneTransition::LeaveBack,
        }),
        (ZonePhase::Inactive, ZonePhase::Inactive) if previous.boundary != boundary => {
            Some(match boundary {
                Boundary::End => ZoneTransition::Leave,
                Boundary::Start => ZoneTransition::LeaveBack,
            })
        }
        _ => None,
    }
}

/// Advance one zone by one sample.
pub fn derive(previous: &DerivedState, sample: ProgressSample, config: &ZoneConfig) -> DerivedState {
    let progress = sample.clamped_progress();
    let speed = sample.speed();
    let (phase, boundary) = classify(progress, previous);

    let mut next = *previous;
    next.progress = progress;
    next.phase = phase;
    next.boundary = boundary;
    next.last_transition = transition(previous, phase, boundary);
    next.active_index = active_index(progress, config.item_count);

    match config.kind {
        DerivationKind::AlbumRotation => {
            next.rotation_y =
                smooth_step(previous.rotation_y, rotation_y_target(progress), ROTATION_SMOOTHING);
            next.rotation_x =
                smooth_step(previous.rotation_x, rotation_x_target(progress), ROTATION_SMOOTHING);
            apply_velocity_blur(&mut next, previous, speed);
        }
        DerivationKind::BlurVelocity => apply_velocity_blur(&mut next, previous, speed),
        DerivationKind::ParallaxRow {
            direction,
            base_offset,
        } => {
            next.translate_x = progress * PARALLAX_ROW_TRAVEL * -direction.sign() + base_offset;
        }
        DerivationKind::TitleParallax => {
            next.translate_y = -progress * TITLE_PARALLAX_TRAVEL;
        }
        DerivationKind::HorizontalTrack { travel } => {
            next.translate_x = -progress * travel;
        }
        DerivationKind::Reveal => {}
    }

    if progress > 0.0 {
        next.revealed = true;
    }
    next
}

fn apply_velocity_blur(next: &mut DerivedState, previous: &DerivedState, speed: f32) {
    next.smoothed_blur =
        smooth_step(previous.smoothed_blur, blur_target(speed), SMOOTHING_RATE).clamp(0.0, MAX_BLUR);
    next.smoothed_spacing = smooth_step(
        previous.smoothed_spacing,
        spacing_target(speed),
        SMOOTHING_RATE,
    )
    .clamp(0.0, MAX_SPACING);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::RowDirection;

    fn album(count: usize) -> ZoneConfig {
        ZoneConfig::new("album", DerivationKind::AlbumRotation).item_count(count)
    }

    fn feed(config: &ZoneConfig, samples: &[(f32, f32)]) -> DerivedState {
        samples
            .iter()
            .fold(DerivedState::initial(config), |state, (p, v)| {
                derive(&state, ProgressSample::new(*p, *v), config)
            })
    }

    #[test]
    fn idle_samples_carry_rotation_and_blur_to_rest() {
        let config = album(4);
        let mut state = feed(&config, &[(0.0, 0.0), (0.5, 75_000.0)]);
        assert!(state.is_converging(&config));
        assert!(state.rotation_y < rotation_y_target(0.5) / 2.0);

        let mut idle_steps = 0;
        while state.is_converging(&config) {
            state = derive(&state, ProgressSample::new(0.5, 0.0), &config);
            idle_steps += 1;
            assert!(idle_steps < 1_000, "smoothing never settled");
        }
        assert!((state.rotation_y - PI).abs() <= CONVERGE_EPSILON);
        assert!(state.smoothed_blur <= CONVERGE_EPSILON);
        assert!(state.smoothed_spacing <= CONVERGE_EPSILON);
    }

    #[test]
    fn unsmoothed_kinds_never_converge() {
        let config = ZoneConfig::new("title", DerivationKind::TitleParallax);
        let state = feed(&config, &[(0.3, 9_000.0)]);
        assert!(!state.is_converging(&config));
    }

    #[test]
    fn active_index_covers_whole_range() {
        for n in 1..=7usize {
            assert_eq!(active_index(0.0, n), 0);
            assert_eq!(active_index(1.0, n), n - 1);
            for step in 0..=100 {
                let p = step as f32 / 100.0;
                let idx = active_index(p, n);
                assert!(idx < n, "index {idx} out of range for n={n}");
                let expected = ((p * n as f32).floor() as usize).min(n - 1);
                assert_eq!(idx, expected);
            }
        }
    }

    #[test]
    fn album_index_at_quarter_past() {
        let state = feed(&album(4), &[(0.26, 0.0)]);
        assert_eq!(state.active_index, 1);
    }

    #[test]
    fn single_item_always_index_zero() {
        let state = feed(&album(1), &[(0.2, 0.0), (0.99, 0.0), (1.0, 0.0)]);
        assert_eq!(state.active_index, 0);
    }

    #[test]
    fn rotation_is_smoothed_toward_target() {
        let config = album(4);
        let state = feed(&config, &[(0.5, 0.0)]);
        // one step of 0.1 toward pi
        assert!((state.rotation_y - PI * 0.1).abs() < 1e-5);
        assert!((state.rotation_x - 0.3 * 0.1).abs() < 1e-5);

        let settled = feed(&config, &vec![(0.5, 0.0); 300]);
        assert!((settled.rotation_y - PI).abs() < 1e-3);
        assert!(settled.rotation_y <= PI + 1e-6);
    }

    #[test]
    fn blur_and_spacing_stay_bounded() {
        let config = ZoneConfig::new("blur", DerivationKind::BlurVelocity);
        let mut state = DerivedState::initial(&config);
        for velocity in [1e3, -1e6, f32::INFINITY, 5e9, f32::NEG_INFINITY] {
            for _ in 0..50 {
                state = derive(&state, ProgressSample::new(0.5, velocity), &config);
                assert!((0.0..=MAX_BLUR).contains(&state.smoothed_blur));
                assert!((0.0..=MAX_SPACING).contains(&state.smoothed_spacing));
            }
        }
        assert!((state.smoothed_blur - MAX_BLUR).abs() < 1e-3);
    }

    #[test]
    fn blur_targets_follow_velocity_magnitude() {
        assert_eq!(blur_target(1000.0), 2.0);
        assert_eq!(spacing_target(1000.0), 10.0);
        assert_eq!(blur_target(100_000.0), MAX_BLUR);
        assert_eq!(spacing_target(100_000.0), MAX_SPACING);

        let config = ZoneConfig::new("blur", DerivationKind::BlurVelocity);
        let left = feed(&config, &[(0.5, -1000.0)]);
        let right = feed(&config, &[(0.5, 1000.0)]);
        assert_eq!(left.smoothed_blur, right.smoothed_blur);
        assert!((left.smoothed_blur - 0.4).abs() < 1e-6);
        assert!((left.smoothed_spacing - 2.0).abs() < 1e-6);
    }

    #[test]
    fn top_parallax_row_moves_left() {
        let config = ZoneConfig::new(
            "top-row",
            DerivationKind::ParallaxRow {
                direction: RowDirection::Left,
                base_offset: 0.0,
            },
        );
        let state = feed(&config, &[(0.5, 0.0)]);
        assert!((state.translate_x - -100.0).abs() < 1e-5);
    }

    #[test]
    fn bottom_parallax_row_starts_offset_and_moves_right() {
        let config = ZoneConfig::new(
            "bottom-row",
            DerivationKind::ParallaxRow {
                direction: RowDirection::Right,
                base_offset: -100.0,
            },
        );
        assert_eq!(DerivedState::initial(&config).translate_x, -100.0);
        let state = feed(&config, &[(1.0, 0.0)]);
        assert!((state.translate_x - 100.0).abs() < 1e-5);
    }

    #[test]
    fn title_and_track_translate_linearly() {
        let title = ZoneConfig::new("title", DerivationKind::TitleParallax);
        assert!((feed(&title, &[(0.25, 0.0)]).translate_y - -25.0).abs() < 1e-5);

        let track = ZoneConfig::new("track", DerivationKind::HorizontalTrack { travel: 1800.0 });
        assert!((feed(&track, &[(0.5, 0.0)]).translate_x - -900.0).abs() < 1e-3);
    }

    #[test]
    fn overscroll_is_clamped_before_use() {
        let config = ZoneConfig::new("title", DerivationKind::TitleParallax);
        let state = feed(&config, &[(1.4, 0.0)]);
        assert_eq!(state.progress, 1.0);
        assert!((state.translate_y - -100.0).abs() < 1e-5);
        let state = feed(&config, &[(-3.0, 0.0)]);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.translate_y, 0.0);
    }

    #[test]
    fn phases_report_edges_in_both_directions() {
        let config = ZoneConfig::new("reveal", DerivationKind::Reveal);
        let mut state = DerivedState::initial(&config);
        let steps = [
            (0.0, None, ZonePhase::Inactive),
            (0.3, Some(ZoneTransition::Enter), ZonePhase::Active),
            (0.6, None, ZonePhase::Active),
            (1.0, Some(ZoneTransition::Leave), ZonePhase::Inactive),
            (0.8, Some(ZoneTransition::EnterBack), ZonePhase::Active),
            (0.0, Some(ZoneTransition::LeaveBack), ZonePhase::Inactive),
        ];
        for (progress, transition, phase) in steps {
            state = derive(&state, ProgressSample::new(progress, 0.0), &config);
            assert_eq!(state.last_transition, transition, "at progress {progress}");
            assert_eq!(state.phase, phase, "at progress {progress}");
        }
        assert_eq!(state.boundary, Boundary::Start);
    }

    #[test]
    fn jumping_across_zone_reports_final_edge() {
        let config = ZoneConfig::new("reveal", DerivationKind::Reveal);
        let state = feed(&config, &[(1.0, 0.0)]);
        assert_eq!(state.last_transition, Some(ZoneTransition::Leave));
        assert_eq!(state.boundary, Boundary::End);
    }

    #[test]
    fn reveal_latches_once_entered() {
        let config = ZoneConfig::new("stats", DerivationKind::Reveal);
        let state = feed(&config, &[(0.0, 0.0)]);
        assert!(!state.revealed);
        let state = feed(&config, &[(0.1, 0.0), (0.0, 0.0)]);
        assert!(state.revealed, "reveal must not reset after scrolling back");
    }
}
