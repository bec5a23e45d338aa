use std::time::{Duration, Instant};

/// Eased programmatic scroll toward a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(in crate::app) struct NavAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl NavAnimation {
    pub(in crate::app) fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        NavAnimation {
            from,
            to,
            started,
            duration,
        }
    }

    pub(in crate::app) fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now` and whether the animation has finished.
    pub(in crate::app) fn position(&self, now: Instant) -> (f32, bool) {
        let total = self.duration.as_secs_f32();
        if total <= f32::EPSILON {
            return (self.to, true);
        }
        let t = (now.saturating_duration_since(self.started).as_secs_f32() / total).clamp(0.0, 1.0);
        if t >= 1.0 {
            return (self.to, true);
        }
        // ease-out cubic
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_from_start_to_target() {
        let t0 = Instant::now();
        let nav = NavAnimation::new(0.0, 1000.0, t0, Duration::from_millis(500));
        assert_eq!(nav.position(t0), (0.0, false));
        let (mid, done) = nav.position(t0 + Duration::from_millis(250));
        assert!(!done);
        assert!(mid > 500.0 && mid < 1000.0, "ease-out is past halfway at t=0.5");
        assert_eq!(nav.position(t0 + Duration::from_millis(600)), (1000.0, true));
    }

    #[test]
    fn zero_duration_jumps() {
        let t0 = Instant::now();
        let nav = NavAnimation::new(300.0, 10.0, t0, Duration::ZERO);
        assert_eq!(nav.position(t0), (10.0, true));
        assert_eq!(nav.target(), 10.0);
    }
}
