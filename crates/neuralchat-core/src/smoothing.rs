//! First-order low-pass filtering used by the velocity and rotation fields.
//!
//! Each call advances the value one step toward its target. The filter never
//! overshoots: for a constant target the sequence converges monotonically.

/// Step factor for blur and letter-spacing.
pub const SMOOTHING_RATE: f32 = 0.2;
/// Step factor for cube rotation.
pub const ROTATION_SMOOTHING: f32 = 0.1;

/// One step of `next = prev + (target - prev) * rate`.
///
/// `rate` is clamped to `[0, 1]`; non-finite inputs leave `prev` unchanged.
pub fn smooth_step(prev: f32, target: f32, rate: f32) -> f32 {
    if !prev.is_finite() {
        return if target.is_finite() { target } else { 0.0 };
    }
    if !target.is_finite() || !rate.is_finite() {
        return prev;
    }
    let rate = rate.clamp(0.0, 1.0);
    let next = prev + (target - prev) * rate;
    // Float rounding must not carry the value past its target.
    if (target >= prev && next > target) || (target <= prev && next < target) {
        target
    } else {
        next
    }
}
