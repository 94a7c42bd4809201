// SPDX-License-Identifier: MPL-2.0
//! Skeleton pulse animation: opacity oscillating 0.3 → 0.6 → 0.3.
//!
//! The wave is a pure function of elapsed time, so every placeholder tile
//! derives its opacity from the same anchor instant and no per-tile timers
//! exist. The tick subscription that redraws the wave lives only while a
//! skeleton is on screen (see `app::subscription`), which gives the
//! acquire-on-mount / release-on-unmount behavior of the animation.

use std::time::{Duration, Instant};

/// Minimum tile opacity, at the start and end of a cycle.
pub const MIN_OPACITY: f32 = 0.3;

/// Peak tile opacity, reached mid-cycle.
pub const MAX_OPACITY: f32 = 0.6;

/// Time to fade from minimum to peak; the fade back takes the same.
pub const RAMP: Duration = Duration::from_millis(800);

/// Anchor for the skeleton pulse, captured when a feed enters its loading
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonPulse {
    started: Instant,
}

impl SkeletonPulse {
    #[must_use]
    pub fn starting_at(started: Instant) -> Self {
        Self { started }
    }

    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Opacity of a placeholder tile at `now`: a triangle wave rising for
    /// [`RAMP`], falling for [`RAMP`], repeating forever.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let period = 2 * RAMP;
        let phase = Duration::from_nanos((elapsed.as_nanos() % period.as_nanos()) as u64);

        let ramp = RAMP.as_secs_f32();
        let t = phase.as_secs_f32();
        let progress = if t <= ramp { t / ramp } else { (2.0 * ramp - t) / ramp };
        MIN_OPACITY + (MAX_OPACITY - MIN_OPACITY) * progress
    }
}

impl Default for SkeletonPulse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn wave_hits_min_peak_min_over_one_cycle() {
        let start = Instant::now();
        let pulse = SkeletonPulse::starting_at(start);

        assert_abs_diff_eq!(pulse.opacity(start), MIN_OPACITY, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(
            pulse.opacity(start + Duration::from_millis(800)),
            MAX_OPACITY,
            epsilon = F32_EPSILON
        );
        assert_abs_diff_eq!(
            pulse.opacity(start + Duration::from_millis(1600)),
            MIN_OPACITY,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn wave_is_halfway_up_at_quarter_cycle() {
        let start = Instant::now();
        let pulse = SkeletonPulse::starting_at(start);
        assert_abs_diff_eq!(
            pulse.opacity(start + Duration::from_millis(400)),
            0.45,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn wave_repeats_across_cycles() {
        let start = Instant::now();
        let pulse = SkeletonPulse::starting_at(start);
        let first = pulse.opacity(start + Duration::from_millis(300));
        let later = pulse.opacity(start + Duration::from_millis(300 + 3200));
        assert_abs_diff_eq!(first, later, epsilon = F32_EPSILON);
    }

    #[test]
    fn opacity_stays_within_bounds() {
        let start = Instant::now();
        let pulse = SkeletonPulse::starting_at(start);
        for ms in (0..4000).step_by(37) {
            let opacity = pulse.opacity(start + Duration::from_millis(ms));
            assert!((MIN_OPACITY..=MAX_OPACITY).contains(&opacity), "at {ms}ms");
        }
    }
}
