//! Elapsed-time accumulator for timed states.
//!
//! States that wait, fade, or pace an effect keep a `Timer`, reset it on
//! `enter` and feed it the frame delta on every `update`.

use std::time::Duration;

/// Accumulates frame deltas since the last reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    elapsed: Duration,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from zero again.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Add one frame delta and return the new total.
    pub fn tick(&mut self, dt: Duration) -> Duration {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.elapsed
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// True once at least `threshold` has accumulated.
    pub fn has_reached(&self, threshold: Duration) -> bool {
        self.elapsed >= threshold
    }

    /// Fraction of `span` covered so far, clamped to `0.0..=1.0`.
    ///
    /// A zero span counts as complete.
    pub fn progress(&self, span: Duration) -> f32 {
        if span.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Convert configured seconds into a `Duration`, treating invalid input as zero.
pub(crate) fn secs(value: f32) -> Duration {
    Duration::try_from_secs_f32(value).unwrap_or(Duration::ZERO)
}
