use std::time::Duration;

use crate::{Animatable, Easing};

/// Fixed-duration interpolation from a start value to a target,
/// following an easing curve, with an optional start delay.
///
/// The value is a pure function of accumulated elapsed time: while the
/// delay has not elapsed the animation holds its start value.
#[derive(Debug, Clone)]
pub struct TimingAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    delay: Duration,
    elapsed: Duration,
}

impl TimingAnimation {
    /// Create a new timing animation.
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            delay: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    /// Set delay before the interpolation starts.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The value this animation converges to.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether the animation has run to completion.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// Elapsed time accumulated beyond completion. Zero while running.
    pub fn excess(&self) -> Duration {
        self.elapsed.saturating_sub(self.delay + self.duration)
    }

    /// Advance by delta time and return the current value.
    pub fn tick(&mut self, delta: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(delta);
        self.value_at(self.elapsed)
    }

    /// Current value without advancing time.
    pub fn value(&self) -> f32 {
        self.value_at(self.elapsed)
    }

    fn value_at(&self, elapsed: Duration) -> f32 {
        if elapsed < self.delay {
            return self.from;
        }
        if self.duration.is_zero() {
            return self.to;
        }
        let active = elapsed - self.delay;
        let progress = (active.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        Animatable::lerp(self.from, self.to, self.easing.apply(progress))
    }
}
