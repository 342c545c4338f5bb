use std::time::Duration;

use crate::{Easing, Spring, SpringParams, TimingAnimation};

/// The active interpolation on a [`Channel`].
#[derive(Debug, Clone)]
pub enum Drive {
    /// Holding the current value.
    Idle,
    /// Fixed-duration interpolation.
    Timing(TimingAnimation),
    /// Spring interpolation.
    Spring(Spring),
    /// A timing leg chained into a spring leg.
    Sequence {
        /// The leg played first.
        first: TimingAnimation,
        /// The spring that takes over when `first` completes.
        then: Spring,
    },
}

/// An owned, continuously-interpolated value.
///
/// A channel admits exactly one drive at a time: starting a new
/// animation unconditionally replaces the previous one (last write
/// wins, no queue), and the new drive always departs from the channel's
/// current value.
#[derive(Debug, Clone)]
pub struct Channel {
    value: f32,
    drive: Drive,
}

impl Channel {
    /// Create a settled channel holding `value`.
    pub fn new(value: f32) -> Self {
        Self {
            value,
            drive: Drive::Idle,
        }
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The steady-state value of the active drive. A settled channel's
    /// target is its current value; a sequence reports its final leg.
    pub fn target(&self) -> f32 {
        match &self.drive {
            Drive::Idle => self.value,
            Drive::Timing(anim) => anim.target(),
            Drive::Spring(spring) => spring.target(),
            Drive::Sequence { then, .. } => then.target(),
        }
    }

    /// Whether the channel is at rest.
    pub fn is_settled(&self) -> bool {
        matches!(self.drive, Drive::Idle)
    }

    /// Start a timing animation toward `target`.
    pub fn timing_to(&mut self, target: f32, duration: Duration, easing: Easing) {
        self.drive = Drive::Timing(TimingAnimation::new(self.value, target, duration, easing));
    }

    /// Start a spring animation toward `target`.
    pub fn spring_to(&mut self, target: f32, params: SpringParams) {
        self.drive = Drive::Spring(Spring::new(self.value, target, params));
    }

    /// Start a spring animation toward `target` whose integration begins
    /// only after `delay` (the channel holds its value meanwhile).
    pub fn spring_to_delayed(&mut self, target: f32, params: SpringParams, delay: Duration) {
        self.drive = Drive::Spring(Spring::new(self.value, target, params).delay(delay));
    }

    /// Play a timing leg to `via`, then chain immediately into a spring
    /// toward `target`. The spring departs from wherever the timing leg
    /// ends.
    pub fn timing_then_spring(
        &mut self,
        via: f32,
        duration: Duration,
        easing: Easing,
        target: f32,
        params: SpringParams,
    ) {
        self.drive = Drive::Sequence {
            first: TimingAnimation::new(self.value, via, duration, easing),
            then: Spring::new(via, target, params),
        };
    }

    /// Advance the active drive by delta time and return the new value.
    pub fn tick(&mut self, delta: Duration) -> f32 {
        let drive = std::mem::replace(&mut self.drive, Drive::Idle);
        self.drive = match drive {
            Drive::Idle => Drive::Idle,
            Drive::Timing(mut anim) => {
                self.value = anim.tick(delta);
                if anim.is_finished() {
                    Drive::Idle
                } else {
                    Drive::Timing(anim)
                }
            }
            Drive::Spring(mut spring) => {
                self.value = spring.tick(delta);
                if spring.is_settled() {
                    Drive::Idle
                } else {
                    Drive::Spring(spring)
                }
            }
            Drive::Sequence { mut first, mut then } => {
                self.value = first.tick(delta);
                if first.is_finished() {
                    // Chain: the spring takes over from the leg-a end
                    // value, consuming whatever part of this tick the
                    // timing leg did not use.
                    then.reset_from(self.value);
                    let excess = first.excess();
                    if !excess.is_zero() {
                        self.value = then.tick(excess);
                    }
                    if then.is_settled() {
                        Drive::Idle
                    } else {
                        Drive::Spring(then)
                    }
                } else {
                    Drive::Sequence { first, then }
                }
            }
        };
        self.value
    }
}
