//! Animation primitives for continuous UI motion.
//!
//! Everything here is a deterministic function of accumulated elapsed
//! time: callers advance animations with explicit `Duration` deltas and
//! never touch a clock, so the same delta sequence always produces the
//! same values.
//!
//! # Building blocks
//! - [`Easing`] - easing curves, including arbitrary cubic beziers
//! - [`TimingAnimation`] - fixed-duration interpolation with start delay
//! - [`Spring`] - damped-oscillator interpolation toward a target
//! - [`Channel`] - an owned animated value admitting one drive at a time

mod channel;
mod easing;
mod spring;
mod timing;

pub use channel::{Channel, Drive};
pub use easing::Easing;
pub use spring::{Spring, SpringParams};
pub use timing::TimingAnimation;

/// Animatable value that can be interpolated.
pub trait Animatable: Clone + Copy {
    /// Linear interpolation between two values.
    fn lerp(from: Self, to: Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

/// Convenience free function mirroring [`Animatable::lerp`] for `f32`.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    Animatable::lerp(from, to, t)
}
