use std::time::Duration;

/// Damped-oscillator parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Damping coefficient (higher = less oscillation).
    pub damping: f32,
    /// Spring stiffness (higher = faster convergence).
    pub stiffness: f32,
    /// Mass of the animated value.
    pub mass: f32,
}

impl SpringParams {
    /// Create spring parameters.
    pub const fn new(damping: f32, stiffness: f32, mass: f32) -> Self {
        Self {
            damping,
            stiffness,
            mass,
        }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::new(10.0, 100.0, 1.0)
    }
}

/// Spring physics animation converging to a target value.
///
/// Integrated with semi-implicit Euler. An optional start delay holds
/// the current value before integration begins; the delay is consumed
/// from the first ticks.
#[derive(Debug, Clone)]
pub struct Spring {
    target: f32,
    current: f32,
    velocity: f32,
    params: SpringParams,
    /// Displacement/velocity threshold below which the spring snaps to rest.
    rest_threshold: f32,
    delay: Duration,
    settled: bool,
}

impl Spring {
    /// Create a spring at `initial` converging to `target`.
    pub fn new(initial: f32, target: f32, params: SpringParams) -> Self {
        Self {
            target,
            current: initial,
            velocity: 0.0,
            params,
            rest_threshold: 0.001,
            delay: Duration::ZERO,
            settled: false,
        }
    }

    /// Set delay before integration starts.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The value the spring converges to.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current value.
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Whether the spring has come to rest at its target.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Whether the start delay is still pending.
    pub fn is_delayed(&self) -> bool {
        !self.delay.is_zero()
    }

    /// Restart integration from `value` with zero velocity, keeping the
    /// target and parameters.
    pub fn reset_from(&mut self, value: f32) {
        self.current = value;
        self.velocity = 0.0;
        self.settled = false;
    }

    /// Advance spring physics by delta time and return the current value.
    pub fn tick(&mut self, delta: Duration) -> f32 {
        if self.settled {
            return self.target;
        }

        let mut delta = delta;
        if !self.delay.is_zero() {
            if delta <= self.delay {
                self.delay -= delta;
                return self.current;
            }
            delta -= self.delay;
            self.delay = Duration::ZERO;
        }

        let dt = delta.as_secs_f32();
        let displacement = self.current - self.target;

        // F = -kx - cv
        let spring_force = -self.params.stiffness * displacement;
        let damping_force = -self.params.damping * self.velocity;
        let acceleration = (spring_force + damping_force) / self.params.mass;

        // Semi-implicit Euler integration.
        self.velocity += acceleration * dt;
        self.current += self.velocity * dt;

        if (self.current - self.target).abs() < self.rest_threshold
            && self.velocity.abs() < self.rest_threshold
        {
            self.current = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }

        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_spring_converges() {
        let mut spring = Spring::new(0.0, 100.0, SpringParams::new(20.0, 200.0, 1.0));

        for _ in 0..200 {
            spring.tick(FRAME);
        }

        assert!((spring.current() - 100.0).abs() < 0.01);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_underdamped_overshoots() {
        // Bar entrance profile: damping 20, stiffness 300.
        let mut spring = Spring::new(100.0, 0.0, SpringParams::new(20.0, 300.0, 1.0));

        let mut min = f32::MAX;
        for _ in 0..300 {
            min = min.min(spring.tick(FRAME));
        }

        assert!(min < 0.0, "underdamped spring should overshoot, min={min}");
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_delay_holds_value() {
        let mut spring = Spring::new(1.0, 1.05, SpringParams::new(15.0, 400.0, 0.8))
            .delay(Duration::from_millis(100));

        assert_eq!(spring.tick(Duration::from_millis(50)), 1.0);
        assert!(spring.is_delayed());

        // Crossing the delay boundary starts integration with the remainder.
        let val = spring.tick(Duration::from_millis(66));
        assert!(!spring.is_delayed());
        assert!(val > 1.0);
    }

    #[test]
    fn test_spring_reset_from() {
        let mut spring = Spring::new(0.0, 1.0, SpringParams::default());
        for _ in 0..500 {
            spring.tick(FRAME);
        }
        assert!(spring.is_settled());

        spring.reset_from(0.5);
        assert!(!spring.is_settled());
        assert_eq!(spring.current(), 0.5);
        let val = spring.tick(FRAME);
        assert!(val > 0.5);
    }

    #[test]
    fn test_spring_deterministic() {
        let params = SpringParams::new(12.0, 500.0, 0.6);
        let mut a = Spring::new(0.88, 1.05, params);
        let mut b = Spring::new(0.88, 1.05, params);
        for _ in 0..60 {
            assert_eq!(a.tick(FRAME), b.tick(FRAME));
        }
    }
}
