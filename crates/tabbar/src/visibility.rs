//! Bar visibility: a two-state machine driving the whole-bar channels.

use std::time::Duration;

use motion::{Channel, Easing, SpringParams};

/// Whether the bar is shown or suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarMode {
    /// Bar is shown and interactive.
    Visible,
    /// Bar is off-screen, ignores input, and is hidden from the
    /// accessibility tree.
    Hidden,
}

/// Vertical offset of the bar while hidden (and before mount).
pub const HIDDEN_TRANSLATE_Y: f32 = 100.0;

const EXIT_TRANSLATE: Duration = Duration::from_millis(220);
const EXIT_OPACITY: Duration = Duration::from_millis(180);
const ENTER_OPACITY: Duration = Duration::from_millis(250);
const ENTER_SPRING: SpringParams = SpringParams::new(20.0, 300.0, 1.0);

/// Two-state controller for whole-bar visibility.
///
/// The bar mounts off-screen and transparent in `Visible` mode;
/// [`VisibilityController::mount`] plays the entrance. Afterwards,
/// transitions fire only when the suppression predicate actually
/// changes, so in-flight animations are not restarted by redundant
/// recomputes. A transition started before the previous one settles
/// simply overwrites the channel targets.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    mode: BarMode,
    translate_y: Channel,
    opacity: Channel,
}

impl VisibilityController {
    /// Create the controller in its mount state: mode `Visible`,
    /// translate-y at [`HIDDEN_TRANSLATE_Y`], opacity 0.
    pub fn new() -> Self {
        Self {
            mode: BarMode::Visible,
            translate_y: Channel::new(HIDDEN_TRANSLATE_Y),
            opacity: Channel::new(0.0),
        }
    }

    /// Start the entrance animation. Called once when the bar mounts,
    /// before any path has been observed.
    pub fn mount(&mut self) {
        self.enter();
    }

    /// Apply the suppression predicate. Only an actual flip triggers a
    /// transition.
    pub fn set_hidden(&mut self, hidden: bool) {
        let currently = self.mode == BarMode::Hidden;
        if hidden == currently {
            return;
        }
        if hidden {
            log::debug!("tab bar visibility: visible -> hidden");
            self.mode = BarMode::Hidden;
            self.translate_y
                .timing_to(HIDDEN_TRANSLATE_Y, EXIT_TRANSLATE, Easing::EaseOutQuad);
            self.opacity.timing_to(0.0, EXIT_OPACITY, Easing::EaseOutQuad);
        } else {
            log::debug!("tab bar visibility: hidden -> visible");
            self.enter();
        }
    }

    fn enter(&mut self) {
        self.mode = BarMode::Visible;
        self.translate_y.spring_to(0.0, ENTER_SPRING);
        self.opacity.timing_to(1.0, ENTER_OPACITY, Easing::EaseOutQuad);
    }

    /// Current mode.
    pub fn mode(&self) -> BarMode {
        self.mode
    }

    /// Whether the bar accepts input. The mode flips at transition
    /// trigger time, so input is rejected for the whole exit animation.
    pub fn accepts_input(&self) -> bool {
        self.mode == BarMode::Visible
    }

    /// Whether the bar is excluded from the accessibility tree.
    pub fn accessibility_hidden(&self) -> bool {
        !self.accepts_input()
    }

    /// Current vertical offset.
    pub fn translate_y(&self) -> f32 {
        self.translate_y.value()
    }

    /// Current opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Steady-state targets of the two channels, for assertions.
    pub fn targets(&self) -> (f32, f32) {
        (self.translate_y.target(), self.opacity.target())
    }

    /// Advance both channels.
    pub fn tick(&mut self, delta: Duration) {
        self.translate_y.tick(delta);
        self.opacity.tick(delta);
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_mount_state() {
        let bar = VisibilityController::new();
        assert_eq!(bar.mode(), BarMode::Visible);
        assert_eq!(bar.translate_y(), HIDDEN_TRANSLATE_Y);
        assert_eq!(bar.opacity(), 0.0);
    }

    #[test]
    fn test_entrance_animates_in() {
        let mut bar = VisibilityController::new();
        bar.mount();
        assert_eq!(bar.targets(), (0.0, 1.0));

        bar.tick(FRAME);
        assert!(bar.translate_y() < HIDDEN_TRANSLATE_Y);
        assert!(bar.opacity() > 0.0);

        for _ in 0..300 {
            bar.tick(FRAME);
        }
        assert!(bar.translate_y().abs() < 0.01);
        assert!((bar.opacity() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_hide_targets_offscreen() {
        let mut bar = VisibilityController::new();
        bar.mount();
        for _ in 0..300 {
            bar.tick(FRAME);
        }

        bar.set_hidden(true);
        assert_eq!(bar.mode(), BarMode::Hidden);
        assert_eq!(bar.targets(), (HIDDEN_TRANSLATE_Y, 0.0));
        assert!(!bar.accepts_input());
        assert!(bar.accessibility_hidden());

        // 220ms exit, ease-out: done within a generous margin.
        for _ in 0..20 {
            bar.tick(FRAME);
        }
        assert!((bar.translate_y() - HIDDEN_TRANSLATE_Y).abs() < 0.01);
        assert!(bar.opacity().abs() < 0.01);
    }

    #[test]
    fn test_redundant_predicate_does_not_restart() {
        let mut bar = VisibilityController::new();
        bar.mount();
        for _ in 0..4 {
            bar.tick(FRAME);
        }
        let partway = bar.translate_y();
        assert!(partway < HIDDEN_TRANSLATE_Y);

        // Same predicate again: the in-flight entrance must continue
        // from where it was, not restart at 100.
        bar.set_hidden(false);
        bar.tick(FRAME);
        assert!(bar.translate_y() < partway);
    }

    #[test]
    fn test_interrupted_exit_retargets() {
        let mut bar = VisibilityController::new();
        bar.mount();
        for _ in 0..300 {
            bar.tick(FRAME);
        }

        bar.set_hidden(true);
        for _ in 0..3 {
            bar.tick(FRAME);
        }
        let mid = bar.translate_y();
        assert!(mid > 0.0 && mid < HIDDEN_TRANSLATE_Y);

        // Re-show before the exit settles: targets overwritten, no
        // bookkeeping beyond that.
        bar.set_hidden(false);
        assert_eq!(bar.targets(), (0.0, 1.0));
        assert!(bar.accepts_input());
    }
}
