//! Press feedback and navigation dispatch.

use std::time::Duration;

use motion::{Easing, SpringParams};

use crate::config::TabDescriptor;
use crate::engine::{ACTIVE_SCALE, INACTIVE_SCALE, TabChannels};
use crate::nav::NavSender;

/// Scale the pressed tab dips to before springing back.
pub const PRESS_DIP_SCALE: f32 = 0.88;
/// Highlight value the active-tab bounce dips to.
pub const BOUNCE_DIP_BLEND: f32 = 0.8;

const PRESS_DIP_DURATION: Duration = Duration::from_millis(80);
const PRESS_SPRING: SpringParams = SpringParams::new(12.0, 500.0, 0.6);
const BOUNCE_DIP_DURATION: Duration = Duration::from_millis(100);
const BOUNCE_SPRING: SpringParams = SpringParams::new(20.0, 300.0, 1.0);

/// Plays press feedback on a tab's channels, then conditionally hands a
/// navigate request to the input context.
///
/// The channel retargets happen synchronously before the navigation
/// message is queued; the route-driven recompute can therefore only run
/// after the press sequence's second leg is already in place, and both
/// converge on the same post-press steady state.
pub struct PressSequencer {
    nav: NavSender,
}

impl PressSequencer {
    /// Create a sequencer dispatching through `nav`.
    pub fn new(nav: NavSender) -> Self {
        Self { nav }
    }

    /// Handle a tap on `tab`, driving that tab's own `channels`.
    ///
    /// The feedback always plays; navigation is dispatched only when
    /// the tab's route differs from the current path (same-route taps
    /// are an idempotent no-op on the router).
    pub fn press(
        &self,
        tab: &TabDescriptor,
        active_tab: &str,
        current_path: &str,
        channels: &mut TabChannels,
    ) {
        let is_active = tab.id == active_tab;

        // Dip-and-settle on scale; fully overwrites any in-flight scale
        // drive, including a pending staggered spring.
        let settle = if is_active { ACTIVE_SCALE } else { INACTIVE_SCALE };
        channels.scale.timing_then_spring(
            PRESS_DIP_SCALE,
            PRESS_DIP_DURATION,
            Easing::EaseOutQuad,
            settle,
            PRESS_SPRING,
        );

        // Re-affirmation bounce on the active tab's highlight; the
        // steady-state target is unchanged.
        if is_active {
            channels.highlight.timing_then_spring(
                BOUNCE_DIP_BLEND,
                BOUNCE_DIP_DURATION,
                Easing::default(),
                1.0,
                BOUNCE_SPRING,
            );
        }

        if tab.route != current_path {
            self.nav.dispatch(&tab.route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TabSet;
    use crate::engine::ChannelEngine;
    use crate::nav::nav_channel;

    const FRAME: Duration = Duration::from_millis(16);

    fn fixture() -> (PressSequencer, ChannelEngine, TabSet, crate::nav::NavReceiver) {
        let (tx, rx) = nav_channel();
        let tabs = TabSet::default();
        let engine = ChannelEngine::new(&tabs);
        (PressSequencer::new(tx), engine, tabs, rx)
    }

    struct CountingRouter(std::cell::Cell<usize>);

    impl crate::nav::Router for CountingRouter {
        fn current_path(&self) -> String {
            String::new()
        }
        fn navigate(&self, _route: &str) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_press_dips_then_springs_back() {
        let (press, mut engine, tabs, _rx) = fixture();
        engine.set_active("home");
        let chat = tabs.get("chat").unwrap();

        press.press(chat, "home", "/home", engine.channels_mut("chat").unwrap());

        // 80ms in, the dip has landed.
        for _ in 0..5 {
            engine.tick(FRAME);
        }
        let scale = engine.channels("chat").unwrap().scale.value();
        assert!((scale - PRESS_DIP_SCALE).abs() < 0.01);

        // Inactive tab settles back to 1.0, not 1.05.
        for _ in 0..400 {
            engine.tick(FRAME);
        }
        let scale = engine.channels("chat").unwrap().scale.value();
        assert!((scale - INACTIVE_SCALE).abs() < 0.01);
    }

    #[test]
    fn test_press_overrides_pending_stagger() {
        let (press, mut engine, tabs, _rx) = fixture();
        // Recompute queues a staggered spring on profile (index 2).
        engine.set_active("profile");
        let profile = tabs.get("profile").unwrap();

        // Press lands inside the stagger window; last write wins, so
        // the dip starts immediately instead of waiting out the delay.
        press.press(profile, "profile", "/profile", engine.channels_mut("profile").unwrap());
        engine.tick(FRAME);
        let scale = engine.channels("profile").unwrap().scale.value();
        assert!(scale < 1.0);
    }

    #[test]
    fn test_active_press_bounces_highlight() {
        let (press, mut engine, tabs, _rx) = fixture();
        engine.set_active("home");
        for _ in 0..400 {
            engine.tick(FRAME);
        }

        let home = tabs.get("home").unwrap();
        press.press(home, "home", "/home", engine.channels_mut("home").unwrap());

        // Steady-state target is still 1, but the value dips first.
        let highlight = &engine.channels("home").unwrap().highlight;
        assert_eq!(highlight.target(), 1.0);
        for _ in 0..6 {
            engine.tick(FRAME);
        }
        let dipped = engine.channels("home").unwrap().highlight.value();
        assert!(dipped < 0.95);

        for _ in 0..400 {
            engine.tick(FRAME);
        }
        let settled = engine.channels("home").unwrap().highlight.value();
        assert!((settled - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_inactive_press_does_not_bounce() {
        let (press, mut engine, tabs, _rx) = fixture();
        engine.set_active("home");
        let chat = tabs.get("chat").unwrap();

        press.press(chat, "home", "/home", engine.channels_mut("chat").unwrap());
        let highlight = &engine.channels("chat").unwrap().highlight;
        assert_eq!(highlight.target(), 0.0);
    }

    #[test]
    fn test_navigation_only_when_path_differs() {
        let (press, mut engine, tabs, mut rx) = fixture();
        engine.set_active("home");
        let router = CountingRouter(std::cell::Cell::new(0));

        // Same route: feedback plays, zero dispatches.
        press.press(
            tabs.get("home").unwrap(),
            "home",
            "/home",
            engine.channels_mut("home").unwrap(),
        );
        assert_eq!(rx.drain(&router), 0);

        // Different route: exactly one dispatch.
        press.press(
            tabs.get("chat").unwrap(),
            "home",
            "/home",
            engine.channels_mut("chat").unwrap(),
        );
        assert_eq!(rx.drain(&router), 1);
        assert_eq!(router.0.get(), 1);
    }
}
