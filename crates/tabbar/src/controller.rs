//! The tab-bar controller: glue between route observation, visibility,
//! channels, and press handling.

use std::time::Duration;

use crate::config::TabSet;
use crate::engine::ChannelEngine;
use crate::nav::NavSender;
use crate::press::PressSequencer;
use crate::route;
use crate::style::{self, BarFrame};
use crate::visibility::VisibilityController;

/// Floating tab-bar controller.
///
/// Owns all animation state; consumes path changes and taps, exposes a
/// continuous visual sample for a renderer. Deterministic: the state is
/// a pure function of the command/tick sequence, and is reconstructed
/// fresh on every mount (nothing is persisted).
pub struct TabBar {
    tabs: TabSet,
    active_tab: String,
    current_path: String,
    visibility: VisibilityController,
    engine: ChannelEngine,
    press: PressSequencer,
}

impl TabBar {
    /// Create an unmounted controller for `tabs`, dispatching
    /// navigation through `nav`.
    pub fn new(tabs: TabSet, nav: NavSender) -> Self {
        let engine = ChannelEngine::new(&tabs);
        Self {
            tabs,
            active_tab: route::DEFAULT_TAB.to_string(),
            current_path: String::new(),
            visibility: VisibilityController::new(),
            engine,
            press: PressSequencer::new(nav),
        }
    }

    /// Mount the bar: plays the entrance animation and applies the
    /// initial active-tab recompute.
    pub fn mount(&mut self) {
        log::debug!("tab bar mounted, active tab = {:?}", self.active_tab);
        self.visibility.mount();
        self.engine.set_active(&self.active_tab);
    }

    /// Observe a navigation path change.
    ///
    /// Recomputes the derived active tab; the channel recompute runs
    /// only when the active tab actually changed, so unrelated path
    /// churn does not restart in-flight springs. The visibility
    /// predicate is re-evaluated every time (it edge-detects
    /// internally).
    pub fn on_path_changed(&mut self, path: &str) {
        self.current_path = path.to_string();
        let next = route::active_tab(path);
        if next != self.active_tab {
            log::debug!("active tab {:?} -> {next:?}", self.active_tab);
            self.active_tab = next;
            self.engine.set_active(&self.active_tab);
        }
        self.visibility
            .set_hidden(self.tabs.suppresses_bar(&self.active_tab));
    }

    /// Handle a tap on the tab with `tab_id`.
    ///
    /// Ignored while the bar is hidden (a hidden bar accepts no input)
    /// and for unknown ids.
    pub fn press(&mut self, tab_id: &str) {
        if !self.visibility.accepts_input() {
            log::debug!("press on {tab_id:?} ignored, bar hidden");
            return;
        }
        let (Some(tab), Some(channels)) =
            (self.tabs.get(tab_id), self.engine.channels_mut(tab_id))
        else {
            log::debug!("press on unknown tab {tab_id:?} ignored");
            return;
        };
        self.press
            .press(tab, &self.active_tab, &self.current_path, channels);
    }

    /// Advance all animation channels by delta time.
    pub fn tick(&mut self, delta: Duration) {
        self.visibility.tick(delta);
        self.engine.tick(delta);
    }

    /// Sample the current visual state.
    pub fn sample(&self) -> BarFrame {
        BarFrame {
            bar: style::bar_visual(&self.visibility),
            tabs: self
                .engine
                .iter()
                .map(|(id, channels)| style::tab_visual(id, channels))
                .collect(),
        }
    }

    /// The currently derived active tab.
    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    /// The last observed path.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// The tab configuration.
    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    /// Bar visibility state.
    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    /// Per-tab channels.
    pub fn engine(&self) -> &ChannelEngine {
        &self.engine
    }
}
