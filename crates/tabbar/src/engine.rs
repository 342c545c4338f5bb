//! Per-tab animation channels and the active-tab recompute.

use std::time::Duration;

use motion::{Channel, Easing, SpringParams};

use crate::config::TabSet;

/// Scale target for the active tab.
pub const ACTIVE_SCALE: f32 = 1.05;
/// Scale target for inactive tabs.
pub const INACTIVE_SCALE: f32 = 1.0;
/// Extra start delay per list position on the recompute path.
pub const STAGGER_STEP: Duration = Duration::from_millis(50);

const SCALE_SPRING: SpringParams = SpringParams::new(15.0, 400.0, 0.8);
const CROSSFADE_DURATION: Duration = Duration::from_millis(250);
const CROSSFADE_EASING: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);
const HIGHLIGHT_DURATION: Duration = Duration::from_millis(350);
const HIGHLIGHT_EASING: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);

/// The three animated channels of one tab.
#[derive(Debug, Clone)]
pub struct TabChannels {
    /// Button scale, 1.0 at rest.
    pub scale: Channel,
    /// Shared driver for the active/inactive representation swap, 0..=1.
    pub crossfade: Channel,
    /// Background highlight blend, 0..=1.
    pub highlight: Channel,
}

impl TabChannels {
    fn new() -> Self {
        Self {
            scale: Channel::new(INACTIVE_SCALE),
            crossfade: Channel::new(0.0),
            highlight: Channel::new(0.0),
        }
    }
}

/// Owns one [`TabChannels`] per descriptor, in descriptor order.
///
/// The collection is constructed once from the tab set; stagger index
/// is derived from position in that same ordered sequence.
#[derive(Debug, Clone)]
pub struct ChannelEngine {
    ids: Vec<String>,
    channels: Vec<TabChannels>,
}

impl ChannelEngine {
    /// Create channels for every tab, at the initial values
    /// (scale 1, crossfade 0, highlight 0).
    pub fn new(tabs: &TabSet) -> Self {
        Self {
            ids: tabs.tabs().iter().map(|tab| tab.id.clone()).collect(),
            channels: tabs.tabs().iter().map(|_| TabChannels::new()).collect(),
        }
    }

    /// Retarget every tab's channels for a new active tab.
    ///
    /// An active tab unknown to the engine simply leaves every tab
    /// targeting the inactive profile. The stagger delay applies only
    /// to this recompute path, never to press feedback.
    pub fn set_active(&mut self, active_tab: &str) {
        log::trace!("channel recompute, active tab = {active_tab:?}");
        for (index, (id, channels)) in self.ids.iter().zip(&mut self.channels).enumerate() {
            let is_active = id == active_tab;
            let scale_target = if is_active { ACTIVE_SCALE } else { INACTIVE_SCALE };
            let blend_target = if is_active { 1.0 } else { 0.0 };

            channels.scale.spring_to_delayed(
                scale_target,
                SCALE_SPRING,
                STAGGER_STEP * index as u32,
            );
            channels
                .crossfade
                .timing_to(blend_target, CROSSFADE_DURATION, CROSSFADE_EASING);
            channels
                .highlight
                .timing_to(blend_target, HIGHLIGHT_DURATION, HIGHLIGHT_EASING);
        }
    }

    /// Channels for one tab.
    pub fn channels(&self, id: &str) -> Option<&TabChannels> {
        self.ids
            .iter()
            .position(|tab| tab == id)
            .map(|index| &self.channels[index])
    }

    /// Mutable channels for one tab.
    pub fn channels_mut(&mut self, id: &str) -> Option<&mut TabChannels> {
        self.ids
            .iter()
            .position(|tab| tab == id)
            .map(|index| &mut self.channels[index])
    }

    /// Iterate channels in descriptor order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TabChannels)> {
        self.ids
            .iter()
            .map(String::as_str)
            .zip(self.channels.iter())
    }

    /// Advance every channel.
    pub fn tick(&mut self, delta: Duration) {
        for channels in &mut self.channels {
            channels.scale.tick(delta);
            channels.crossfade.tick(delta);
            channels.highlight.tick(delta);
        }
    }
}
