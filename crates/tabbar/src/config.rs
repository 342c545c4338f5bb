//! Static tab-bar configuration.
//!
//! The descriptor list is the single source of truth for tab identity,
//! ordering, and stagger index: a tab's stagger position is its index
//! in the list, never a hardcoded constant. Adding a tab is a
//! configuration change, not a code change.

use serde::Deserialize;

/// Static description of one tab.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TabDescriptor {
    /// Stable identifier, matched against the derived active tab.
    pub id: String,
    /// Route navigated to when the tab is pressed.
    pub route: String,
    /// Glyph id shown while the tab is active.
    pub icon_active: String,
    /// Glyph id shown while the tab is inactive.
    pub icon_inactive: String,
}

impl TabDescriptor {
    /// Create a descriptor.
    pub fn new(
        id: impl Into<String>,
        route: impl Into<String>,
        icon_active: impl Into<String>,
        icon_inactive: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            route: route.into(),
            icon_active: icon_active.into(),
            icon_inactive: icon_inactive.into(),
        }
    }

    /// Label exposed to assistive technologies for this tab's button.
    pub fn accessibility_label(&self) -> String {
        let mut chars = self.id.chars();
        let title: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("Go to {title}")
    }
}

/// Ordered tab list plus the active-tab ids that suppress the bar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TabSet {
    tabs: Vec<TabDescriptor>,
    #[serde(default = "default_suppressed")]
    suppress_bar: Vec<String>,
}

fn default_suppressed() -> Vec<String> {
    vec!["profile".to_string(), "settings".to_string()]
}

impl TabSet {
    /// Create a tab set with the default suppression list
    /// (`profile`, `settings`).
    pub fn new(tabs: Vec<TabDescriptor>) -> Self {
        Self {
            tabs,
            suppress_bar: default_suppressed(),
        }
    }

    /// Replace the set of active-tab ids that hide the bar.
    pub fn suppress_bar_on(mut self, ids: Vec<String>) -> Self {
        self.suppress_bar = ids;
        self
    }

    /// The ordered descriptors.
    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Descriptor by id.
    pub fn get(&self, id: &str) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Stagger index: the descriptor's position in the list.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    /// Whether the bar hides while `active_tab` is active.
    pub fn suppresses_bar(&self, active_tab: &str) -> bool {
        self.suppress_bar.iter().any(|id| id == active_tab)
    }
}

impl Default for TabSet {
    /// The compiled-in tab set: home, chat, profile.
    fn default() -> Self {
        Self::new(vec![
            TabDescriptor::new("home", "/home", "home", "home-outline"),
            TabDescriptor::new("chat", "/chat", "chatbubble", "chatbubble-outline"),
            TabDescriptor::new(
                "profile",
                "/profile",
                "person-circle",
                "person-circle-outline",
            ),
        ])
    }
}
