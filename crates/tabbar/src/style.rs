//! Derived visual values.
//!
//! Everything here is a pure function of current channel values,
//! recomputed at every sample and never stored back.

use motion::{Animatable, lerp};

use crate::engine::TabChannels;
use crate::visibility::VisibilityController;

/// Straight-alpha RGBA color, components in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Animatable for Rgba {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self::new(
            lerp(from.r, to.r, t),
            lerp(from.g, to.g, t),
            lerp(from.b, to.b, t),
            lerp(from.a, to.a, t),
        )
    }
}

/// Highlight color at full blend (#D4FF4A).
pub const HIGHLIGHT_COLOR: Rgba = Rgba::new(212.0 / 255.0, 1.0, 74.0 / 255.0, 1.0);

/// Corner radius of the floating bar container.
pub const BAR_CORNER_RADIUS: f32 = 25.0;
/// Distance between the bar and the bottom screen edge.
pub const BAR_BOTTOM_INSET: f32 = 30.0;
/// Horizontal inset of the bar on both sides.
pub const BAR_SIDE_INSET: f32 = 20.0;

/// Renderer-facing snapshot of one tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabVisual {
    pub id: String,
    pub scale: f32,
    pub background: Rgba,
    pub corner_radius: f32,
    pub shadow_opacity: f32,
    pub shadow_radius: f32,
    pub elevation: f32,
    pub label_offset_x: f32,
    pub label_scale: f32,
    /// Opacity of the active icon and label (the crossfade driver).
    pub active_opacity: f32,
    /// Exact complement of `active_opacity`.
    pub inactive_icon_opacity: f32,
}

/// Renderer-facing snapshot of the whole bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarVisual {
    pub translate_y: f32,
    pub opacity: f32,
    pub interactive: bool,
    pub accessibility_hidden: bool,
}

/// One full frame: the bar plus every tab, in descriptor order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFrame {
    pub bar: BarVisual,
    pub tabs: Vec<TabVisual>,
}

/// Compute the derived visuals for one tab from its channel values.
pub fn tab_visual(id: &str, channels: &TabChannels) -> TabVisual {
    let blend = channels.highlight.value();
    let crossfade = channels.crossfade.value();
    let shadow_opacity = lerp(0.0, 0.15, blend);

    TabVisual {
        id: id.to_string(),
        scale: channels.scale.value(),
        background: Rgba::lerp(Rgba::TRANSPARENT, HIGHLIGHT_COLOR, blend),
        corner_radius: lerp(10.0, 20.0, blend),
        shadow_opacity,
        shadow_radius: lerp(0.0, 8.0, blend),
        elevation: shadow_opacity * 10.0,
        label_offset_x: lerp(-15.0, 0.0, crossfade),
        label_scale: lerp(0.8, 1.0, crossfade),
        active_opacity: crossfade,
        inactive_icon_opacity: 1.0 - crossfade,
    }
}

/// Compute the bar-level visuals from the visibility controller.
pub fn bar_visual(visibility: &VisibilityController) -> BarVisual {
    BarVisual {
        translate_y: visibility.translate_y(),
        opacity: visibility.opacity(),
        interactive: visibility.accepts_input(),
        accessibility_hidden: visibility.accessibility_hidden(),
    }
}
