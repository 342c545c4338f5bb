//! Floating tab-bar controller.
//!
//! Drives the animated pill-shaped bottom tab bar: route observation,
//! show/hide transitions, per-tab scale/crossfade/highlight channels,
//! and press feedback with fire-and-forget navigation dispatch.
//!
//! The crate is renderer-agnostic. A host embeds [`TabBar`] (or runs it
//! under [`runtime::AnimationLoop`]), feeds it path changes and taps,
//! and draws whatever [`style::BarFrame`] says each frame.

pub mod config;
pub mod controller;
pub mod engine;
pub mod executor;
pub mod nav;
pub mod press;
pub mod route;
pub mod runtime;
pub mod style;
pub mod visibility;

pub use config::{TabDescriptor, TabSet};
pub use controller::TabBar;
pub use engine::ChannelEngine;
pub use nav::{NavReceiver, NavSender, Router, nav_channel};
pub use press::PressSequencer;
pub use style::{BarFrame, BarVisual, TabVisual};
pub use visibility::{BarMode, VisibilityController};
