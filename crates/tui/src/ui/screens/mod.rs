//! Page renderers.
//!
//! Each page module exposes a `render_*` function taking the frame, its
//! area, the data it shows, and the hit map for clickable regions.

pub mod getting_started;
pub mod hotkeys;
pub mod intro;
pub mod navigation;
pub mod simulator;
pub mod themes;
