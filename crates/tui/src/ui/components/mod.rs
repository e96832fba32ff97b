//! Reusable UI components for the manual.
//!
//! - [`BigTextWidget`]: large block-letter text for the intro splash.
//! - [`KeybindCard`]: one card of the keybind grid.
//! - [`Swatch`]: a row of palette color chips.

mod big_text;
mod card;
mod swatch;

pub use big_text::BigTextWidget;
pub use card::{CARD_HEIGHT, KeybindCard};
pub use swatch::Swatch;
