//! Input handlers that bypass the keymap.
//!
//! Responsibilities:
//! - Text entry for the keybind search box.
//! - Forwarding keys to the engaged workspace simulator.
//!
//! Non-responsibilities:
//! - Does NOT handle global keybindings (handled by keymap module)

mod search;
mod simulator;
