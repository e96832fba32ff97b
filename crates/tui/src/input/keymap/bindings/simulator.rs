//! Workspace simulator chords, for help output only.
//!
//! While the simulator is engaged the App forwards keys to the engine, which
//! owns the chord table. These entries only document it.

use super::super::{BindingScope, Keybinding, Section};

pub(super) fn bindings() -> Vec<Keybinding> {
    vec![
        Keybinding {
            section: Section::Simulator,
            keys: "Esc",
            description: "Release the simulator",
            scope: BindingScope::Global,
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Simulator,
            keys: "Super+Enter",
            description: "Open terminal",
            scope: BindingScope::Global,
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Simulator,
            keys: "Super+Shift+B",
            description: "Open browser",
            scope: BindingScope::Global,
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Simulator,
            keys: "Super+Shift+F",
            description: "Open file manager",
            scope: BindingScope::Global,
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Simulator,
            keys: "Super+Shift+T",
            description: "Open activity monitor",
            scope: BindingScope::Global,
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Simulator,
            keys: "Super+W/Super+Q",
            description: "Close active window",
            scope: BindingScope::Global,
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Simulator,
            keys: "Super+Shift+Q",
            description: "Reset session",
            scope: BindingScope::Global,
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Simulator,
            keys: "Super+J",
            description: "Toggle split orientation",
            scope: BindingScope::Global,
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Simulator,
            keys: "Super+Arrow",
            description: "Cycle focus",
            scope: BindingScope::Global,
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Simulator,
            keys: "Super+Shift+Arrow",
            description: "Swap with neighbor",
            scope: BindingScope::Global,
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Simulator,
            keys: "Alt",
            description: "Stands in for Super",
            scope: BindingScope::Global,
            matcher: None,
            action: None,
            handles_input: false,
        },
    ]
}
