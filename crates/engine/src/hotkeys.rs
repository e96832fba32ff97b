//! Hotkey reference tables for the Hotkeys page.
//!
//! Static data only. Sections render in declaration order.

/// One row of a hotkey table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyItem {
    pub keys: &'static [&'static str],
    pub action: &'static str,
    /// Mnemonic shown in an extra column (quick emojis).
    pub clue: Option<&'static str>,
}

/// A titled hotkey table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeySection {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub items: &'static [HotkeyItem],
}

impl HotkeySection {
    /// True when any row carries a clue, so the table needs a Clue column.
    pub fn has_clues(&self) -> bool {
        self.items.iter().any(|i| i.clue.is_some())
    }
}

const fn hk(keys: &'static [&'static str], action: &'static str) -> HotkeyItem {
    HotkeyItem {
        keys,
        action,
        clue: None,
    }
}

const fn emoji(
    keys: &'static [&'static str],
    action: &'static str,
    clue: &'static str,
) -> HotkeyItem {
    HotkeyItem {
        keys,
        action,
        clue: Some(clue),
    }
}

/// All hotkey sections of the manual.
pub static MANUAL_HOTKEYS: &[HotkeySection] = &[
    HotkeySection {
        title: "Navigating",
        description: None,
        items: &[
            hk(&["Super", "Space"], "Application launcher"),
            hk(&["Super", "Alt", "Space"], "Omarchy control menu"),
            hk(&["Super", "Escape"], "Lock/suspend/relaunch/restart/shutdown computer"),
            hk(&["Super", "W"], "Close window"),
            hk(&["Ctrl", "Alt", "Del"], "Close all windows"),
            hk(&["Super", "T"], "Toggle window between tiling/floating"),
            hk(&["Super", "O"], "Toggle popping window into sticky'n'floating"),
            hk(&["Super", "F"], "Go full screen"),
            hk(&["Super", "Alt", "F"], "Go full width for the window"),
            hk(&["Super", "1/2/3/4"], "Jump to specific workspace"),
            hk(&["Super", "Tab"], "Jump to next workspace"),
            hk(&["Super", "Shift", "Tab"], "Jump to previous workspace"),
            hk(&["Super", "Ctrl", "Tab"], "Jump to former workspace"),
            hk(&["Super", "Shift", "1/2/3/4"], "Move window to workspace"),
            hk(&["Super", "Shift", "Alt", "Arrows"], "Move workspaces to directional monitor"),
            hk(&["Super", "S"], "Show scratchpad workspace overlay"),
            hk(&["Super", "Alt", "S"], "Move window to scratchpad workspace"),
            hk(&["Ctrl", "1/2/3/.."], "Jump to browser tab"),
            hk(&["Super", "Arrow"], "Move focus to window in direction of arrow"),
            hk(&["Super", "Shift", "Arrow"], "Swap window with another in direction of arrow"),
            hk(&["Super", "Equal"], "Grow windows to the left"),
            hk(&["Super", "Minus"], "Grow windows to the right"),
            hk(&["Super", "Shift", "Equal"], "Grow windows to the bottom"),
            hk(&["Super", "Shift", "Minus"], "Grow windows to the top"),
            hk(&["Super", "G"], "Toggle window grouping"),
            hk(&["Super", "Alt", "G"], "Move window out of grouping"),
            hk(&["Super", "Alt", "Tab"], "Cycle between windows in grouping"),
            hk(&["Super", "Alt", "1/2/3/4"], "Jump to specific window in grouping"),
            hk(&["Super", "Alt", "Arrow"], "Move window into grouping in direction of arrow"),
            hk(&["Super", "Alt", "Arrow"], "Move between windows inside a tiling group"),
        ],
    },
    HotkeySection {
        title: "Launching apps",
        description: Some("Change/add bindings in ~/.config/hypr/bindings.conf."),
        items: &[
            hk(&["Super", "Return"], "Terminal"),
            hk(&["Super", "Shift", "B"], "Browser"),
            hk(&["Super", "Shift", "Alt", "B"], "Browser (private/incognito)"),
            hk(&["Super", "Shift", "F"], "File manager"),
            hk(&["Super", "Shift", "T"], "Activity (btop)"),
            hk(&["Super", "Shift", "M"], "Music (Spotify)"),
            hk(&["Super", "Shift", "/"], "Password manager (1password)"),
            hk(&["Super", "Shift", "N"], "Neovim"),
            hk(&["Super", "Shift", "C"], "Calendar (HEY)"),
            hk(&["Super", "Shift", "E"], "Email (HEY)"),
            hk(&["Super", "Shift", "A"], "AI (ChatGPT)"),
            hk(&["Super", "Shift", "G"], "Messenger (Signal)"),
            hk(&["Super", "Shift", "Ctrl", "G"], "Messenger (WhatsApp)"),
            hk(&["Super", "Shift", "Alt", "G"], "Messenger (Google)"),
            hk(&["Super", "Shift", "D"], "Docker (LazyDocker)"),
            hk(&["Super", "Shift", "O"], "Obsidian"),
            hk(&["Super", "Shift", "X"], "X"),
            hk(&["Super", "Ctrl", "S"], "Share menu (via LocalSend)"),
        ],
    },
    HotkeySection {
        title: "Universal clipboard",
        description: Some(
            "Usually on Linux, you need Ctrl + Shift + C/V to copy'n'paste in the terminal and \
             Ctrl + C/V to do it everywhere else. These Omarchy unified clipboard hotkeys work \
             everywhere.",
        ),
        items: &[
            hk(&["Super", "C"], "Copy"),
            hk(&["Super", "X"], "Cut (not in terminal)"),
            hk(&["Super", "V"], "Paste"),
            hk(&["Super", "Ctrl", "V"], "Clipboard manager"),
        ],
    },
    HotkeySection {
        title: "Capture",
        description: Some(
            "With screenrecordings, hit the hotkey to start, hit it again to stop. All capture \
             options are also accessible under Capture in the Omarchy menu (Super + Alt + Space).",
        ),
        items: &[
            hk(&["Print Screen"], "Screenshot with editing"),
            hk(&["Shift", "Print Screen"], "Screenshot straight to clipboard"),
            hk(&["Alt", "Print Screen"], "Screenrecord"),
            hk(&["Super", "Print Screen"], "Color picker"),
            hk(&["Alt", "Shift", "L"], "Copy current URL from webapp or Chromium"),
        ],
    },
    HotkeySection {
        title: "Notifications",
        description: None,
        items: &[
            hk(&["Super", ","], "Dismiss latest notification"),
            hk(&["Super", "Shift", ","], "Dismiss all notifications"),
            hk(&["Super", "Ctrl", ","], "Toggle silencing notifications"),
            hk(&["Super", "Alt", ","], "Invoke most recent notification"),
        ],
    },
    HotkeySection {
        title: "Style",
        description: Some(
            "Extra background images live in ~/.config/omarchy/current/backgrounds. You can put \
             more there to cycle through. All style options are also accessible under Style in \
             the Omarchy menu (Super + Alt + Space).",
        ),
        items: &[
            hk(&["Super", "Ctrl", "Shift", "Space"], "Pick a new theme"),
            hk(&["Super", "Ctrl", "Space"], "Next background image for theme"),
            hk(&["Super", "Backspace"], "Toggle transparency on a window"),
        ],
    },
    HotkeySection {
        title: "Toggles",
        description: None,
        items: &[
            hk(&["Super", "Ctrl", "I"], "Toggle idle/sleep prevention"),
            hk(&["Super", "Ctrl", "N"], "Toggle nightlight display temperature"),
            hk(&["Super", "Shift", "Space"], "Toggle the top bar"),
            hk(&["Super", "Mute"], "Switch to next audio output"),
        ],
    },
    HotkeySection {
        title: "Ghostty Terminal",
        description: None,
        items: &[
            hk(&["Ctrl", "Shift", "E"], "New split below"),
            hk(&["Ctrl", "Shift", "O"], "New split besides"),
            hk(&["Ctrl", "Alt", "Arrows"], "Move between splits"),
            hk(&["Super", "Ctrl", "Shift", "Arrows"], "Resize split by 10 lines"),
            hk(&["Super", "Ctrl", "Shift", "Alt", "Arrows"], "Resize split by 100 lines"),
            hk(&["Ctrl", "Shift", "T"], "New tab"),
            hk(&["Ctrl", "Shift", "Arrows"], "Move between tabs"),
            hk(&["Alt", "Numbers"], "Go to specific tab"),
        ],
    },
    HotkeySection {
        title: "File Manager",
        description: None,
        items: &[
            hk(&["Ctrl", "L"], "Go to path"),
            hk(&["Space"], "Preview file (arrows navigate)"),
            hk(&["Backspace"], "Go back one folder"),
        ],
    },
    HotkeySection {
        title: "Apple Display Brightness Control",
        description: Some("Apple displays have their own brightness control via asdcontrol:"),
        items: &[
            hk(&["Ctrl", "F1"], "Turn down brightness"),
            hk(&["Ctrl", "F2"], "Turn up brightness"),
            hk(&["Ctrl", "Shift", "F2"], "Turn up brightness to maximum"),
        ],
    },
    HotkeySection {
        title: "Neovim (w/ lazyvim)",
        description: Some("See all the Neovim hotkeys configured by LazyVim."),
        items: &[
            hk(&["Space"], "Show command options"),
            hk(&["Space", "Space"], "Open file via fuzzy search"),
            hk(&["Space", "E"], "Toggle sidebar"),
            hk(&["Space", "G", "G"], "Show git controls"),
            hk(&["Space", "S", "G"], "Search file content"),
            hk(&["Ctrl", "W", "W"], "Jump between sidebar and editor"),
            hk(&["Ctrl", "Left/right arrow"], "Change size of sidebar"),
            hk(&["Shift", "H"], "Go to left file tab"),
            hk(&["Shift", "L"], "Go to right file tab"),
            hk(&["Space", "B", "D"], "Close file tab"),
            hk(&["A"], "Add new file in parent dir (while in sidebar)"),
            hk(&["Shift", "A"], "Add new subdir in parent dir (while in sidebar)"),
            hk(&["D"], "Delete highlighted file/dir (while in sidebar)"),
            hk(&["M"], "Move highlighted file/dir (while in sidebar)"),
            hk(&["R"], "Rename highlighted file/dir (while in sidebar)"),
            hk(&["?"], "Show help for all commands (while in sidebar)"),
        ],
    },
    HotkeySection {
        title: "Quick Emojis",
        description: Some(
            "You can use Super + Ctrl + E to show a complete emoji picker that'll put the \
             selection on the clipboard or you can use these quick access options.",
        ),
        items: &[
            emoji(&["CapsLock", "M", "S"], "😄", "smile"),
            emoji(&["CapsLock", "M", "C"], "😂", "cry"),
            emoji(&["CapsLock", "M", "L"], "😍", "love"),
            emoji(&["CapsLock", "M", "V"], "✌️", "victory"),
            emoji(&["CapsLock", "M", "H"], "❤️", "heart"),
            emoji(&["CapsLock", "M", "Y"], "👍", "yes"),
            emoji(&["CapsLock", "M", "N"], "👎", "no"),
            emoji(&["CapsLock", "M", "F"], "🖕", "fuck"),
            emoji(&["CapsLock", "M", "W"], "🤞", "wish"),
            emoji(&["CapsLock", "M", "R"], "🤘", "rock"),
            emoji(&["CapsLock", "M", "K"], "😘", "kiss"),
            emoji(&["CapsLock", "M", "E"], "🙄", "eyeroll"),
            emoji(&["CapsLock", "M", "P"], "🙏", "pray"),
            emoji(&["CapsLock", "M", "D"], "🤤", "drool"),
            emoji(&["CapsLock", "M", "M"], "💰", "money"),
            emoji(&["CapsLock", "M", "X"], "🎉", "xellebrate"),
            emoji(&["CapsLock", "M", "1"], "💯", "100%"),
            emoji(&["CapsLock", "M", "T"], "🥂", "toast"),
            emoji(&["CapsLock", "M", "O"], "👌", "ok"),
            emoji(&["CapsLock", "M", "G"], "👋", "greeting"),
            emoji(&["CapsLock", "M", "A"], "💪", "arm"),
            emoji(&["CapsLock", "M", "B"], "🤯", "blowing"),
        ],
    },
    HotkeySection {
        title: "Quick Completions",
        description: Some(
            "You can add more of your own by editing ~/.XCompose, then running \
             omarchy-restart-xcompose in the terminal to get the changes picked up.",
        ),
        items: &[
            hk(&["CapsLock", "Space", "Space"], "— (mdash)"),
            hk(&["CapsLock", "Space", "N"], "Your name (as entered on setup)"),
            hk(&["CapsLock", "Space", "E"], "Your email (as entered on setup)"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_in_manual_order() {
        let titles: Vec<_> = MANUAL_HOTKEYS.iter().map(|s| s.title).collect();
        assert_eq!(titles.first(), Some(&"Navigating"));
        assert_eq!(titles.last(), Some(&"Quick Completions"));
        assert_eq!(titles.len(), 13);
    }

    #[test]
    fn only_emoji_section_has_clues() {
        let with_clues: Vec<_> = MANUAL_HOTKEYS
            .iter()
            .filter(|s| s.has_clues())
            .map(|s| s.title)
            .collect();
        assert_eq!(with_clues, vec!["Quick Emojis"]);
    }

    #[test]
    fn emoji_rows_use_capslock_compose_keys() {
        let emojis = MANUAL_HOTKEYS
            .iter()
            .find(|s| s.title == "Quick Emojis")
            .unwrap();
        for item in emojis.items {
            assert_eq!(item.keys.len(), 3);
            assert_eq!(&item.keys[..2], &["CapsLock", "M"]);
        }
        assert_eq!(emojis.items[0].keys[2], "S");
        assert_eq!(emojis.items[16].clue, Some("100%"));
        assert_eq!(emojis.items[16].keys[2], "1");
    }
}
