//! Keyboard chord interpretation.
//!
//! Responsibilities:
//! - Define the engine's terminal-independent key event (`KeyInput`).
//! - Map modifier + key combinations onto workspace `Command`s.
//!
//! Does NOT handle:
//! - The engagement gate or held-key tracking (see `workspace`).
//! - Translating terminal events into `KeyInput` (done by the TUI).
//!
//! Invariants:
//! - Without Super, Meta, or Alt a press never resolves to a command.
//! - Letter keys match case-insensitively; Shift is read from the flags only.
//! - `interpret` is pure and returns at most one command.

use bitflags::bitflags;

use crate::window::WindowKind;

bitflags! {
    /// Modifier flags carried by a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CTRL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const SUPER = 0b0000_1000;
        const META = 0b0001_0000;
    }
}

impl Modifiers {
    /// True when a modifier that arms window-manager chords is held.
    ///
    /// Super (or Meta) is the primary modifier; Alt is accepted as an
    /// alternate because many terminals never report Super.
    pub fn has_chord_modifier(self) -> bool {
        self.intersects(Self::SUPER | Self::META | Self::ALT)
    }
}

/// Key identity, independent of any terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordKey {
    Enter,
    Left,
    Right,
    Up,
    Down,
    Char(char),
    /// A key the engine does not name (function keys, media keys, ...).
    Other,
}

impl ChordKey {
    /// Uppercased letter for case-insensitive matching.
    fn letter(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c.to_ascii_uppercase()),
            _ => None,
        }
    }

    /// Display label for the held-keys readout.
    pub fn label(self) -> String {
        match self {
            Self::Enter => "Enter".to_string(),
            Self::Left => "ArrowLeft".to_string(),
            Self::Right => "ArrowRight".to_string(),
            Self::Up => "ArrowUp".to_string(),
            Self::Down => "ArrowDown".to_string(),
            Self::Char(' ') => "Space".to_string(),
            Self::Char(c) => c.to_uppercase().to_string(),
            Self::Other => "?".to_string(),
        }
    }
}

/// Whether the key went down or came up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Press,
    Release,
}

/// A raw key event as seen by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: ChordKey,
    pub modifiers: Modifiers,
    pub phase: KeyPhase,
}

impl KeyInput {
    pub fn press(key: ChordKey, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            phase: KeyPhase::Press,
        }
    }

    pub fn release(key: ChordKey, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            phase: KeyPhase::Release,
        }
    }
}

/// Direction for focus cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Next,
    Prev,
}

/// A workspace operation triggered by a chord or a UI control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open(WindowKind),
    CloseActive,
    ExitSession,
    ToggleLayout,
    CycleFocus(FocusDirection),
    Swap,
}

/// Result of feeding one key event to the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The event was not for the simulator (disengaged, release, or no modifier).
    Ignored,
    /// A chord modifier was held but the key is unmapped. The caller should
    /// suppress default handling; nothing changed.
    Swallowed,
    /// The chord ran this command.
    Applied(Command),
}

/// Resolves a key press into a command.
///
/// Returns `None` for presses without a chord modifier and for unmapped
/// chords; callers distinguish the two with [`Modifiers::has_chord_modifier`].
pub fn interpret(input: &KeyInput) -> Option<Command> {
    if input.phase != KeyPhase::Press || !input.modifiers.has_chord_modifier() {
        return None;
    }
    let shift = input.modifiers.contains(Modifiers::SHIFT);

    match input.key {
        ChordKey::Enter => Some(Command::Open(WindowKind::Terminal)),
        ChordKey::Right | ChordKey::Down => Some(if shift {
            Command::Swap
        } else {
            Command::CycleFocus(FocusDirection::Next)
        }),
        ChordKey::Left | ChordKey::Up => Some(if shift {
            Command::Swap
        } else {
            Command::CycleFocus(FocusDirection::Prev)
        }),
        key => match (key.letter()?, shift) {
            ('B', true) => Some(Command::Open(WindowKind::Browser)),
            ('F', true) => Some(Command::Open(WindowKind::FileManager)),
            ('T', true) => Some(Command::Open(WindowKind::Monitor)),
            ('Q', true) => Some(Command::ExitSession),
            ('Q', false) | ('W', _) => Some(Command::CloseActive),
            ('J', _) => Some(Command::ToggleLayout),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sup(key: ChordKey) -> KeyInput {
        KeyInput::press(key, Modifiers::SUPER)
    }

    fn sup_shift(key: ChordKey) -> KeyInput {
        KeyInput::press(key, Modifiers::SUPER | Modifiers::SHIFT)
    }

    #[test]
    fn launcher_chords() {
        assert_eq!(
            interpret(&sup(ChordKey::Enter)),
            Some(Command::Open(WindowKind::Terminal))
        );
        assert_eq!(
            interpret(&sup_shift(ChordKey::Char('B'))),
            Some(Command::Open(WindowKind::Browser))
        );
        assert_eq!(
            interpret(&sup_shift(ChordKey::Char('f'))),
            Some(Command::Open(WindowKind::FileManager))
        );
        assert_eq!(
            interpret(&sup_shift(ChordKey::Char('T'))),
            Some(Command::Open(WindowKind::Monitor))
        );
    }

    #[test]
    fn launcher_letters_require_shift() {
        assert_eq!(interpret(&sup(ChordKey::Char('b'))), None);
        assert_eq!(interpret(&sup(ChordKey::Char('t'))), None);
    }

    #[test]
    fn q_splits_on_shift() {
        assert_eq!(
            interpret(&sup(ChordKey::Char('q'))),
            Some(Command::CloseActive)
        );
        assert_eq!(
            interpret(&sup_shift(ChordKey::Char('Q'))),
            Some(Command::ExitSession)
        );
    }

    #[test]
    fn close_and_layout_chords() {
        assert_eq!(
            interpret(&sup(ChordKey::Char('w'))),
            Some(Command::CloseActive)
        );
        assert_eq!(
            interpret(&sup(ChordKey::Char('J'))),
            Some(Command::ToggleLayout)
        );
    }

    #[test]
    fn arrows_focus_or_swap() {
        for key in [ChordKey::Right, ChordKey::Down] {
            assert_eq!(
                interpret(&sup(key)),
                Some(Command::CycleFocus(FocusDirection::Next))
            );
            assert_eq!(interpret(&sup_shift(key)), Some(Command::Swap));
        }
        for key in [ChordKey::Left, ChordKey::Up] {
            assert_eq!(
                interpret(&sup(key)),
                Some(Command::CycleFocus(FocusDirection::Prev))
            );
            assert_eq!(interpret(&sup_shift(key)), Some(Command::Swap));
        }
    }

    #[test]
    fn alt_and_meta_are_alternate_modifiers() {
        let alt = KeyInput::press(ChordKey::Enter, Modifiers::ALT);
        let meta = KeyInput::press(ChordKey::Enter, Modifiers::META);
        assert_eq!(interpret(&alt), Some(Command::Open(WindowKind::Terminal)));
        assert_eq!(interpret(&meta), Some(Command::Open(WindowKind::Terminal)));
    }

    #[test]
    fn plain_and_ctrl_keys_never_resolve() {
        assert_eq!(
            interpret(&KeyInput::press(ChordKey::Enter, Modifiers::empty())),
            None
        );
        assert_eq!(
            interpret(&KeyInput::press(ChordKey::Char('w'), Modifiers::CTRL)),
            None
        );
    }

    #[test]
    fn releases_never_resolve() {
        let release = KeyInput::release(ChordKey::Enter, Modifiers::SUPER);
        assert_eq!(interpret(&release), None);
    }

    #[test]
    fn unmapped_chord_resolves_to_none() {
        assert_eq!(interpret(&sup(ChordKey::Char('z'))), None);
        assert_eq!(interpret(&sup(ChordKey::Other)), None);
    }

    #[test]
    fn key_labels() {
        assert_eq!(ChordKey::Char('b').label(), "B");
        assert_eq!(ChordKey::Right.label(), "ArrowRight");
        assert_eq!(ChordKey::Char(' ').label(), "Space");
    }
}
