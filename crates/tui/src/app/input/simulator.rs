//! Key forwarding for the engaged workspace simulator.
//!
//! Invariants:
//! - Esc always releases the simulator and Ctrl+C always quits; every other
//!   key goes to the engine, presses and releases alike.
//! - Bare modifier key events are not forwarded; their state arrives as flags
//!   on the next key event.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use omarchy_engine::{ChordKey, KeyInput, KeyOutcome, KeyPhase, Modifiers};

use crate::action::Action;
use crate::app::App;

impl App {
    pub(crate) fn handle_simulator_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Release {
            match key.code {
                KeyCode::Esc => return Some(Action::DisengageSimulator),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Some(Action::Quit);
                }
                _ => {}
            }
        }

        let input = to_key_input(key)?;
        let outcome = self.simulator.handle_key(input);
        if let KeyOutcome::Applied(command) = outcome {
            tracing::debug!(?command, "Simulator chord applied");
        }
        None
    }
}

/// Translates a terminal key event into the engine's key event.
pub(crate) fn to_key_input(key: KeyEvent) -> Option<KeyInput> {
    let chord_key = match key.code {
        KeyCode::Enter => ChordKey::Enter,
        KeyCode::Left => ChordKey::Left,
        KeyCode::Right => ChordKey::Right,
        KeyCode::Up => ChordKey::Up,
        KeyCode::Down => ChordKey::Down,
        KeyCode::Char(c) => ChordKey::Char(c),
        KeyCode::Modifier(_) => return None,
        _ => ChordKey::Other,
    };

    let mut modifiers = Modifiers::empty();
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        modifiers |= Modifiers::SHIFT;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        modifiers |= Modifiers::CTRL;
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        modifiers |= Modifiers::ALT;
    }
    if key.modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::HYPER) {
        modifiers |= Modifiers::SUPER;
    }
    if key.modifiers.contains(KeyModifiers::META) {
        modifiers |= Modifiers::META;
    }
    // Legacy terminals report Shift+letter as an uppercase char without the flag.
    if matches!(key.code, KeyCode::Char(c) if c.is_ascii_uppercase()) {
        modifiers |= Modifiers::SHIFT;
    }

    let phase = match key.kind {
        KeyEventKind::Release => KeyPhase::Release,
        KeyEventKind::Press | KeyEventKind::Repeat => KeyPhase::Press,
    };

    Some(KeyInput {
        key: chord_key,
        modifiers,
        phase,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, ModifierKeyCode};

    fn event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn super_enter_translates() {
        let input = to_key_input(event(KeyCode::Enter, KeyModifiers::SUPER, KeyEventKind::Press))
            .expect("translated");
        assert_eq!(input, KeyInput::press(ChordKey::Enter, Modifiers::SUPER));
    }

    #[test]
    fn uppercase_char_implies_shift() {
        let input = to_key_input(event(KeyCode::Char('B'), KeyModifiers::ALT, KeyEventKind::Press))
            .expect("translated");
        assert!(input.modifiers.contains(Modifiers::SHIFT | Modifiers::ALT));
    }

    #[test]
    fn release_phase_is_kept() {
        let input = to_key_input(event(KeyCode::Char('j'), KeyModifiers::SUPER, KeyEventKind::Release))
            .expect("translated");
        assert_eq!(input.phase, KeyPhase::Release);
    }

    #[test]
    fn bare_modifiers_are_not_forwarded() {
        let key = event(
            KeyCode::Modifier(ModifierKeyCode::LeftSuper),
            KeyModifiers::SUPER,
            KeyEventKind::Press,
        );
        assert!(to_key_input(key).is_none());
    }

    #[test]
    fn unnamed_keys_map_to_other() {
        let input = to_key_input(event(KeyCode::F(5), KeyModifiers::NONE, KeyEventKind::Press))
            .expect("translated");
        assert_eq!(input.key, ChordKey::Other);
    }
}
