//! Property-based tests for the workspace simulator.
//!
//! Random sequences of commands and key events are replayed against a
//! simulator and the structural invariants are checked after every step.
//!
//! # Invariants
//! - The window count never exceeds `MAX_WINDOWS`.
//! - The active id, when set, names a window in the workspace.
//! - A non-empty workspace after open/close always has an active window.
//! - A disengaged simulator never changes state on key presses.
//!
//! # What this does NOT handle
//! - Exact hint wording (covered by unit tests in `workspace`).

use omarchy_engine::{
    ChordKey, Command, FocusDirection, KeyInput, KeyOutcome, Modifiers, MAX_WINDOWS,
    WindowKind, WorkspaceSimulator,
};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = WindowKind> {
    prop::sample::select(WindowKind::ALL.to_vec())
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => kind_strategy().prop_map(Command::Open),
        3 => Just(Command::CloseActive),
        1 => Just(Command::ExitSession),
        1 => Just(Command::ToggleLayout),
        2 => Just(Command::CycleFocus(FocusDirection::Next)),
        2 => Just(Command::CycleFocus(FocusDirection::Prev)),
        2 => Just(Command::Swap),
    ]
}

fn key_strategy() -> impl Strategy<Value = ChordKey> {
    prop_oneof![
        Just(ChordKey::Enter),
        Just(ChordKey::Left),
        Just(ChordKey::Right),
        Just(ChordKey::Up),
        Just(ChordKey::Down),
        Just(ChordKey::Other),
        prop::char::range('a', 'z').prop_map(ChordKey::Char),
        prop::char::range('A', 'Z').prop_map(ChordKey::Char),
    ]
}

fn modifiers_strategy() -> impl Strategy<Value = Modifiers> {
    (0u8..32).prop_map(Modifiers::from_bits_truncate)
}

fn input_strategy() -> impl Strategy<Value = KeyInput> {
    (key_strategy(), modifiers_strategy(), any::<bool>()).prop_map(|(key, mods, press)| {
        if press {
            KeyInput::press(key, mods)
        } else {
            KeyInput::release(key, mods)
        }
    })
}

fn assert_invariants(sim: &WorkspaceSimulator) -> Result<(), TestCaseError> {
    let state = sim.state();
    prop_assert!(state.windows().len() <= MAX_WINDOWS);
    if let Some(active) = state.active_window_id() {
        prop_assert!(
            state.windows().iter().any(|w| w.id == active),
            "active id {} not in workspace",
            active
        );
    }
    let mut ids: Vec<_> = state.windows().iter().map(|w| w.id).collect();
    ids.sort_by_key(|id| id.0);
    ids.dedup();
    prop_assert_eq!(ids.len(), state.windows().len(), "window ids must be unique");
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn commands_preserve_invariants(commands in prop::collection::vec(command_strategy(), 0..60)) {
        let mut sim = WorkspaceSimulator::with_demo_windows();
        for command in commands {
            sim.apply(command);
            assert_invariants(&sim)?;
            if matches!(command, Command::Open(_) | Command::CloseActive) && !sim.state().is_empty() {
                prop_assert!(sim.state().active_window_id().is_some());
            }
        }
    }

    #[test]
    fn engaged_key_events_preserve_invariants(inputs in prop::collection::vec(input_strategy(), 0..80)) {
        let mut sim = WorkspaceSimulator::new();
        sim.engage();
        for input in inputs {
            sim.handle_key(input);
            assert_invariants(&sim)?;
        }
    }

    #[test]
    fn disengaged_presses_never_change_state(inputs in prop::collection::vec(input_strategy(), 0..40)) {
        let mut sim = WorkspaceSimulator::with_demo_windows();
        let before = sim.state().clone();
        for input in inputs {
            prop_assert_eq!(sim.handle_key(input), KeyOutcome::Ignored);
        }
        prop_assert_eq!(sim.state(), &before);
        prop_assert!(sim.current_hint().is_none());
        prop_assert!(sim.held_keys().is_empty());
    }

    #[test]
    fn opening_never_exceeds_capacity(extra in 0usize..20) {
        let mut sim = WorkspaceSimulator::new();
        for _ in 0..(MAX_WINDOWS + extra) {
            sim.open_window(WindowKind::Terminal);
        }
        prop_assert_eq!(sim.state().windows().len(), MAX_WINDOWS);
        if extra > 0 {
            prop_assert_eq!(
                sim.current_hint().map(|h| h.text.as_str()),
                Some("Max windows reached!")
            );
        }
    }
}
