//! One main-loop step for an action taken off the channel.
//!
//! Responsibilities:
//! - Resolve raw input, apply the resulting action, and report the hint
//!   expiry timer that is now due.
//!
//! Does NOT handle:
//! - Spawning the timer (see `runtime::hints`).
//!
//! Invariants:
//! - The timer check runs for every received action, including input that
//!   the app consumes while resolving. Engaged chords raise their hint there
//!   and never reach `App::update`.

use std::ops::ControlFlow;
use std::time::Duration;

use omarchy_engine::HintId;

use crate::action::Action;
use crate::app::App;

/// Handles `received`; breaks on quit, otherwise yields the timer to spawn.
pub fn dispatch_action(
    app: &mut App,
    received: Action,
) -> ControlFlow<(), Option<(HintId, Duration)>> {
    if let Some(action) = app.resolve(received) {
        if matches!(action, Action::Quit) {
            tracing::info!("Quit requested");
            return ControlFlow::Break(());
        }
        if !action.is_droppable() {
            tracing::debug!(?action, "Handling action");
        }
        app.update(action);
    }
    ControlFlow::Continue(app.take_hint_timer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use omarchy_config::{ManualConfig, Page};

    fn engaged_app() -> App {
        let mut app = App::new(ManualConfig {
            start_page: Page::Navigation,
            skip_intro: true,
            ..ManualConfig::default()
        });
        app.update(Action::EngageSimulator);
        app
    }

    fn super_chord(code: KeyCode) -> Action {
        Action::Input(KeyEvent::new(code, KeyModifiers::SUPER))
    }

    #[test]
    fn chord_consumed_during_resolve_still_schedules_expiry() {
        let mut app = engaged_app();
        let ControlFlow::Continue(timer) = dispatch_action(&mut app, super_chord(KeyCode::Enter))
        else {
            panic!("chord must not quit");
        };
        let (id, ttl) = timer.expect("opening a window via chord should schedule expiry");
        assert_eq!(app.simulator.current_hint().map(|h| h.id), Some(id));
        assert_eq!(ttl, app.hint_ttl);
    }

    #[test]
    fn each_chord_hint_is_scheduled_once() {
        let mut app = engaged_app();
        let first = dispatch_action(&mut app, super_chord(KeyCode::Char('j')));
        let ControlFlow::Continue(Some((first_id, _))) = first else {
            panic!("toggle chord should schedule expiry");
        };

        assert_eq!(dispatch_action(&mut app, Action::Tick), ControlFlow::Continue(None));

        let second = dispatch_action(&mut app, super_chord(KeyCode::Char('j')));
        let ControlFlow::Continue(Some((second_id, _))) = second else {
            panic!("second toggle should schedule expiry");
        };
        assert_ne!(first_id, second_id);
    }

    #[test]
    fn quit_breaks_the_loop() {
        let mut app = App::new(ManualConfig {
            skip_intro: true,
            ..ManualConfig::default()
        });
        let quit = Action::Input(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(dispatch_action(&mut app, quit), ControlFlow::Break(()));
    }
}
