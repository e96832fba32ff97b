//! Test helpers for TUI testing.
//!
//! Provides key event constructors and a render harness backed by
//! ratatui's `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use omarchy_config::{ManualConfig, Page};
use omarchy_manual::{Action, App};
use ratatui::{Terminal, backend::TestBackend};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create a press of `code` with `modifiers`.
pub fn chord(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

/// Create a release of `code` with `modifiers`.
pub fn release(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new_with_kind_and_state(code, modifiers, KeyEventKind::Release, KeyEventState::NONE)
}

/// Create a left click at a cell.
pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Create a wheel event.
pub fn wheel(kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        kind,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }
}

/// App past the intro, showing `page`.
pub fn app_on(page: Page) -> App {
    App::new(ManualConfig {
        start_page: page,
        skip_intro: true,
        ..ManualConfig::default()
    })
}

/// Feed a key event through the same path the main loop uses.
pub fn send_key(app: &mut App, event: KeyEvent) -> Option<Action> {
    let action = app.resolve(Action::Input(event))?;
    if action != Action::Quit {
        app.update(action);
    }
    Some(action)
}

/// Test harness for TUI rendering with a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a new test harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_app(App::default(), width, height)
    }

    pub fn with_app(app: App, width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }

    /// Render, then return the cell where `needle` first starts.
    pub fn locate(&mut self, needle: &str) -> Option<(u16, u16)> {
        let screen = self.render();
        find_text(&screen, needle)
    }

    /// Click a cell and apply whatever the click triggers.
    pub fn click(&mut self, column: u16, row: u16) {
        self.app.update(Action::Mouse(left_click(column, row)));
    }

    /// Click the first rendered occurrence of `needle`.
    pub fn click_text(&mut self, needle: &str) {
        let (column, row) = self
            .locate(needle)
            .unwrap_or_else(|| panic!("{needle:?} not on screen"));
        self.click(column, row);
    }
}

/// Convert a ratatui Buffer to a string, one char per cell.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Cell (column, row) where `needle` first starts in a rendered screen.
pub fn find_text(screen: &str, needle: &str) -> Option<(u16, u16)> {
    let needle: Vec<char> = needle.chars().collect();
    for (row, line) in screen.lines().enumerate() {
        let cells: Vec<char> = line.chars().collect();
        if let Some(column) = cells
            .windows(needle.len())
            .position(|w| w == needle.as_slice())
        {
            return Some((column as u16, row as u16));
        }
    }
    None
}
