//! Workspace simulator panel.
//!
//! Responsibilities:
//! - Draw the status bar, on-screen chord controls, tiled windows, held keys,
//!   and the current hint.
//! - Register the panel, controls, and tiles in the hit map.
//!
//! Does NOT handle:
//! - Any simulator state change (the engine owns it).
//!
//! Invariants:
//! - Tiles follow the workspace's tiling order and layout.
//! - The "click to interact" overlay sits above the tiles in the hit map.

use omarchy_config::Palette;
use omarchy_engine::{
    Command, Layout as TileLayout, Modifiers, Window, WindowKind, WorkspaceSimulator,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{ClickTarget, HitMap};
use crate::ui::hint::render_hint;
use crate::ui::keycap;
use crate::ui::popup::centered_fixed;
use crate::ui::theme::ThemeExt;

/// Rows the panel wants, borders included.
pub const PANEL_HEIGHT: u16 = 16;

/// On-screen chord buttons: labels, caption, command.
const CONTROLS: &[(&[&str], &str, Command)] = &[
    (&["Super", "Enter"], "", Command::Open(WindowKind::Terminal)),
    (&["Super", "Shift", "B"], "", Command::Open(WindowKind::Browser)),
    (&["Super", "W"], " Close", Command::CloseActive),
    (&["Super", "Shift", "Q"], " Exit", Command::ExitSession),
];

pub fn render_simulator(
    f: &mut Frame,
    area: Rect,
    sim: &WorkspaceSimulator,
    palette: Palette,
    hits: &mut HitMap,
) {
    let engaged = sim.is_engaged();
    let block = Block::default()
        .title(Line::styled(" Workspace Simulator ", palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if engaged {
            palette.border_focused()
        } else {
            palette.border()
        })
        .style(palette.surface());
    let inner = block.inner(area);
    f.render_widget(block, area);
    hits.push(area, ClickTarget::SimulatorPanel);

    let [status, controls, workspace, held] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_status_bar(f, status, sim, palette);
    render_controls(f, controls, palette, hits);
    render_workspace(f, workspace, sim, palette, hits);
    render_held_keys(f, held, sim, palette);

    if !engaged {
        let overlay = centered_fixed(34, 3, workspace);
        f.render_widget(Clear, overlay);
        let prompt = Paragraph::new(Line::styled(
            "▶ CLICK TO INTERACT (or press i)",
            palette.title(),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border_focused())
                .style(palette.base()),
        );
        f.render_widget(prompt, overlay);
        hits.push(overlay, ClickTarget::SimulatorPanel);
    }

    if let Some(hint) = sim.current_hint() {
        render_hint(f, workspace, &hint.text, palette);
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, sim: &WorkspaceSimulator, palette: Palette) {
    let state = sim.state();
    let mut workspaces = vec![Span::raw(" ")];
    for n in 1..=4 {
        let style = if n == 1 && !state.is_empty() {
            palette.highlight()
        } else {
            palette.text_dim()
        };
        workspaces.push(Span::styled(format!(" {n} "), style));
        workspaces.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(workspaces)), area);

    let (dot_style, label) = if sim.is_engaged() {
        (palette.success(), "ENGAGED")
    } else {
        (palette.error(), "IDLE")
    };
    let right = Line::from(vec![
        Span::styled(format!("{} split  ", state.layout().label()), palette.text_dim()),
        Span::styled("● ", dot_style),
        Span::styled(format!("{label} "), palette.text()),
    ]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), area);
}

fn render_controls(f: &mut Frame, area: Rect, palette: Palette, hits: &mut HitMap) {
    let mut spans = vec![Span::raw(" ")];
    let mut x = area.x + 1;
    for (labels, caption, command) in CONTROLS {
        let mut button = keycap::chord(labels, palette.keycap(), palette.text_dim());
        button.push(Span::styled(*caption, palette.text_dim()));
        let width = keycap::chord_width(labels)
            + u16::try_from(caption.chars().count()).unwrap_or(0);

        let visible = width.min(area.right().saturating_sub(x));
        hits.push(
            Rect::new(x, area.y, visible, 1),
            ClickTarget::SimulatorControl(*command),
        );
        x = x.saturating_add(width + 2);

        spans.extend(button);
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_workspace(
    f: &mut Frame,
    area: Rect,
    sim: &WorkspaceSimulator,
    palette: Palette,
    hits: &mut HitMap,
) {
    let state = sim.state();
    if state.is_empty() {
        let mut hint = vec![Span::raw("Press ")];
        hint.extend(keycap::chord(&["Super", "Enter"], palette.keycap(), palette.text_dim()));
        hint.push(Span::raw(" to launch Terminal"));
        let lines = vec![
            Line::styled("⏻  Session Empty", palette.title()),
            Line::from(hint).style(palette.text_dim()),
        ];
        let rows = centered_fixed(area.width, 2, area);
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows);
        return;
    }

    let direction = match state.layout() {
        TileLayout::Horizontal => Direction::Horizontal,
        TileLayout::Vertical => Direction::Vertical,
    };
    let count = u32::try_from(state.windows().len()).unwrap_or(1);
    let tiles = Layout::default()
        .direction(direction)
        .constraints(state.windows().iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    let active = state.active_window_id();
    for (window, tile) in state.windows().iter().zip(tiles.iter()) {
        render_tile(f, *tile, window, active == Some(window.id), palette);
        hits.push(*tile, ClickTarget::Window(window.id));
    }
}

fn render_tile(f: &mut Frame, area: Rect, window: &Window, active: bool, palette: Palette) {
    let block = Block::default()
        .title(Line::styled(
            format!(" {} {} ", icon(window.kind), window.title),
            if active {
                palette.title()
            } else {
                palette.text_dim()
            },
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if active {
            palette.border_focused()
        } else {
            palette.border()
        })
        .style(palette.base());
    let body: Vec<Line> = contents(window.kind)
        .iter()
        .map(|l| Line::styled(*l, palette.text_dim()))
        .collect();
    f.render_widget(Paragraph::new(body).block(block), area);
}

fn icon(kind: WindowKind) -> &'static str {
    match kind {
        WindowKind::Terminal => ">_",
        WindowKind::Browser => "◎",
        WindowKind::FileManager => "▤",
        WindowKind::Monitor => "≋",
    }
}

fn contents(kind: WindowKind) -> &'static [&'static str] {
    match kind {
        WindowKind::Terminal => &[
            "usr@omarchy:~$ neofetch",
            " /\\   OS: Omarchy",
            " (oo) WM: Hyprland",
            " (__) Shell: zsh",
            "usr@omarchy:~$ ▌",
        ],
        WindowKind::Browser => &["◀ ▶ ⟳  omarchy.org", "", "   ◎"],
        WindowKind::FileManager => &["▸ Documents", "▸ Downloads", "▸ Pictures", "▸ .config"],
        WindowKind::Monitor => &["CPU  34%  ███▍", "MEM  2.4G ██▊", "▁▃▅▂▇▃▂▅"],
    }
}

fn render_held_keys(f: &mut Frame, area: Rect, sim: &WorkspaceSimulator, palette: Palette) {
    if !sim.is_engaged() {
        let idle = Line::styled(" Esc releases the keyboard once engaged", palette.text_dim());
        f.render_widget(Paragraph::new(idle), area);
        return;
    }

    let mut labels: Vec<String> = modifier_labels(sim.held_modifiers())
        .into_iter()
        .map(str::to_string)
        .collect();
    labels.extend(sim.held_keys().iter().map(|k| k.label()));

    let mut spans = vec![Span::styled(" Held: ", palette.text_dim())];
    if labels.is_empty() {
        spans.push(Span::styled("none", palette.text_dim()));
    } else {
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        spans.extend(keycap::chord(&refs, palette.keycap(), palette.text_dim()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn modifier_labels(modifiers: Modifiers) -> Vec<&'static str> {
    [
        (Modifiers::SUPER, "Super"),
        (Modifiers::META, "Meta"),
        (Modifiers::CTRL, "Ctrl"),
        (Modifiers::ALT, "Alt"),
        (Modifiers::SHIFT, "Shift"),
    ]
    .into_iter()
    .filter(|(flag, _)| modifiers.contains(*flag))
    .map(|(_, label)| label)
    .collect()
}
