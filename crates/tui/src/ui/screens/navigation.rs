//! Navigation page: simulator panel, keybind search, and the card grid.
//!
//! Responsibilities:
//! - Lay out the lead text, simulator, search box, and cards.
//! - Render the filtered keybind cards, or the empty-result message.
//!
//! Does NOT handle:
//! - Filtering (see `omarchy_engine::filter`).

use omarchy_config::Palette;
use omarchy_engine::{CategoryFilter, Keybind, WorkspaceSimulator};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{ClickTarget, HitMap};
use crate::ui::components::{CARD_HEIGHT, KeybindCard};
use crate::ui::keycap;
use crate::ui::screens::simulator::{PANEL_HEIGHT, render_simulator};
use crate::ui::theme::ThemeExt;

/// Everything the Navigation page shows.
pub struct NavigationView<'a> {
    pub simulator: &'a WorkspaceSimulator,
    pub query: &'a str,
    pub category: CategoryFilter,
    pub search_focused: bool,
    pub keybinds: &'a [&'static Keybind],
    /// First card row to show.
    pub scroll: usize,
}

/// Card columns for a content area `width` columns wide.
pub fn card_columns(width: u16) -> usize {
    match width {
        0..60 => 1,
        60..100 => 2,
        _ => 3,
    }
}

pub fn render_navigation(
    f: &mut Frame,
    area: Rect,
    view: &NavigationView<'_>,
    palette: Palette,
    hits: &mut HitMap,
) {
    let [lead, panel, search, cards] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(PANEL_HEIGHT),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    render_lead(f, lead, palette);
    render_simulator(f, panel, view.simulator, palette, hits);
    render_search_box(f, search, view, palette, hits);
    render_cards(f, cards, view, palette);
}

fn render_lead(f: &mut Frame, area: Rect, palette: Palette) {
    let mut second = vec![Span::raw("You start the terminal with ")];
    second.extend(keycap::chord(&["Super", "Return"], palette.keycap(), palette.text_dim()));
    second.push(Span::raw(" and a browser with "));
    second.extend(keycap::chord(
        &["Super", "Shift", "B"],
        palette.keycap(),
        palette.text_dim(),
    ));
    second.push(Span::raw("."));

    let lines = vec![
        Line::from(vec![
            Span::raw("Everything in Omarchy happens via the keyboard. "),
            Span::styled("EVERYTHING!", palette.title()),
        ]),
        Line::from(second),
    ];
    f.render_widget(Paragraph::new(lines).style(palette.text()), area);
}

fn render_search_box(
    f: &mut Frame,
    area: Rect,
    view: &NavigationView<'_>,
    palette: Palette,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .title(Line::styled(" Search ", palette.title()))
        .title_top(
            Line::styled(format!(" Category: {} ", view.category), palette.text_dim())
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if view.search_focused {
            palette.border_focused()
        } else {
            palette.border()
        });

    let content = if view.search_focused {
        Line::from(vec![
            Span::styled(view.query, palette.text()),
            Span::styled("█", palette.title()),
        ])
    } else if view.query.is_empty() {
        Line::styled("Press / to search keybinds", palette.text_dim())
    } else {
        Line::styled(view.query, palette.text())
    };

    f.render_widget(Paragraph::new(content).block(block), area);
    hits.push(area, ClickTarget::SearchBox);
}

fn render_cards(f: &mut Frame, area: Rect, view: &NavigationView<'_>, palette: Palette) {
    if view.keybinds.is_empty() {
        let lines = vec![
            Line::default(),
            Line::styled(
                format!("No keybinds found matching \"{}\"", view.query),
                palette.text(),
            ),
            Line::styled("Press Ctrl+U to clear the search", palette.text_dim()),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        return;
    }

    let columns = card_columns(area.width);
    let rows: Vec<&[&Keybind]> = view.keybinds.chunks(columns).collect();
    let first = view.scroll.min(rows.len().saturating_sub(1));

    let mut y = area.y;
    for row in &rows[first..] {
        if y + CARD_HEIGHT > area.bottom() {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, CARD_HEIGHT);
        let cells = Layout::horizontal(
            std::iter::repeat_n(Constraint::Ratio(1, columns as u32), columns),
        )
        .split(row_area);
        for (keybind, cell) in row.iter().zip(cells.iter()) {
            f.render_widget(KeybindCard::new(keybind, palette), *cell);
        }
        y += CARD_HEIGHT;
    }
}
