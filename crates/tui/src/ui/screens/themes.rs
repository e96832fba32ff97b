//! Themes page: how to switch themes, plus a clickable gallery.
//!
//! Responsibilities:
//! - Render the prose and the gallery of every registered theme.
//! - Register one click target per visible tile.
//!
//! Invariants:
//! - The active tile is always scrolled into view.

use omarchy_config::{ActiveTheme, THEMES};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::{ClickTarget, HitMap};
use crate::ui::components::Swatch;
use crate::ui::keycap;
use crate::ui::theme::ThemeExt;

pub const TILE_WIDTH: u16 = 32;
pub const TILE_HEIGHT: u16 = 4;

const PROSE_HEIGHT: u16 = 6;

/// Tiles per gallery row for an area `width` columns wide.
pub fn tile_columns(width: u16) -> usize {
    usize::from((width / TILE_WIDTH).max(1))
}

/// First gallery row to draw so that `active_row` fits in `visible_rows`.
fn first_row(active_row: usize, visible_rows: usize) -> usize {
    (active_row + 1).saturating_sub(visible_rows.max(1))
}

pub fn render_themes(f: &mut Frame, area: Rect, active: ActiveTheme, hits: &mut HitMap) {
    let palette = active.palette();
    let [prose, gallery, more] = Layout::vertical([
        Constraint::Length(PROSE_HEIGHT),
        Constraint::Min(TILE_HEIGHT),
        Constraint::Length(2),
    ])
    .areas(area);

    render_prose(f, prose, active);

    let columns = tile_columns(gallery.width);
    let visible_rows = usize::from(gallery.height / TILE_HEIGHT);
    let first = first_row(active.index() / columns, visible_rows);

    for (index, def) in THEMES.iter().enumerate().skip(first * columns) {
        let row = index / columns - first;
        let col = index % columns;
        let y = gallery.y + row as u16 * TILE_HEIGHT;
        if y + TILE_HEIGHT > gallery.bottom() {
            break;
        }
        let x = gallery.x + col as u16 * TILE_WIDTH;
        let tile = Rect::new(x, y, TILE_WIDTH.min(gallery.right() - x), TILE_HEIGHT);

        let is_active = index == active.index();
        let (marker, name_style, border) = if is_active {
            ("▶ ", palette.title(), palette.border_focused())
        } else {
            ("  ", palette.text(), palette.border())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Line::from(vec![
                Span::styled(marker, name_style),
                Span::styled(def.name, name_style),
            ]));
        let inner = block.inner(tile);
        f.render_widget(block, tile);

        let [swatch, label] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
        f.render_widget(Swatch::new(def.palette), swatch);
        if is_active {
            f.render_widget(Line::styled("(active)", palette.text_dim()), label);
        }
        hits.push(tile, ClickTarget::Theme(index));
    }

    let footer = Paragraph::new(vec![
        Line::styled("More Themes?", palette.title()),
        Line::styled(
            "You can find even more themes on the extra themes page or make your own.",
            palette.text_dim(),
        ),
    ]);
    f.render_widget(footer, more);
}

fn render_prose(f: &mut Frame, area: Rect, active: ActiveTheme) {
    let p = active.palette();
    let chord = |labels: &[&'static str]| keycap::chord(labels, p.keycap(), p.text_dim());

    let mut first = vec![Span::raw(format!(
        "Omarchy comes with {} beautiful themes. Select one from ",
        THEMES.len()
    ))];
    first.push(Span::styled("Style > Theme", p.title()));
    first.push(Span::raw(" in the Omarchy Menu ("));
    first.extend(chord(&["Super", "Alt", "Space"]));
    first.push(Span::raw(") or hop straight to the selector with "));
    first.extend(chord(&["Super", "Ctrl", "Shift", "Space"]));
    first.push(Span::raw("."));

    let mut second = vec![Span::raw(
        "Most themes ship background images you can rotate between with ",
    )];
    second.extend(chord(&["Super", "Ctrl", "Space"]));
    second.push(Span::raw("."));

    let mut third = vec![Span::raw("Here: ")];
    third.extend(chord(&["ArrowLeft"]));
    third.push(Span::raw(" / "));
    third.extend(chord(&["ArrowRight"]));
    third.push(Span::raw(" or t / T to browse, click a tile to apply."));

    let lines = vec![
        Line::from(first),
        Line::default(),
        Line::from(second),
        Line::from(third),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .style(p.text())
            .wrap(Wrap { trim: false }),
        area,
    );
}
