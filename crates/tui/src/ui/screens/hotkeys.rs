//! Hotkeys page: the reference tables.
//!
//! Sections are drawn from the scroll index downward until the area is full.

use omarchy_config::Palette;
use omarchy_engine::{HotkeySection, MANUAL_HOTKEYS};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
};

use crate::ui::keycap;
use crate::ui::theme::ThemeExt;

const KEYS_COLUMN: u16 = 30;
const CLUE_COLUMN: u16 = 8;

/// Rows a section needs: title, optional description, header, items, gap.
fn section_height(section: &HotkeySection) -> u16 {
    let description = u16::from(section.description.is_some());
    1 + description + 1 + section.items.len() as u16 + 1
}

pub fn render_hotkeys(f: &mut Frame, area: Rect, scroll: usize, palette: Palette) {
    let mut lead = vec![Span::raw("You can see all the main keyboard bindings by hitting ")];
    lead.extend(keycap::chord(&["Super", "K"], palette.keycap(), palette.text_dim()));
    lead.push(Span::raw("."));
    f.render_widget(
        Paragraph::new(Line::from(lead)).style(palette.text()),
        Rect::new(area.x, area.y, area.width, 1.min(area.height)),
    );

    let mut y = area.y + 2;
    for section in MANUAL_HOTKEYS.iter().skip(scroll) {
        if y >= area.bottom() {
            break;
        }
        let height = section_height(section).min(area.bottom() - y);
        render_section(f, Rect::new(area.x, y, area.width, height), section, palette);
        y += height;
    }
}

fn render_section(f: &mut Frame, area: Rect, section: &HotkeySection, palette: Palette) {
    let mut y = area.y;
    f.render_widget(
        Line::styled(format!("## {}", section.title), palette.title()),
        Rect::new(area.x, y, area.width, 1),
    );
    y += 1;
    if let Some(description) = section.description
        && y < area.bottom()
    {
        f.render_widget(
            Line::styled(description, palette.text_dim()),
            Rect::new(area.x, y, area.width, 1),
        );
        y += 1;
    }
    if y >= area.bottom() {
        return;
    }

    let clues = section.has_clues();
    let mut header = vec!["Hotkey", "Function"];
    let mut widths = vec![Constraint::Length(KEYS_COLUMN), Constraint::Min(10)];
    if clues {
        header.push("Clue");
        widths.push(Constraint::Length(CLUE_COLUMN));
    }

    let rows = section.items.iter().map(|item| {
        let mut cells = vec![
            Line::from(keycap::chord(item.keys, palette.keycap(), palette.text_dim())),
            Line::styled(item.action, palette.text()),
        ];
        if clues {
            cells.push(Line::raw(item.clue.unwrap_or_default()));
        }
        Row::new(cells)
    });

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(palette.table_header()))
        .column_spacing(2);
    f.render_widget(table, Rect::new(area.x, y, area.width, area.bottom() - y));
}
