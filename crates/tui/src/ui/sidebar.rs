//! Sidebar: manual contents and, on the Navigation page, categories.
//!
//! Invariants:
//! - Every listed row is registered in the hit map at its drawn position.

use omarchy_config::{Page, Palette};
use omarchy_engine::CategoryFilter;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{ClickTarget, HitMap};
use crate::ui::theme::ThemeExt;

pub fn render_sidebar(
    f: &mut Frame,
    area: Rect,
    current: Page,
    category: CategoryFilter,
    palette: Palette,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(palette.border())
        .style(palette.base());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let mut targets: Vec<(usize, ClickTarget)> = Vec::new();

    lines.push(Line::styled(" Manual Contents", palette.title()));
    for (i, page) in Page::ALL.into_iter().enumerate() {
        let selected = page == current;
        let marker = if selected { "▸" } else { " " };
        let style = if selected {
            palette.highlight()
        } else {
            palette.text()
        };
        targets.push((lines.len(), ClickTarget::Page(page)));
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), palette.title()),
            Span::styled(format!("{} ", i + 1), palette.text_dim()),
            Span::styled(page.title(), style),
        ]));
    }

    if current == Page::Navigation {
        lines.push(Line::default());
        lines.push(Line::styled(" Categories  [ ]", palette.title()));
        for option in CategoryFilter::options() {
            let selected = option == category;
            let marker = if selected { "●" } else { "○" };
            let style = if selected {
                palette.highlight()
            } else {
                palette.text()
            };
            targets.push((lines.len(), ClickTarget::Category(option)));
            lines.push(Line::from(vec![
                Span::styled(format!(" {marker} "), palette.title()),
                Span::styled(option.label(), style),
            ]));
        }
    }

    for (row, target) in targets {
        let Ok(offset) = u16::try_from(row) else {
            continue;
        };
        if offset < inner.height {
            hits.push(
                Rect::new(inner.x, inner.y + offset, inner.width, 1),
                target,
            );
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}
