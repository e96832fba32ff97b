//! Intro splash.

use omarchy_config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::components::BigTextWidget;
use crate::ui::theme::ThemeExt;

pub fn render_intro(f: &mut Frame, area: Rect, palette: Palette) {
    let big = BigTextWidget::header("OMARCHY").color(palette.accent);
    let show_big = area.width >= big.width() && area.height >= big.height() + 7;
    let big_height = if show_big { big.height() } else { 0 };

    let [_, logo, text, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(big_height),
        Constraint::Length(7),
        Constraint::Fill(1),
    ])
    .areas(area);

    if show_big {
        f.render_widget(big, logo);
    }

    let wordmark = if show_big {
        Line::from(Span::styled(".MANUAL", palette.title()))
    } else {
        Line::from(vec![
            Span::styled("OMARCHY", palette.title()),
            Span::styled(".MANUAL", palette.text_dim()),
        ])
    };

    let lines = vec![
        wordmark,
        Line::default(),
        Line::styled("Forget the mouse.", palette.text()),
        Line::default(),
        Line::styled("[ ENTER_SYSTEM ]", palette.highlight()),
        Line::default(),
        Line::styled("Press Enter to open the manual, q to quit", palette.text_dim()),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text);
}
