//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the frame chrome (header, sidebar, footer)
//! - Dispatch to the current page renderer
//! - Rebuild the click hit map for the frame
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state beyond layout bookkeeping (areas, hit map)

use omarchy_config::{Page, Palette};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{FOOTER_HEIGHT, HEADER_HEIGHT, SIDEBAR_WIDTH};
use crate::app::{App, HitMap, InputMode};
use crate::ui::screens::navigation::NavigationView;
use crate::ui::screens::{getting_started, hotkeys, intro, navigation, themes};
use crate::ui::theme::ThemeExt;
use crate::ui::{popup, sidebar};

/// Narrowest frame that still gets a sidebar.
const SIDEBAR_MIN_FRAME_WIDTH: u16 = 80;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        self.last_area = area;
        let mut hits = std::mem::take(&mut self.hit_map);
        hits.clear();

        let palette = self.theme.palette();
        f.render_widget(Block::default().style(palette.base()), area);

        if self.show_intro {
            intro::render_intro(f, area, palette);
            self.hit_map = hits;
            return;
        }

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        self.render_header(f, header, palette);

        let content = if self.show_sidebar && body.width >= SIDEBAR_MIN_FRAME_WIDTH {
            let [side, rest] =
                Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                    .areas(body);
            sidebar::render_sidebar(f, side, self.page, self.category, palette, &mut hits);
            rest
        } else {
            body
        };
        let content = padded(content);
        self.content_area = content;

        self.render_page(f, content, palette, &mut hits);
        self.render_footer(f, footer, palette);

        if self.show_help {
            popup::render_help(f, palette);
        }

        self.hit_map = hits;
    }

    fn render_page(&self, f: &mut Frame, area: Rect, palette: Palette, hits: &mut HitMap) {
        match self.page {
            Page::GettingStarted => {
                getting_started::render_getting_started(f, area, self.scroll, palette);
            }
            Page::Navigation => {
                let keybinds = self.visible_keybinds();
                let view = NavigationView {
                    simulator: &self.simulator,
                    query: &self.search_query,
                    category: self.category,
                    search_focused: self.input_mode == InputMode::Search,
                    keybinds: &keybinds,
                    scroll: self.scroll,
                };
                navigation::render_navigation(f, area, &view, palette, hits);
            }
            Page::Themes => themes::render_themes(f, area, self.theme, hits),
            Page::Hotkeys => hotkeys::render_hotkeys(f, area, self.scroll, palette),
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect, palette: Palette) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.border());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(28)]).areas(inner);
        let breadcrumb = Line::from(vec![
            Span::styled("The Omarchy Manual", palette.title()),
            Span::styled(" > ", palette.text_dim()),
            Span::styled(self.page.title(), palette.text()),
        ]);
        f.render_widget(Paragraph::new(breadcrumb), left);

        let theme = Line::from(vec![
            Span::styled("Theme: ", palette.text_dim()),
            Span::styled(self.theme.name(), palette.title()),
            Span::raw(" "),
        ])
        .right_aligned();
        f.render_widget(Paragraph::new(theme), right);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect, palette: Palette) {
        let hints: &[(&str, &str)] = if self.simulator.is_engaged() {
            &[("Esc", "release"), ("Alt", "as Super"), ("Ctrl+C", "quit")]
        } else if self.input_mode == InputMode::Search {
            &[("Enter/Esc", "done"), ("Ctrl+U", "clear")]
        } else {
            match self.page {
                Page::Navigation => &[
                    ("i", "simulator"),
                    ("/", "search"),
                    ("[ ]", "category"),
                    ("?", "help"),
                    ("q", "quit"),
                ],
                Page::Themes => &[("← →", "browse"), ("Enter", "apply"), ("?", "help"), ("q", "quit")],
                Page::GettingStarted | Page::Hotkeys => {
                    &[("j/k", "scroll"), ("?", "help"), ("q", "quit")]
                }
            }
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, what) in hints {
            spans.push(Span::styled(*key, palette.title()));
            spans.push(Span::styled(format!(" {what}  "), palette.text_dim()));
        }

        let mut pager = Vec::new();
        if self.page.index() > 0 {
            pager.push(Span::styled(
                format!("← {}", self.page.previous().title()),
                palette.text_dim(),
            ));
        }
        if self.page.index() + 1 < Page::ALL.len() {
            if !pager.is_empty() {
                pager.push(Span::raw("  "));
            }
            pager.push(Span::styled(
                format!("{} →", self.page.next().title()),
                palette.text_dim(),
            ));
        }
        pager.push(Span::raw(" "));

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(44)]).areas(area);
        f.render_widget(Paragraph::new(Line::from(spans)).style(palette.surface()), left);
        f.render_widget(
            Paragraph::new(Line::from(pager).right_aligned()).style(palette.surface()),
            right,
        );
    }
}

/// Content area with a one-column gutter on each side.
fn padded(area: Rect) -> Rect {
    if area.width <= 2 {
        return area;
    }
    Rect::new(area.x + 1, area.y, area.width - 2, area.height)
}
