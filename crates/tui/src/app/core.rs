//! App construction.

use omarchy_config::ManualConfig;
use omarchy_engine::{CategoryFilter, WorkspaceSimulator};
use ratatui::layout::Rect;

use crate::app::{App, HitMap, InputMode};

impl Default for App {
    fn default() -> Self {
        Self::new(ManualConfig::default())
    }
}

impl App {
    /// Builds the app from resolved configuration, with the demo session
    /// loaded and the simulator disengaged.
    pub fn new(config: ManualConfig) -> Self {
        Self {
            page: config.start_page,
            theme: config.theme,
            simulator: WorkspaceSimulator::with_demo_windows(),
            search_query: String::new(),
            category: CategoryFilter::All,
            input_mode: InputMode::Normal,
            show_intro: !config.skip_intro,
            show_sidebar: true,
            show_help: false,
            scroll: 0,
            hint_ttl: config.hint_ttl,
            scheduled_hint: None,
            last_area: Rect::default(),
            content_area: Rect::default(),
            hit_map: HitMap::default(),
        }
    }

    /// Replaces the demo session with an empty workspace.
    pub fn with_empty_session(mut self) -> Self {
        self.simulator = WorkspaceSimulator::new();
        self
    }
}
