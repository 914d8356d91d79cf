//! Window handlers

use crate::action::{InfoPage, SettingsPage, WindowKind};
use crate::app::Router;

impl Router {
    /// Create the window if it does not exist yet, otherwise bring it forward
    pub(crate) fn show_window(&mut self, window: WindowKind, parent: Option<WindowKind>, modal: bool) {
        let ui = &mut self.services.ui;
        if ui.is_open(window) {
            ui.activate(window);
        } else {
            ui.create(window, parent, modal);
        }
    }

    /// Anime information window, on the given page
    pub(crate) fn show_anime(&mut self, anime_id: Option<i32>, page: InfoPage) {
        let anime_id = self.state.database.resolve_id(anime_id);
        self.services.ui.load_anime(anime_id, page);
        self.show_window(WindowKind::AnimeInfo, Some(WindowKind::Main), false);
    }

    pub(crate) fn open_settings(&mut self, page: SettingsPage) {
        self.services.ui.set_settings_page(page);
        self.show_window(WindowKind::Settings, Some(WindowKind::Main), true);
    }

    pub(crate) fn exit(&mut self) {
        self.services.ui.destroy(WindowKind::Main);
        self.state.running = false;
    }
}
