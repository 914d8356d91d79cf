//! Folder handlers: library roots, per-title folders and episode scans

use std::path::PathBuf;

use crate::action::SettingsPage;
use crate::app::Router;
use crate::constants::APP_TITLE;
use crate::models::MyStatus;
use crate::services::{EpisodeCheck, Progress};
use crate::settings::ProgressMode;

impl Router {
    /// Folder of a title, searching the library roots when none is set yet
    pub(crate) fn ensure_folder(&mut self, anime_id: i32) -> Option<PathBuf> {
        let item = self.state.database.find_item_mut(anime_id)?;
        if !item.has_folder() {
            item.folder = self
                .services
                .library
                .find_folder(item, &self.state.settings.folders.root);
        }
        item.folder.clone()
    }

    /// Scan the disk for a title's episodes
    fn scan_item(&mut self, anime_id: i32, search_folder: bool) {
        let check = match self.state.settings.list.progress_mode {
            ProgressMode::AvailableEpisodes => EpisodeCheck::All,
            ProgressMode::WatchedEpisodes => EpisodeCheck::Next,
        };
        let Some(item) = self.state.database.find_item_mut(anime_id) else {
            return;
        };
        let scan = self.services.library.scan_episodes(
            item,
            &self.state.settings.folders.root,
            search_folder,
            check,
        );
        if let Some(folder) = scan.folder {
            item.folder = Some(folder);
        }
        item.available_episodes = scan.available;
    }

    pub(crate) fn add_folder(&mut self) {
        let Some(path) = self.services.prompts.browse_folder("Please select a folder:") else {
            return;
        };
        self.state.settings.folders.root.push(path);
        if self.state.settings.folders.watch_enabled {
            self.services.monitor.enable();
        }
        self.open_settings(SettingsPage::FoldersRoot);
    }

    pub(crate) fn open_folder(&mut self) {
        let Some(anime_id) = self.state.database.current_id() else {
            return;
        };
        let has_folder = self
            .state
            .database
            .find_item(anime_id)
            .is_some_and(|item| item.has_folder());

        if !has_folder {
            self.services.ui.change_status("Searching for folder...");
            if self.ensure_folder(anime_id).is_none() {
                self.services.ui.change_status("Folder not found.");
                return;
            }
            self.services.ui.change_status("Folder found.");
        }

        if let Some(folder) = self.ensure_folder(anime_id) {
            self.services.launcher.execute(&folder);
        }
    }

    pub(crate) fn set_folder(&mut self) {
        let Some(item) = self.state.database.current_item() else {
            return;
        };
        let anime_id = item.id;
        let title = format!("Anime title: {}", item.title);

        let Some(path) = self.services.prompts.browse_folder(&title) else {
            return;
        };
        if let Some(item) = self.state.database.find_item_mut(anime_id) {
            item.folder = Some(path);
        }
        self.scan_item(anime_id, false);
        self.state.save_list();
    }

    /// Look for new or available episodes, for the whole list or only the
    /// selected title
    pub(crate) fn check_episodes(&mut self, silent: bool, selected_only: bool) {
        if !silent {
            self.services.ui.set_progress(Progress::Normal);
        }

        // Without any folder set, searching for folders first is worth offering
        let mut search_folders = !self
            .state
            .database
            .iter()
            .any(|item| item.in_list && item.has_folder());
        if search_folders && !silent && !self.state.settings.folders.root.is_empty() {
            search_folders = self.services.prompts.confirm(
                APP_TITLE,
                "Would you like to search for anime folders first?",
                "This feature only checks specific anime folders for new episodes. \
                 As you have none set at the moment, searching for folders is highly recommended.",
            );
        }

        if selected_only {
            if let Some(anime_id) = self.state.database.current_id() {
                self.scan_item(anime_id, true);
            }
        } else {
            let ids = self.state.database.ids();
            let total = ids.len();
            for (done, anime_id) in ids.into_iter().enumerate() {
                if !silent {
                    self.services.ui.set_progress(Progress::Value { done, total });
                }
                let Some(item) = self.state.database.find_item(anime_id) else {
                    continue;
                };
                let wanted = item.in_list
                    && matches!(
                        item.my_status,
                        Some(MyStatus::Watching | MyStatus::OnHold | MyStatus::PlanToWatch)
                    );
                if !wanted {
                    continue;
                }
                if !silent {
                    let status = format!("Searching... ({})", item.title);
                    self.services.ui.change_status(&status);
                }
                self.scan_item(anime_id, search_folders);
            }
        }

        if !silent {
            self.services.ui.set_progress(Progress::Off);
            self.services.ui.change_status("Search finished.");
        }
    }
}
