//! Search, statistics and recognition handlers

use crate::action::{SettingsPage, WindowKind};
use crate::app::Router;
use crate::constants::APP_TITLE;
use crate::models::RecognizedEpisode;
use crate::services::MessageIcon;
use crate::settings::MalApi;
use crate::stats::ListStats;

impl Router {
    // ========================
    // Searching
    // ========================

    /// Online search. The official API needs an account, so without one the
    /// user is offered the account settings instead.
    pub(crate) fn search_anime(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        let account = &self.state.settings.account;
        if account.api == MalApi::Official && !account.has_credentials() {
            let wants_settings = self.services.prompts.confirm(
                APP_TITLE,
                "Would you like to set your account information first?",
                "Anime search requires authentication, which means, you need to enter \
                 a valid user name and password to search MyAnimeList.",
            );
            if wants_settings {
                self.open_settings(SettingsPage::Account);
            }
            return;
        }

        self.show_window(WindowKind::Search, Some(WindowKind::Main), false);
        self.services.ui.search_anime(query);
    }

    pub(crate) fn search_torrents(&mut self, url: &str) {
        if !self.services.feeds.has_link_feed() {
            return;
        }
        let Some(title) = self.state.database.current_item().map(|item| item.title.clone()) else {
            return;
        };

        self.show_window(WindowKind::Torrents, None, false);
        self.services
            .ui
            .set_torrent_status(&format!("Searching torrents for \"{}\"...", title));
        let url = self.substitute_title(url);
        self.services.feeds.check_link_feed(&url);
    }

    // ========================
    // Statistics
    // ========================

    pub(crate) fn show_list_stats(&mut self) {
        self.state.stats = ListStats::calculate(&self.state.database);
        let user = &self.state.database.user_name;
        if user.is_empty() {
            return;
        }
        let title = format!("{}'s anime list stats:", user);
        let text = self.state.stats.to_message();
        self.services
            .prompts
            .message(&title, &text, MessageIcon::Information);
    }

    // ========================
    // Recognition
    // ========================

    pub(crate) fn toggle_recognition(&mut self) {
        self.state.recognition_enabled = !self.state.recognition_enabled;

        if self.state.recognition_enabled {
            self.services
                .ui
                .change_status("Automatic anime recognition is now enabled.");
            self.state.recognized = RecognizedEpisode::Unknown;
        } else {
            self.services
                .ui
                .change_status("Automatic anime recognition is now disabled.");
            if let Some(anime_id) = self.state.recognized.anime_id() {
                if let Some(item) = self.state.database.find_item_mut(anime_id) {
                    item.end_watching();
                }
            }
            self.state.recognized = RecognizedEpisode::NotInList;
        }
        tracing::info!(enabled = self.state.recognition_enabled, "Recognition toggled");
    }
}
