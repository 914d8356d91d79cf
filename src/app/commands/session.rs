//! Session handlers: logging in and out, list synchronization, MyAnimeList pages

use crate::app::Router;
use crate::constants::{MAL_ANIME_URL, MAL_HISTORY_URL, MAL_PANEL_URL, MAL_PROFILE_URL};
use crate::models::{AnimeItem, EventMode};
use crate::services::ListScope;

impl Router {
    // ========================
    // Login / logout
    // ========================

    pub(crate) fn login(&mut self) {
        if self.state.database.is_empty() {
            // Retrieve the list first and log in once it arrives
            self.synchronize(true);
        } else {
            self.start_login();
        }
    }

    /// Send the login request itself
    fn start_login(&mut self) {
        self.services.ui.change_status("Logging in...");
        let started = self.services.mal.login(&self.state.settings.account);
        self.services.ui.enable_input(!started);
        if !started {
            self.services.ui.clear_status();
        }
    }

    pub(crate) fn logout(&mut self, user: Option<String>) {
        if !self.state.logged_in {
            return;
        }
        self.state.logged_in = false;
        tracing::info!("Logged out");

        let user = user.unwrap_or_else(|| self.state.settings.account.user.clone());
        let ui = &mut self.services.ui;
        ui.set_login_button(false);
        ui.change_status(&format!("{} is now logged out.", user));
        ui.refresh_menubar();
        ui.update_tip();
        self.services.mal.clear_cookies();
    }

    pub(crate) fn toggle_login(&mut self) {
        if self.state.logged_in {
            self.logout(None);
        } else {
            self.login();
        }
    }

    pub(crate) fn login_succeeded(&mut self, user: &str) {
        self.state.logged_in = true;
        tracing::info!(user, "Logged in");

        let ui = &mut self.services.ui;
        ui.enable_input(true);
        ui.set_login_button(true);
        ui.change_status(&format!("{} is now logged in.", user));
        ui.refresh_menubar();
        ui.update_tip();

        if self.services.queue.item_count() > 0 {
            self.services.queue.check();
        }
    }

    // ========================
    // Synchronization
    // ========================

    /// Push pending changes, or refresh the list when there are none.
    /// `login_after` logs in once the refreshed list has arrived.
    pub(crate) fn synchronize(&mut self, login_after: bool) {
        if self.state.logged_in && self.services.queue.item_count() > 0 {
            self.services.queue.check();
            return;
        }

        // A refresh would drop a title that is only added locally, so the
        // queue has to reach the server first
        let adding = self
            .services
            .queue
            .pending()
            .iter()
            .any(|event| event.mode == EventMode::AnimeAdd);
        if adding {
            self.start_login();
            return;
        }

        self.services.ui.change_status("Refreshing list...");
        let user = self.state.settings.account.user.clone();
        let started = self.services.mal.get_list(&user, login_after);
        self.services.ui.enable_input(!started);
        if !started {
            self.services.ui.clear_status();
        }
    }

    pub(crate) fn list_refreshed(&mut self, user: &str, items: Vec<AnimeItem>, login_after: bool) {
        let count = items.len();
        self.state.database.replace_list(user, items);
        self.state.save_list();
        tracing::info!(user, count, "List refreshed");

        self.services.ui.enable_input(true);
        self.refresh_list(ListScope::Current);
        self.services.ui.change_status(&format!("{} titles in {}'s list.", count, user));

        if login_after && !self.state.logged_in {
            self.start_login();
        }
    }

    // ========================
    // MyAnimeList pages
    // ========================

    pub(crate) fn view_panel(&mut self) {
        self.services.launcher.open_link(MAL_PANEL_URL);
    }

    pub(crate) fn view_profile(&mut self) {
        let url = format!("{}{}", MAL_PROFILE_URL, self.state.settings.account.user);
        self.services.launcher.open_link(&url);
    }

    pub(crate) fn view_history(&mut self) {
        let url = format!("{}{}", MAL_HISTORY_URL, self.state.settings.account.user);
        self.services.launcher.open_link(&url);
    }

    pub(crate) fn view_anime_page(&mut self, anime_id: Option<i32>) {
        if let Some(id) = self.state.database.resolve_id(anime_id) {
            let url = format!("{}{}/", MAL_ANIME_URL, id);
            self.services.launcher.open_link(&url);
        }
    }
}
