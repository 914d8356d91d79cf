//! Router - turns actions into calls on the app state and the collaborators

use crate::action::{Action, InfoPage, ParseActionError, WindowKind};
use crate::app::state::AppState;
use crate::messages::SyncResponse;
use crate::services::Services;

/// Owns the application state and the collaborators, and runs actions
/// against them one at a time.
pub struct Router {
    pub(crate) state: AppState,
    pub(crate) services: Services,
    pub(crate) rng: fastrand::Rng,
}

impl Router {
    pub fn new(state: AppState, services: Services) -> Self {
        Router {
            state,
            services,
            rng: fastrand::Rng::new(),
        }
    }

    /// Fix the random source used by random playback
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Parse and run an action written as `Verb(body)`.
    ///
    /// Empty text, unknown verbs and malformed arguments are ignored.
    pub fn execute_str(&mut self, raw: &str) {
        tracing::debug!(action = raw, "Action");
        match raw.parse::<Action>() {
            Ok(action) => self.execute(action),
            Err(ParseActionError::Empty) => {}
            Err(e) => tracing::debug!(error = %e, "Ignoring action"),
        }
    }

    /// Run a single action
    pub fn execute(&mut self, action: Action) {
        match action {
            // Session
            Action::Login => self.login(),
            Action::Logout { user } => self.logout(user),
            Action::ToggleLogin => self.toggle_login(),
            Action::Synchronize { login_after } => self.synchronize(login_after),
            Action::ViewPanel => self.view_panel(),
            Action::ViewProfile => self.view_profile(),
            Action::ViewHistory => self.view_history(),
            Action::ViewAnimePage { anime_id } => self.view_anime_page(anime_id),

            // Launching
            Action::Execute { path } => self.execute_path(&path),
            Action::Url { address } => self.open_url(&address),

            // Windows
            Action::About => self.show_window(WindowKind::About, Some(WindowKind::Main), true),
            Action::CheckUpdates => {
                self.show_window(WindowKind::Update, Some(WindowKind::Main), true)
            }
            Action::Exit => self.exit(),
            Action::Filter => self.show_window(WindowKind::Filter, Some(WindowKind::Main), false),
            Action::Info { anime_id } => self.show_anime(anime_id, InfoPage::SeriesInfo),
            Action::MainDialog => self.show_window(WindowKind::Main, None, false),
            Action::RecognitionTest => self.show_window(WindowKind::RecognitionTest, None, false),
            Action::SeasonBrowser => self.show_window(WindowKind::Season, None, false),
            Action::Settings { page } => self.open_settings(page),
            Action::Torrents => self.show_window(WindowKind::Torrents, None, false),
            Action::TorrentAddFilter { modal, parent } => {
                self.show_window(WindowKind::FeedFilter, parent, modal)
            }

            // Search and misc
            Action::SetSearchMode(mode) => self.services.ui.set_search_mode(&mode),
            Action::ToggleListSearch => self.toggle_list_search(),
            Action::SaveSettings => self.state.save_settings(),
            Action::SearchAnime { query } => self.search_anime(&query),
            Action::SearchTorrents { url } => self.search_torrents(&url),
            Action::ShowListStats => self.show_list_stats(),
            Action::CheckEventBuffer => self.services.queue.show(),
            Action::ToggleRecognition => self.toggle_recognition(),

            // List
            Action::AddToListAs { status, anime_id } => self.add_to_list_as(status, anime_id),
            Action::EditAll { anime_id } => self.show_anime(anime_id, InfoPage::MyInfo),
            Action::EditDelete => self.edit_delete(),
            Action::EditEpisode => self.edit_episode(),
            Action::EditScore { score } => self.edit_score(score),
            Action::EditStatus { status } => self.edit_status(status),
            Action::EditTags => self.edit_tags(),
            Action::EditTitles => self.edit_titles(),

            // Folders
            Action::AddFolder => self.add_folder(),
            Action::CheckEpisodes { silent, selected_only } => {
                self.check_episodes(silent, selected_only)
            }
            Action::OpenFolder => self.open_folder(),
            Action::SetFolder => self.set_folder(),

            // Playback
            Action::PlayEpisode { number } => self.play_episode(number),
            Action::PlayLast => self.play_last(),
            Action::PlayNext => self.play_next(),
            Action::PlayRandom { anime_id } => self.play_random(anime_id),
            Action::PlayRandomAnime => self.play_random_anime(),

            // Filters
            Action::FilterReset => self.filter_reset(),
            Action::FilterStatus { index } => self.filter_status(index),
            Action::FilterType { index } => self.filter_type(index),

            Action::Announce { channel, force } => self.services.announcer.announce(channel, force),

            // Season browser
            Action::SeasonLoad { file } => self.season_load(&file),
            Action::SeasonGroupBy(group) => self.season_group_by(group),
            Action::SeasonSortBy(sort) => self.season_sort_by(sort),
            Action::SeasonRefreshItemData { anime_id } => {
                self.services.ui.refresh_season_data(anime_id, true)
            }
        }
    }

    /// Apply the result of a finished network request
    pub fn handle_response(&mut self, response: SyncResponse) {
        if response.is_error() {
            tracing::warn!(?response, "Request failed");
        }
        match response {
            SyncResponse::LoginSucceeded { user } => self.login_succeeded(&user),
            SyncResponse::LoginFailed { message } | SyncResponse::ListFailed { message } => {
                self.services.ui.enable_input(true);
                self.services.ui.change_status(&message);
            }
            SyncResponse::ListRefreshed { user, items, login_after } => {
                self.list_refreshed(&user, items, login_after)
            }
        }
    }

    /// Apply every response the client has ready; returns how many there were
    pub fn drain_responses(&mut self) -> usize {
        let responses = self.services.mal.take_responses();
        let count = responses.len();
        for response in responses {
            self.handle_response(response);
        }
        count
    }
}
