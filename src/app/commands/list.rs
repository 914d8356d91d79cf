//! List handlers: adding titles and editing list entries

use crate::action::to_int;
use crate::app::Router;
use crate::constants::MAX_SCORE;
use crate::models::{
    is_valid_episode, AiringStatus, AnimeItem, EventItem, EventMode, MyStatus, RecognizedEpisode,
};
use crate::services::{InputRequest, ListScope, MessageIcon};

impl Router {
    // ========================
    // List view
    // ========================

    /// Hand the titles a list tab shows, after the active filters, to the UI
    pub(crate) fn refresh_list(&mut self, scope: ListScope) {
        let filters = &self.state.filters;
        let items: Vec<&AnimeItem> = match scope {
            ListScope::Status(status) => self
                .state
                .database
                .with_status(status)
                .filter(|item| filters.matches(item))
                .collect(),
            ListScope::Current | ListScope::All => self
                .state
                .database
                .iter()
                .filter(|item| item.is_in_list() && filters.matches(item))
                .collect(),
        };
        self.services.ui.refresh_list(scope, &items);
    }

    // ========================
    // Adding
    // ========================

    /// Add a title to the list with the given status. The local list is
    /// updated right away and the add is queued for the server.
    pub(crate) fn add_to_list_as(&mut self, status: MyStatus, anime_id: Option<i32>) {
        let Some(anime_id) = self.state.database.resolve_id(anime_id) else {
            return;
        };
        let today = self.state.today();
        let Some(item) = self.state.database.find_item_mut(anime_id) else {
            return;
        };

        item.add_to_user_list();
        item.set_my_status(status);
        if status == MyStatus::Completed {
            item.my_last_watched_episode = item.episode_count;
            item.set_finish_date(today, true);
        }
        let episode = item.my_last_watched_episode;
        self.state.save_list();

        if self.state.recognized == RecognizedEpisode::NotInList {
            self.state.recognized = RecognizedEpisode::Unknown;
        }

        self.refresh_list(ListScope::Status(status));
        self.services.ui.refresh_tabs(status);
        self.services.ui.refresh_search_results();

        let mut event = EventItem::new(anime_id, EventMode::AnimeAdd);
        event.episode = (episode > 0).then_some(episode);
        event.status = Some(status);
        self.services.queue.add(event);
    }

    // ========================
    // Editing the current title
    // ========================

    pub(crate) fn edit_delete(&mut self) {
        let Some(item) = self.state.database.current_item() else {
            return;
        };
        let confirmed = self.services.prompts.confirm(
            &item.title,
            "Are you sure you want to delete this title from your list?",
            "",
        );
        if confirmed {
            self.services
                .queue
                .add(EventItem::new(item.id, EventMode::AnimeDelete));
        }
    }

    pub(crate) fn edit_episode(&mut self) {
        let Some(item) = self.state.database.current_item() else {
            return;
        };
        let request = InputRequest {
            title: item.title.clone(),
            info: "Please enter episode number for this title:".to_string(),
            text: item.my_last_watched_episode.to_string(),
            numeric: Some((0, item.episode_count)),
        };

        if let Some(text) = self.services.prompts.input(&request) {
            let number = to_int(&text);
            if is_valid_episode(number, item.episode_count) {
                self.services.queue.add(item.episode_event(number));
            }
        }
    }

    /// Scores outside 0..=10 are ignored
    pub(crate) fn edit_score(&mut self, score: i32) {
        if !(0..=MAX_SCORE).contains(&score) {
            return;
        }
        let Some(anime_id) = self.state.database.current_id() else {
            return;
        };
        let mut event = EventItem::new(anime_id, EventMode::ScoreUpdate);
        event.score = Some(score);
        self.services.queue.add(event);
    }

    /// Change the list status, refusing transitions the airing status rules out
    pub(crate) fn edit_status(&mut self, status: MyStatus) {
        let today = self.state.today();
        let Some(item) = self.state.database.current_item_mut() else {
            return;
        };

        let rejection = match item.airing_status {
            AiringStatus::Airing if status == MyStatus::Completed => {
                Some("This anime is still airing, you cannot set it as completed.")
            }
            AiringStatus::NotYetAired if status != MyStatus::PlanToWatch => Some(
                "This anime has not aired yet, you cannot set it as anything but Plan to Watch.",
            ),
            AiringStatus::Unknown => return,
            _ => None,
        };
        if let Some(text) = rejection {
            self.services
                .prompts
                .message(&item.title, text, MessageIcon::Error);
            return;
        }

        let mut episode = None;
        let completed = status == MyStatus::Completed;
        if completed {
            item.set_finish_date(today, false);
            if item.episode_count > 0 {
                episode = Some(item.episode_count);
            }
        }

        let mut event = EventItem::new(item.id, EventMode::StatusUpdate);
        if episode.is_some() {
            event.mode = EventMode::AnimeEdit;
        }
        event.episode = episode;
        event.status = Some(status);
        if completed {
            self.state.save_list();
        }
        self.services.queue.add(event);
    }

    pub(crate) fn edit_tags(&mut self) {
        let Some(item) = self.state.database.current_item() else {
            return;
        };
        let request = InputRequest {
            title: item.title.clone(),
            info: "Please enter tags for this title, separated by a comma:".to_string(),
            text: item.my_tags.clone(),
            numeric: None,
        };

        if let Some(tags) = self.services.prompts.input(&request) {
            let mut event = EventItem::new(item.id, EventMode::TagUpdate);
            event.tags = Some(tags);
            self.services.queue.add(event);
        }
    }

    /// Alternative titles are local only and never queued
    pub(crate) fn edit_titles(&mut self) {
        let Some(item) = self.state.database.current_item_mut() else {
            return;
        };
        let request = InputRequest {
            title: item.title.clone(),
            info: "Please enter alternative titles, separated by a semicolon:".to_string(),
            text: item.synonyms_text(),
            numeric: None,
        };

        if let Some(text) = self.services.prompts.input(&request) {
            item.set_user_synonyms(&text);
            self.state.save_list();
        }
    }
}
