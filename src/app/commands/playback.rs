//! Playback handlers

use crate::app::Router;

impl Router {
    /// Find the file for an episode and launch it. Returns false when no
    /// file was found.
    fn try_play(&mut self, anime_id: i32, episode: i32) -> bool {
        let Some(folder) = self.ensure_folder(anime_id) else {
            return false;
        };
        let Some(item) = self.state.database.find_item_mut(anime_id) else {
            return false;
        };
        match self.services.library.find_episode(item, &folder, episode) {
            Some(file) => {
                tracing::info!(anime_id, episode, file = %file.display(), "Playing episode");
                item.playing = self.services.launcher.execute(&file);
                true
            }
            None => false,
        }
    }

    fn play_current(&mut self, number: i32) {
        let Some(item) = self.state.database.current_item() else {
            return;
        };
        let (anime_id, title) = (item.id, item.title.clone());
        if !self.try_play(anime_id, number) {
            let status = format!("Could not find episode #{} ({}).", number, title);
            self.services.ui.change_status(&status);
        }
    }

    pub(crate) fn play_episode(&mut self, number: i32) {
        self.play_current(number);
    }

    pub(crate) fn play_last(&mut self) {
        if let Some(item) = self.state.database.current_item() {
            let number = item.my_last_watched_episode;
            self.play_current(number);
        }
    }

    /// Single-episode titles always play their only episode
    pub(crate) fn play_next(&mut self) {
        if let Some(item) = self.state.database.current_item() {
            let number = if item.episode_count == 1 {
                1
            } else {
                item.my_last_watched_episode.saturating_add(1)
            };
            self.play_current(number);
        }
    }

    /// Play a random episode of one title, trying as many draws as the title
    /// has episodes before giving up
    pub(crate) fn play_random(&mut self, anime_id: Option<i32>) {
        let Some(anime_id) = self.state.database.resolve_id(anime_id) else {
            return;
        };
        let Some(item) = self.state.database.find_item(anime_id) else {
            return;
        };
        let total = item.random_episode_ceiling();

        for _ in 0..total {
            let episode = self.rng.i32(1..=total);
            if self.try_play(anime_id, episode) {
                break;
            }
        }
    }

    /// Play a random episode of a random title on the list
    pub(crate) fn play_random_anime(&mut self) {
        let ids: Vec<i32> = self
            .state
            .database
            .iter()
            .filter(|item| item.in_list)
            .map(|item| item.id)
            .collect();

        for _ in 0..ids.len() {
            let anime_id = ids[self.rng.usize(..ids.len())];
            let Some(item) = self.state.database.find_item(anime_id) else {
                continue;
            };
            let episode = self.rng.i32(1..=item.random_episode_ceiling());
            if self.try_play(anime_id, episode) {
                break;
            }
        }
    }
}
