use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Status of a title on the user's list, using MyAnimeList's numeric codes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MyStatus {
    Watching,
    Completed,
    OnHold,
    Dropped,
    PlanToWatch,
}

impl MyStatus {
    pub const ALL: [MyStatus; 5] = [
        MyStatus::Watching,
        MyStatus::Completed,
        MyStatus::OnHold,
        MyStatus::Dropped,
        MyStatus::PlanToWatch,
    ];

    pub fn from_code(code: i32) -> Option<MyStatus> {
        match code {
            1 => Some(MyStatus::Watching),
            2 => Some(MyStatus::Completed),
            3 => Some(MyStatus::OnHold),
            4 => Some(MyStatus::Dropped),
            6 => Some(MyStatus::PlanToWatch),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            MyStatus::Watching => 1,
            MyStatus::Completed => 2,
            MyStatus::OnHold => 3,
            MyStatus::Dropped => 4,
            MyStatus::PlanToWatch => 6,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MyStatus::Watching => "Watching",
            MyStatus::Completed => "Completed",
            MyStatus::OnHold => "On hold",
            MyStatus::Dropped => "Dropped",
            MyStatus::PlanToWatch => "Plan to watch",
        }
    }
}

/// Broadcast state of a title
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiringStatus {
    Airing,
    Finished,
    NotYetAired,
    #[default]
    Unknown,
}

impl AiringStatus {
    /// Position in the status filter, if the status can be filtered on
    pub fn filter_index(&self) -> Option<usize> {
        match self {
            AiringStatus::Airing => Some(0),
            AiringStatus::Finished => Some(1),
            AiringStatus::NotYetAired => Some(2),
            AiringStatus::Unknown => None,
        }
    }
}

/// Series type as reported by MyAnimeList
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesType {
    #[default]
    Tv,
    Ova,
    Movie,
    Special,
    Ona,
    Music,
}

impl SeriesType {
    /// Position in the type filter
    pub fn filter_index(&self) -> usize {
        match self {
            SeriesType::Tv => 0,
            SeriesType::Ova => 1,
            SeriesType::Movie => 2,
            SeriesType::Special => 3,
            SeriesType::Ona => 4,
            SeriesType::Music => 5,
        }
    }
}

/// A title in the anime database, with the user's list entry if it has one
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnimeItem {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub series_type: SeriesType,
    #[serde(default)]
    pub airing_status: AiringStatus,
    /// Zero when the total is not known yet
    #[serde(default)]
    pub episode_count: i32,
    /// Minutes per episode, zero when unknown
    #[serde(default)]
    pub episode_length: u32,

    #[serde(default)]
    pub in_list: bool,
    #[serde(default)]
    pub my_status: Option<MyStatus>,
    #[serde(default)]
    pub my_last_watched_episode: i32,
    #[serde(default)]
    pub my_score: i32,
    #[serde(default)]
    pub my_tags: String,
    #[serde(default)]
    pub my_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub my_finish_date: Option<NaiveDate>,
    #[serde(default)]
    pub user_synonyms: Vec<String>,
    #[serde(default)]
    pub folder: Option<PathBuf>,
    /// Episodes found on disk by the last scan
    #[serde(skip)]
    pub available_episodes: Vec<i32>,
    #[serde(skip)]
    pub playing: bool,
}

impl AnimeItem {
    pub fn new(id: i32, title: impl Into<String>) -> Self {
        AnimeItem {
            id,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn is_in_list(&self) -> bool {
        self.in_list
    }

    /// Put the title on the user's list with a clean list entry
    pub fn add_to_user_list(&mut self) {
        self.in_list = true;
        self.my_status = None;
        self.my_last_watched_episode = 0;
        self.my_score = 0;
        self.my_tags.clear();
        self.my_start_date = None;
        self.my_finish_date = None;
    }

    pub fn set_my_status(&mut self, status: MyStatus) {
        self.my_status = Some(status);
    }

    /// Finish date is only written when it is empty, unless `overwrite` is set
    pub fn set_finish_date(&mut self, date: NaiveDate, overwrite: bool) {
        if overwrite || self.my_finish_date.is_none() {
            self.my_finish_date = Some(date);
        }
    }

    pub fn has_folder(&self) -> bool {
        self.folder.as_ref().is_some_and(|f| !f.as_os_str().is_empty())
    }

    /// Synonyms as shown in the edit prompt
    pub fn synonyms_text(&self) -> String {
        self.user_synonyms.join("; ")
    }

    /// Replace user synonyms from `;`-separated text, dropping blanks and duplicates
    pub fn set_user_synonyms(&mut self, text: &str) {
        let mut synonyms: Vec<String> = Vec::new();
        for synonym in text.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            if !synonyms.iter().any(|s| s == synonym) {
                synonyms.push(synonym.to_string());
            }
        }
        self.user_synonyms = synonyms;
    }

    pub fn end_watching(&mut self) {
        self.playing = false;
    }

    /// Highest episode a random pick may land on: the total, or one past the
    /// last watched episode when the total is unknown
    pub fn random_episode_ceiling(&self) -> i32 {
        if self.episode_count > 0 {
            self.episode_count
        } else {
            self.my_last_watched_episode.saturating_add(1).max(1)
        }
    }

    /// Build the queue event for watching up to `number`.
    ///
    /// Reaching the final episode completes the title; starting a title that
    /// was planned or unset moves it to watching.
    pub fn episode_event(&self, number: i32) -> EventItem {
        let mut item = EventItem::new(self.id, EventMode::EpisodeUpdate);
        item.episode = Some(number);

        if self.episode_count > 0 && number == self.episode_count {
            item.status = Some(MyStatus::Completed);
            item.mode = EventMode::AnimeEdit;
        } else if number > 0
            && matches!(self.my_status, None | Some(MyStatus::PlanToWatch))
        {
            item.status = Some(MyStatus::Watching);
            item.mode = EventMode::AnimeEdit;
        }
        item
    }
}

/// Check an episode number against a title's total (zero total means unbounded)
pub fn is_valid_episode(number: i32, total: i32) -> bool {
    number >= 0 && (total == 0 || number <= total)
}

/// Kind of remote update carried by a queued event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventMode {
    AnimeAdd,
    AnimeDelete,
    AnimeEdit,
    StatusUpdate,
    ScoreUpdate,
    TagUpdate,
    EpisodeUpdate,
}

/// A pending change to be pushed to MyAnimeList
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub anime_id: i32,
    pub mode: EventMode,
    pub episode: Option<i32>,
    pub status: Option<MyStatus>,
    pub score: Option<i32>,
    pub tags: Option<String>,
}

impl EventItem {
    pub fn new(anime_id: i32, mode: EventMode) -> Self {
        EventItem {
            anime_id,
            mode,
            episode: None,
            status: None,
            score: None,
            tags: None,
        }
    }
}

/// Anime list filters
#[derive(Clone, Debug, PartialEq)]
pub struct AnimeFilters {
    /// Airing, finished, not yet aired
    pub status: [bool; 3],
    /// TV, OVA, movie, special, ONA, music
    pub series_type: [bool; 6],
    pub text: String,
}

impl Default for AnimeFilters {
    fn default() -> Self {
        AnimeFilters {
            status: [true; 3],
            series_type: [true; 6],
            text: String::new(),
        }
    }
}

impl AnimeFilters {
    pub fn reset(&mut self) {
        *self = AnimeFilters::default();
    }

    pub fn matches(&self, item: &AnimeItem) -> bool {
        if let Some(index) = item.airing_status.filter_index() {
            if !self.status[index] {
                return false;
            }
        }
        if !self.series_type[item.series_type.filter_index()] {
            return false;
        }
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        item.title.to_lowercase().contains(&needle)
            || item
                .user_synonyms
                .iter()
                .any(|s| s.to_lowercase().contains(&needle))
    }
}

/// What the recognition engine currently believes is playing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecognizedEpisode {
    #[default]
    Unknown,
    NotInList,
    Anime(i32),
}

impl RecognizedEpisode {
    pub fn anime_id(&self) -> Option<i32> {
        match self {
            RecognizedEpisode::Anime(id) => Some(*id),
            _ => None,
        }
    }
}
