//! Collaborators the router drives.
//!
//! The router never talks to a window system, the network or the file system
//! directly; it goes through these traits. The console binary provides
//! implementations in `headless`, tests provide recording fakes.

use std::path::{Path, PathBuf};

use crate::action::{AnnounceChannel, InfoPage, SearchBarMode, SettingsPage, WindowKind};
use crate::messages::SyncResponse;
use crate::models::{AnimeItem, EventItem, MyStatus};
use crate::season::SeasonItem;
use crate::settings::Account;

/// Which part of the main list a refresh targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListScope {
    /// Whatever tab is showing
    Current,
    /// The tab holding every status
    All,
    Status(MyStatus),
}

/// Taskbar progress indicator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Normal,
    Value { done: usize, total: usize },
    Off,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageIcon {
    Information,
    Error,
}

/// A single-line input prompt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputRequest {
    pub title: String,
    pub info: String,
    pub text: String,
    /// Inclusive bounds when the input is numeric
    pub numeric: Option<(i32, i32)>,
}

/// How much of a title's episode range a scan looks at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpisodeCheck {
    /// Every episode, for the "available episodes" progress mode
    All,
    /// Only the episode after the last watched one
    Next,
}

/// Result of scanning the disk for a title
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EpisodeScan {
    /// Folder found during the scan, when a folder search was allowed
    pub folder: Option<PathBuf>,
    pub available: Vec<i32>,
}

/// Window system: window lifecycle, the main window and dialog refresh hooks
pub trait Ui {
    fn is_open(&self, window: WindowKind) -> bool;
    fn create(&mut self, window: WindowKind, parent: Option<WindowKind>, modal: bool);
    fn activate(&mut self, window: WindowKind);
    fn destroy(&mut self, window: WindowKind);

    fn change_status(&mut self, text: &str);
    fn clear_status(&mut self);
    fn enable_input(&mut self, enabled: bool);
    fn set_login_button(&mut self, logged_in: bool);
    fn refresh_menubar(&mut self);
    fn update_tip(&mut self);
    /// Show the titles of a list tab, already filtered
    fn refresh_list(&mut self, scope: ListScope, items: &[&AnimeItem]);
    fn refresh_tabs(&mut self, status: MyStatus);
    fn search_text(&self) -> String;
    /// Returns true when changing the text already refreshed the list
    fn set_search_text(&mut self, text: &str) -> bool;
    fn set_search_mode(&mut self, mode: &SearchBarMode);
    fn set_progress(&mut self, progress: Progress);

    fn refresh_filters(&mut self);
    fn load_anime(&mut self, anime_id: Option<i32>, page: InfoPage);
    fn set_settings_page(&mut self, page: SettingsPage);
    fn search_anime(&mut self, query: &str);
    fn refresh_search_results(&mut self);
    fn set_torrent_status(&mut self, text: &str);

    fn refresh_season_data(&mut self, anime_id: Option<i32>, download: bool);
    /// Show the season's titles in labelled groups, already sorted
    fn refresh_season_list(&mut self, groups: &[(String, Vec<&SeasonItem>)]);
    fn refresh_season_status(&mut self);
    fn refresh_season_toolbar(&mut self);
}

/// Modal prompts
pub trait Prompts {
    fn message(&mut self, title: &str, text: &str, icon: MessageIcon);
    /// Yes/no question; true for yes
    fn confirm(&mut self, title: &str, instruction: &str, content: &str) -> bool;
    /// None when the prompt was cancelled
    fn input(&mut self, request: &InputRequest) -> Option<String>;
    fn browse_folder(&mut self, title: &str) -> Option<PathBuf>;
}

/// Queue of changes waiting to be pushed to MyAnimeList
pub trait EventQueue {
    fn add(&mut self, item: EventItem);
    /// Events queued for the current user
    fn pending(&self) -> Vec<EventItem>;
    fn item_count(&self) -> usize {
        self.pending().len()
    }
    /// Start processing the queue
    fn check(&mut self);
    fn show(&mut self);
}

/// MyAnimeList session client. Requests complete asynchronously and are
/// reported through `take_responses`.
pub trait MalClient {
    /// Returns false when the request could not be started
    fn login(&mut self, account: &Account) -> bool;
    /// Returns false when the request could not be started
    fn get_list(&mut self, user: &str, login_after: bool) -> bool;
    fn clear_cookies(&mut self);
    fn take_responses(&mut self) -> Vec<SyncResponse> {
        Vec::new()
    }
}

pub trait Announcer {
    fn announce(&mut self, channel: AnnounceChannel, force: bool);
}

pub trait FolderMonitor {
    fn enable(&mut self);
}

/// Opens files, folders and links with the desktop's default handler
pub trait Launcher {
    /// Returns false when nothing could be launched
    fn execute(&mut self, path: &Path) -> bool;
    fn open_link(&mut self, url: &str);
}

/// Locates anime folders and episode files on disk
pub trait MediaLibrary {
    fn find_folder(&mut self, item: &AnimeItem, roots: &[PathBuf]) -> Option<PathBuf>;
    fn find_episode(&mut self, item: &AnimeItem, folder: &Path, episode: i32) -> Option<PathBuf>;
    fn scan_episodes(
        &mut self,
        item: &AnimeItem,
        roots: &[PathBuf],
        search_folder: bool,
        check: EpisodeCheck,
    ) -> EpisodeScan;
}

/// RSS feed aggregator used for torrent searches
pub trait FeedAggregator {
    /// Whether a search-link feed is configured
    fn has_link_feed(&self) -> bool;
    fn check_link_feed(&mut self, url: &str);
}

/// Everything the router talks to
pub struct Services {
    pub ui: Box<dyn Ui>,
    pub prompts: Box<dyn Prompts>,
    pub queue: Box<dyn EventQueue>,
    pub mal: Box<dyn MalClient>,
    pub announcer: Box<dyn Announcer>,
    pub monitor: Box<dyn FolderMonitor>,
    pub launcher: Box<dyn Launcher>,
    pub library: Box<dyn MediaLibrary>,
    pub feeds: Box<dyn FeedAggregator>,
}
