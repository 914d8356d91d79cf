//! Recording fakes of the router's collaborators, for tests

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;

use crate::action::{AnnounceChannel, InfoPage, SearchBarMode, SettingsPage, WindowKind};
use crate::app::{AppState, Router};
use crate::database::AnimeDatabase;
use crate::messages::SyncResponse;
use crate::models::{AnimeItem, EventItem, MyStatus};
use crate::season::SeasonItem;
use crate::services::{
    Announcer, EpisodeCheck, EpisodeScan, EventQueue, FeedAggregator, FolderMonitor, InputRequest,
    Launcher, ListScope, MalClient, MediaLibrary, MessageIcon, Progress, Prompts, Services, Ui,
};
use crate::settings::{Account, Settings};
use crate::storage::Storage;

/// Everything the fakes saw, plus the answers they give
#[derive(Default)]
pub(crate) struct Journal {
    // Ui
    pub open: HashSet<WindowKind>,
    pub created: Vec<WindowKind>,
    pub activated: Vec<WindowKind>,
    pub statuses: Vec<String>,
    pub input_enabled: Option<bool>,
    pub login_button: Option<bool>,
    pub refreshed: Vec<ListScope>,
    /// Ids handed over by the last list refresh
    pub listed: Vec<i32>,
    pub filter_refreshes: usize,
    pub search_text: String,
    pub searches: Vec<String>,
    pub settings_page: Option<SettingsPage>,
    pub loaded_anime: Vec<(Option<i32>, InfoPage)>,
    pub torrent_status: Vec<String>,
    pub season_refreshes: usize,
    /// Group labels and title ids of the last season list refresh
    pub season_groups: Vec<(String, Vec<i32>)>,
    pub progress: Vec<Progress>,

    // Prompts
    pub messages: Vec<(String, String, MessageIcon)>,
    pub confirmations: Vec<String>,
    pub confirm_answer: bool,
    pub input_answer: Option<String>,
    pub browse_answer: Option<PathBuf>,

    // Queue
    pub events: Vec<EventItem>,
    pub queue_checks: usize,

    // MyAnimeList
    pub logins: usize,
    pub list_requests: Vec<(String, bool)>,
    pub cookies_cleared: bool,
    pub mal_offline: bool,
    pub responses: Vec<SyncResponse>,

    pub announcements: Vec<(AnnounceChannel, bool)>,
    pub monitor_enabled: bool,

    // Launcher
    pub launched: Vec<PathBuf>,
    pub links: Vec<String>,

    // Media library
    pub library_folder: Option<PathBuf>,
    pub episode_files: HashMap<(i32, i32), PathBuf>,
    pub episode_lookups: Vec<i32>,
    pub scans: Vec<(i32, bool, EpisodeCheck)>,

    // Feeds
    pub has_link_feed: bool,
    pub feed_checks: Vec<String>,
}

pub(crate) type SharedJournal = Rc<RefCell<Journal>>;

/// One fake standing in for every collaborator
pub(crate) struct Fake(SharedJournal);

impl Ui for Fake {
    fn is_open(&self, window: WindowKind) -> bool {
        self.0.borrow().open.contains(&window)
    }
    fn create(&mut self, window: WindowKind, _parent: Option<WindowKind>, _modal: bool) {
        let mut j = self.0.borrow_mut();
        j.open.insert(window);
        j.created.push(window);
    }
    fn activate(&mut self, window: WindowKind) {
        self.0.borrow_mut().activated.push(window);
    }
    fn destroy(&mut self, window: WindowKind) {
        self.0.borrow_mut().open.remove(&window);
    }
    fn change_status(&mut self, text: &str) {
        self.0.borrow_mut().statuses.push(text.to_string());
    }
    fn clear_status(&mut self) {
        self.0.borrow_mut().statuses.push(String::new());
    }
    fn enable_input(&mut self, enabled: bool) {
        self.0.borrow_mut().input_enabled = Some(enabled);
    }
    fn set_login_button(&mut self, logged_in: bool) {
        self.0.borrow_mut().login_button = Some(logged_in);
    }
    fn refresh_menubar(&mut self) {}
    fn update_tip(&mut self) {}
    fn refresh_list(&mut self, scope: ListScope, items: &[&AnimeItem]) {
        let mut j = self.0.borrow_mut();
        j.refreshed.push(scope);
        j.listed = items.iter().map(|item| item.id).collect();
    }
    fn refresh_tabs(&mut self, _status: MyStatus) {}
    fn search_text(&self) -> String {
        self.0.borrow().search_text.clone()
    }
    fn set_search_text(&mut self, text: &str) -> bool {
        self.0.borrow_mut().search_text = text.to_string();
        false
    }
    fn set_search_mode(&mut self, _mode: &SearchBarMode) {}
    fn set_progress(&mut self, progress: Progress) {
        self.0.borrow_mut().progress.push(progress);
    }
    fn refresh_filters(&mut self) {
        self.0.borrow_mut().filter_refreshes += 1;
    }
    fn load_anime(&mut self, anime_id: Option<i32>, page: InfoPage) {
        self.0.borrow_mut().loaded_anime.push((anime_id, page));
    }
    fn set_settings_page(&mut self, page: SettingsPage) {
        self.0.borrow_mut().settings_page = Some(page);
    }
    fn search_anime(&mut self, query: &str) {
        self.0.borrow_mut().searches.push(query.to_string());
    }
    fn refresh_search_results(&mut self) {}
    fn set_torrent_status(&mut self, text: &str) {
        self.0.borrow_mut().torrent_status.push(text.to_string());
    }
    fn refresh_season_data(&mut self, _anime_id: Option<i32>, _download: bool) {
        self.0.borrow_mut().season_refreshes += 1;
    }
    fn refresh_season_list(&mut self, groups: &[(String, Vec<&SeasonItem>)]) {
        let mut j = self.0.borrow_mut();
        j.season_refreshes += 1;
        j.season_groups = groups
            .iter()
            .map(|(label, items)| (label.clone(), items.iter().map(|i| i.anime_id).collect()))
            .collect();
    }
    fn refresh_season_status(&mut self) {}
    fn refresh_season_toolbar(&mut self) {}
}

impl Prompts for Fake {
    fn message(&mut self, title: &str, text: &str, icon: MessageIcon) {
        self.0
            .borrow_mut()
            .messages
            .push((title.to_string(), text.to_string(), icon));
    }
    fn confirm(&mut self, _title: &str, instruction: &str, _content: &str) -> bool {
        let mut j = self.0.borrow_mut();
        j.confirmations.push(instruction.to_string());
        j.confirm_answer
    }
    fn input(&mut self, _request: &InputRequest) -> Option<String> {
        self.0.borrow().input_answer.clone()
    }
    fn browse_folder(&mut self, _title: &str) -> Option<PathBuf> {
        self.0.borrow().browse_answer.clone()
    }
}

impl EventQueue for Fake {
    fn add(&mut self, item: EventItem) {
        self.0.borrow_mut().events.push(item);
    }
    fn pending(&self) -> Vec<EventItem> {
        self.0.borrow().events.clone()
    }
    fn check(&mut self) {
        self.0.borrow_mut().queue_checks += 1;
    }
    fn show(&mut self) {}
}

impl MalClient for Fake {
    fn login(&mut self, _account: &Account) -> bool {
        let mut j = self.0.borrow_mut();
        j.logins += 1;
        !j.mal_offline
    }
    fn get_list(&mut self, user: &str, login_after: bool) -> bool {
        let mut j = self.0.borrow_mut();
        j.list_requests.push((user.to_string(), login_after));
        !j.mal_offline
    }
    fn clear_cookies(&mut self) {
        self.0.borrow_mut().cookies_cleared = true;
    }
    fn take_responses(&mut self) -> Vec<SyncResponse> {
        std::mem::take(&mut self.0.borrow_mut().responses)
    }
}

impl Announcer for Fake {
    fn announce(&mut self, channel: AnnounceChannel, force: bool) {
        self.0.borrow_mut().announcements.push((channel, force));
    }
}

impl FolderMonitor for Fake {
    fn enable(&mut self) {
        self.0.borrow_mut().monitor_enabled = true;
    }
}

impl Launcher for Fake {
    fn execute(&mut self, path: &Path) -> bool {
        self.0.borrow_mut().launched.push(path.to_path_buf());
        true
    }
    fn open_link(&mut self, url: &str) {
        self.0.borrow_mut().links.push(url.to_string());
    }
}

impl MediaLibrary for Fake {
    fn find_folder(&mut self, _item: &AnimeItem, _roots: &[PathBuf]) -> Option<PathBuf> {
        self.0.borrow().library_folder.clone()
    }
    fn find_episode(&mut self, item: &AnimeItem, _folder: &Path, episode: i32) -> Option<PathBuf> {
        let mut j = self.0.borrow_mut();
        j.episode_lookups.push(episode);
        j.episode_files.get(&(item.id, episode)).cloned()
    }
    fn scan_episodes(
        &mut self,
        item: &AnimeItem,
        _roots: &[PathBuf],
        search_folder: bool,
        check: EpisodeCheck,
    ) -> EpisodeScan {
        let mut j = self.0.borrow_mut();
        j.scans.push((item.id, search_folder, check));
        EpisodeScan {
            folder: if search_folder { j.library_folder.clone() } else { None },
            available: Vec::new(),
        }
    }
}

impl FeedAggregator for Fake {
    fn has_link_feed(&self) -> bool {
        self.0.borrow().has_link_feed
    }
    fn check_link_feed(&mut self, url: &str) {
        self.0.borrow_mut().feed_checks.push(url.to_string());
    }
}

pub(crate) fn services(journal: &SharedJournal) -> Services {
    let fake = || Box::new(Fake(Rc::clone(journal)));
    Services {
        ui: fake(),
        prompts: fake(),
        queue: fake(),
        mal: fake(),
        announcer: fake(),
        monitor: fake(),
        launcher: fake(),
        library: fake(),
        feeds: fake(),
    }
}

/// A router backed by fakes, with storage in a temporary directory
pub(crate) struct TestRouter {
    pub router: Router,
    pub journal: SharedJournal,
    pub dir: TempDir,
}

impl TestRouter {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let journal: SharedJournal = Rc::new(RefCell::new(Journal::default()));
        let state = AppState::new(
            Storage::with_dir(dir.path()),
            Settings::default(),
            AnimeDatabase::new(),
        );
        let router = Router::new(state, services(&journal)).with_seed(7);
        TestRouter { router, journal, dir }
    }

    /// Add a title to the database and select it
    pub fn select(&mut self, item: AnimeItem) {
        let id = item.id;
        let database = &mut self.router.state_mut().database;
        database.update_item(item);
        database.set_current(Some(id));
    }

    pub fn run(&mut self, action: &str) {
        self.router.execute_str(action);
    }

    pub fn journal(&self) -> std::cell::Ref<'_, Journal> {
        self.journal.borrow()
    }

    pub fn journal_mut(&self) -> std::cell::RefMut<'_, Journal> {
        self.journal.borrow_mut()
    }
}
