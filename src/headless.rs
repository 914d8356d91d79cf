//! Console collaborators for running the router without a window system.
//!
//! Windows are tracked by kind and reported on stdout, prompts answer from
//! `--yes` and queued answer lines, and the MyAnimeList client serves the
//! list saved on disk.

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use regex::Regex;

use crate::action::{AnnounceChannel, InfoPage, SearchBarMode, SettingsPage, WindowKind};
use crate::messages::SyncResponse;
use crate::models::{AnimeItem, EventItem, MyStatus};
use crate::season::SeasonItem;
use crate::services::{
    Announcer, EpisodeCheck, EpisodeScan, EventQueue, FeedAggregator, FolderMonitor, InputRequest,
    Launcher, ListScope, MalClient, MediaLibrary, MessageIcon, Progress, Prompts, Services, Ui,
};
use crate::settings::Account;
use crate::storage::Storage;

/// File extensions treated as episodes
const VIDEO_EXTENSIONS: &[&str] = &["avi", "mkv", "mp4", "ogm", "rm", "rmvb", "webm", "wmv"];

/// Build the full set of console collaborators
pub fn services(storage: Storage, assume_yes: bool, answers: PromptAnswers) -> Services {
    Services {
        ui: Box::new(ConsoleUi::default()),
        prompts: Box::new(ConsolePrompts::new(assume_yes, answers)),
        queue: Box::new(MemoryQueue::default()),
        mal: Box::new(OfflineClient::new(storage)),
        announcer: Box::new(LogAnnouncer),
        monitor: Box::new(LogMonitor),
        launcher: Box::new(SystemLauncher),
        library: Box::new(DiskLibrary),
        feeds: Box::new(NoFeeds),
    }
}

// ============================================================================
// Window system
// ============================================================================

#[derive(Default)]
pub struct ConsoleUi {
    open: HashSet<WindowKind>,
    search_text: String,
}

impl Ui for ConsoleUi {
    fn is_open(&self, window: WindowKind) -> bool {
        self.open.contains(&window)
    }

    fn create(&mut self, window: WindowKind, parent: Option<WindowKind>, modal: bool) {
        tracing::debug!(?window, ?parent, modal, "Create window");
        self.open.insert(window);
        println!("[window] {:?} opened", window);
    }

    fn activate(&mut self, window: WindowKind) {
        println!("[window] {:?} activated", window);
    }

    fn destroy(&mut self, window: WindowKind) {
        self.open.remove(&window);
        println!("[window] {:?} closed", window);
    }

    fn change_status(&mut self, text: &str) {
        println!("[status] {}", text);
    }

    fn clear_status(&mut self) {}

    fn enable_input(&mut self, enabled: bool) {
        tracing::debug!(enabled, "Input");
    }

    fn set_login_button(&mut self, logged_in: bool) {
        let label = if logged_in { "online" } else { "offline" };
        println!("[session] {}", label);
    }

    fn refresh_menubar(&mut self) {}

    fn update_tip(&mut self) {}

    fn refresh_list(&mut self, scope: ListScope, items: &[&AnimeItem]) {
        tracing::debug!(?scope, count = items.len(), "Refresh list");
        println!("[list] {} titles", items.len());
        for item in items {
            let status = item.my_status.as_ref().map_or("-", |s| s.as_str());
            println!(
                "  {:>6}  {}  {}/{}  {}",
                item.id, item.title, item.my_last_watched_episode, item.episode_count, status
            );
        }
    }

    fn refresh_tabs(&mut self, status: MyStatus) {
        tracing::debug!(status = status.as_str(), "Refresh tabs");
    }

    fn search_text(&self) -> String {
        self.search_text.clone()
    }

    fn set_search_text(&mut self, text: &str) -> bool {
        self.search_text = text.to_string();
        false
    }

    fn set_search_mode(&mut self, mode: &SearchBarMode) {
        println!("[search] {}", mode.cue_text);
    }

    fn set_progress(&mut self, progress: Progress) {
        if let Progress::Value { done, total } = progress {
            tracing::trace!(done, total, "Progress");
        }
    }

    fn refresh_filters(&mut self) {}

    fn load_anime(&mut self, anime_id: Option<i32>, page: InfoPage) {
        tracing::debug!(?anime_id, ?page, "Load anime");
    }

    fn set_settings_page(&mut self, page: SettingsPage) {
        println!("[settings] {:?}", page);
    }

    fn search_anime(&mut self, query: &str) {
        println!("[search] Searching MyAnimeList for \"{}\"", query);
    }

    fn refresh_search_results(&mut self) {}

    fn set_torrent_status(&mut self, text: &str) {
        println!("[torrents] {}", text);
    }

    fn refresh_season_data(&mut self, anime_id: Option<i32>, download: bool) {
        tracing::debug!(?anime_id, download, "Refresh season data");
    }

    fn refresh_season_list(&mut self, groups: &[(String, Vec<&SeasonItem>)]) {
        for (label, items) in groups {
            println!("[season] {} ({})", label, items.len());
            for item in items {
                println!("  {:>6}  {}", item.anime_id, item.title);
            }
        }
    }

    fn refresh_season_status(&mut self) {}

    fn refresh_season_toolbar(&mut self) {}
}

// ============================================================================
// Prompts
// ============================================================================

/// Answers queued ahead of the prompts that will take them, shared between
/// the stdin reader and the prompts
#[derive(Clone, Debug, Default)]
pub struct PromptAnswers(Arc<Mutex<VecDeque<String>>>);

impl PromptAnswers {
    pub fn push(&self, answer: impl Into<String>) {
        let mut answers = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        answers.push_back(answer.into());
    }

    pub fn pop(&self) -> Option<String> {
        let mut answers = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        answers.pop_front()
    }
}

/// Stdin carries actions, so prompts cannot ask. Confirmations follow
/// `assume_yes`; inputs and folder pickers take the next queued answer and
/// are cancelled when there is none.
pub struct ConsolePrompts {
    assume_yes: bool,
    answers: PromptAnswers,
}

impl ConsolePrompts {
    pub fn new(assume_yes: bool, answers: PromptAnswers) -> Self {
        ConsolePrompts { assume_yes, answers }
    }
}

impl Prompts for ConsolePrompts {
    fn message(&mut self, title: &str, text: &str, icon: MessageIcon) {
        let tag = match icon {
            MessageIcon::Information => "info",
            MessageIcon::Error => "error",
        };
        println!("[{}] {}\n{}", tag, title, text);
    }

    fn confirm(&mut self, title: &str, instruction: &str, _content: &str) -> bool {
        let answer = if self.assume_yes { "yes" } else { "no" };
        println!("[confirm] {}: {} ({})", title, instruction, answer);
        self.assume_yes
    }

    fn input(&mut self, request: &InputRequest) -> Option<String> {
        let answer = self.answers.pop();
        match &answer {
            Some(text) => println!("[input] {}: {}", request.title, text),
            None => tracing::debug!(title = %request.title, "Input prompt cancelled"),
        }
        answer
    }

    fn browse_folder(&mut self, title: &str) -> Option<PathBuf> {
        let Some(answer) = self.answers.pop() else {
            tracing::debug!(title, "Folder prompt cancelled");
            return None;
        };
        println!("[folder] {}: {}", title, answer);
        Some(PathBuf::from(answer))
    }
}

// ============================================================================
// Event queue
// ============================================================================

#[derive(Default)]
pub struct MemoryQueue {
    items: Vec<EventItem>,
}

impl EventQueue for MemoryQueue {
    fn add(&mut self, item: EventItem) {
        tracing::info!(anime_id = item.anime_id, mode = ?item.mode, "Queued change");
        self.items.push(item);
    }

    fn pending(&self) -> Vec<EventItem> {
        self.items.clone()
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn check(&mut self) {
        tracing::info!(count = self.items.len(), "Queued changes kept until online");
    }

    fn show(&mut self) {
        println!("[queue] {} pending change(s)", self.items.len());
        for item in &self.items {
            println!("  #{} {:?}", item.anime_id, item.mode);
        }
    }
}

// ============================================================================
// MyAnimeList
// ============================================================================

/// Session client that never leaves the machine: the list is read back from
/// storage and logging in only checks that credentials are present
pub struct OfflineClient {
    storage: Storage,
    responses: Vec<SyncResponse>,
}

impl OfflineClient {
    pub fn new(storage: Storage) -> Self {
        OfflineClient {
            storage,
            responses: Vec::new(),
        }
    }
}

impl MalClient for OfflineClient {
    fn login(&mut self, account: &Account) -> bool {
        let response = if account.has_credentials() {
            SyncResponse::LoginSucceeded {
                user: account.user.clone(),
            }
        } else {
            SyncResponse::LoginFailed {
                message: "Please set your user name and password first.".to_string(),
            }
        };
        self.responses.push(response);
        true
    }

    fn get_list(&mut self, user: &str, login_after: bool) -> bool {
        let response = match self.storage.load_anime_list() {
            Ok(db) => SyncResponse::ListRefreshed {
                user: user.to_string(),
                items: db.iter().filter(|item| item.in_list).cloned().collect(),
                login_after,
            },
            Err(e) => SyncResponse::ListFailed {
                message: format!("Could not read the anime list: {:#}", e),
            },
        };
        self.responses.push(response);
        true
    }

    fn clear_cookies(&mut self) {}

    fn take_responses(&mut self) -> Vec<SyncResponse> {
        std::mem::take(&mut self.responses)
    }
}

// ============================================================================
// Announcements, folder monitor, feeds
// ============================================================================

pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&mut self, channel: AnnounceChannel, force: bool) {
        tracing::info!(?channel, force, "Announce");
    }
}

pub struct LogMonitor;

impl FolderMonitor for LogMonitor {
    fn enable(&mut self) {
        tracing::info!("Folder monitor enabled");
    }
}

pub struct NoFeeds;

impl FeedAggregator for NoFeeds {
    fn has_link_feed(&self) -> bool {
        false
    }

    fn check_link_feed(&mut self, url: &str) {
        tracing::debug!(url, "No link feed configured");
    }
}

// ============================================================================
// Launcher
// ============================================================================

/// Opens paths and links with the desktop's default handler
pub struct SystemLauncher;

fn opener() -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    }
}

fn spawn_opener(target: &std::ffi::OsStr) -> bool {
    let result = opener()
        .arg(target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    match result {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, launch = ?target, "Could not launch");
            false
        }
    }
}

impl Launcher for SystemLauncher {
    fn execute(&mut self, path: &Path) -> bool {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Nothing to launch");
            return false;
        }
        spawn_opener(path.as_os_str())
    }

    fn open_link(&mut self, url: &str) {
        println!("[link] {}", url);
        spawn_opener(std::ffi::OsStr::new(url));
    }
}

// ============================================================================
// Media library
// ============================================================================

/// Finds anime folders under the root folders and episodes inside them
pub struct DiskLibrary;

/// Lowercase letters and digits only, for loose title comparison
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Guess the episode number from a file name.
///
/// An `E`, `Ep`, `Episode`, `S01E` or ` - ` prefix marks the episode; the
/// leftmost one wins, so later title numbers do not. Without a prefix a bare
/// number at the end of the name (before any bracketed tags) is taken.
/// Version suffixes like `v2` are ignored and resolutions like `720p` never
/// match.
pub fn episode_number(stem: &str) -> Option<i32> {
    static EPISODE_RE: OnceLock<Regex> = OnceLock::new();
    let episode_re = EPISODE_RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:\bs\d{1,2}e|\bepisode\s?|\bep?\.?\s?|\s-\s)(\d{1,3})(?:v\d+)?\b|(?:^|[\s_.])(\d{1,3})(?:v\d+)?(?:\s*[\[(][^\])]*[\])])*\s*$",
        )
        .unwrap()
    });

    let caps = episode_re.captures(stem)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .and_then(|m| m.as_str().parse().ok())
}

fn is_video(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| VIDEO_EXTENSIONS.contains(&e.to_lowercase().as_str()))
}

/// Video files in a folder with the episode each one holds
fn episode_files(folder: &Path, item: &AnimeItem) -> Vec<(i32, PathBuf)> {
    let Ok(entries) = fs::read_dir(folder) else {
        return Vec::new();
    };
    let mut files = Vec::new();
    for path in entries.flatten().map(|e| e.path()) {
        if !path.is_file() || !is_video(&path) {
            continue;
        }
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        // A lone file in a single-episode title's folder is that episode
        let number = episode_number(stem).or((item.episode_count == 1).then_some(1));
        if let Some(number) = number {
            files.push((number, path));
        }
    }
    files.sort();
    files
}

impl MediaLibrary for DiskLibrary {
    fn find_folder(&mut self, item: &AnimeItem, roots: &[PathBuf]) -> Option<PathBuf> {
        let mut titles = vec![normalize(&item.title)];
        titles.extend(item.user_synonyms.iter().map(|s| normalize(s)));
        titles.retain(|t| !t.is_empty());

        for root in roots {
            let Ok(entries) = fs::read_dir(root) else {
                tracing::debug!(root = %root.display(), "Unreadable root folder");
                continue;
            };
            for path in entries.flatten().map(|e| e.path()) {
                if !path.is_dir() {
                    continue;
                }
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                let name = normalize(name);
                if titles.iter().any(|t| name.contains(t.as_str())) {
                    tracing::debug!(anime_id = item.id, folder = %path.display(), "Folder found");
                    return Some(path);
                }
            }
        }
        None
    }

    fn find_episode(&mut self, item: &AnimeItem, folder: &Path, episode: i32) -> Option<PathBuf> {
        episode_files(folder, item)
            .into_iter()
            .find(|(number, _)| *number == episode)
            .map(|(_, path)| path)
    }

    fn scan_episodes(
        &mut self,
        item: &AnimeItem,
        roots: &[PathBuf],
        search_folder: bool,
        check: EpisodeCheck,
    ) -> EpisodeScan {
        let mut scan = EpisodeScan::default();
        let folder = match &item.folder {
            Some(folder) if item.has_folder() => Some(folder.clone()),
            _ if search_folder => {
                scan.folder = self.find_folder(item, roots);
                scan.folder.clone()
            }
            _ => None,
        };
        let Some(folder) = folder else {
            return scan;
        };

        let next = item.my_last_watched_episode.saturating_add(1);
        let mut available: Vec<i32> = episode_files(&folder, item)
            .into_iter()
            .map(|(number, _)| number)
            .filter(|number| match check {
                EpisodeCheck::All => true,
                EpisodeCheck::Next => *number == next,
            })
            .collect();
        available.dedup();
        scan.available = available;
        scan
    }
}
