//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Application name, used as the title of message boxes
pub const APP_TITLE: &str = "AnimeDesk";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory under the user's home where data is kept
pub const CONFIG_DIR_NAME: &str = ".animedesk";

/// Settings file inside the config directory
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Anime list file inside the config directory
pub const ANIME_LIST_FILE: &str = "anime_list.yaml";

/// Sub-directory holding season data files
pub const SEASONS_DIR: &str = "seasons";

/// Log file written by the console binary
pub const LOG_FILE: &str = "animedesk.log";

/// Characters stripped from a title before it is substituted into a URL
pub const URL_TITLE_STRIP_CHARS: &str = "_!?.,:;~+";

/// Highest score a list entry may carry
pub const MAX_SCORE: i32 = 10;

/// Episode length assumed when the database has none
pub const DEFAULT_EPISODE_LENGTH: u32 = 24;

/// MyAnimeList pages opened in the browser
pub const MAL_PANEL_URL: &str = "https://myanimelist.net/panel.php";
pub const MAL_PROFILE_URL: &str = "https://myanimelist.net/profile/";
pub const MAL_HISTORY_URL: &str = "https://myanimelist.net/history/";
pub const MAL_ANIME_URL: &str = "https://myanimelist.net/anime/";
