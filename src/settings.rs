use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which MyAnimeList API the client talks to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalApi {
    /// Official API, every request needs credentials
    #[default]
    Official,
    Unofficial,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub api: MalApi,
}

impl Account {
    pub fn has_credentials(&self) -> bool {
        !self.user.is_empty() && !self.password.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Folders {
    /// Library roots searched for anime folders
    #[serde(default)]
    pub root: Vec<PathBuf>,
    #[serde(default)]
    pub watch_enabled: bool,
}

/// What the progress column of the list shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressMode {
    /// Episodes found on disk
    AvailableEpisodes,
    #[default]
    WatchedEpisodes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSettings {
    #[serde(default)]
    pub progress_mode: ProgressMode,
}

/// Program settings persisted between runs
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub account: Account,
    #[serde(default)]
    pub folders: Folders,
    #[serde(default)]
    pub list: ListSettings,
}
