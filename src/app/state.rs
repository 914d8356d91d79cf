//! App state - everything the router reads and writes between actions

use chrono::{Local, NaiveDate};

use crate::database::AnimeDatabase;
use crate::models::{AnimeFilters, RecognizedEpisode};
use crate::season::SeasonState;
use crate::settings::Settings;
use crate::stats::ListStats;
use crate::storage::Storage;

/// Main application state - pure data plus persistence helpers
pub struct AppState {
    // Session
    pub logged_in: bool,

    // Recognition
    pub recognition_enabled: bool,
    pub recognized: RecognizedEpisode,

    // List view
    pub filters: AnimeFilters,
    /// Search bar text filters the list instead of searching online
    pub filter_list_by_search: bool,

    // Data
    pub database: AnimeDatabase,
    pub settings: Settings,
    pub season: SeasonState,
    pub stats: ListStats,

    /// Cleared once the main window is gone
    pub running: bool,

    storage: Storage,
}

impl AppState {
    pub fn new(storage: Storage, settings: Settings, database: AnimeDatabase) -> Self {
        AppState {
            logged_in: false,
            recognition_enabled: true,
            recognized: RecognizedEpisode::Unknown,
            filters: AnimeFilters::default(),
            filter_list_by_search: true,
            database,
            settings,
            season: SeasonState::default(),
            stats: ListStats::default(),
            running: true,
            storage,
        }
    }

    /// Load settings and the anime list from storage. Unreadable files are
    /// logged and replaced by empty defaults.
    pub fn load(storage: Storage) -> Self {
        let settings = storage.load_settings().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not load settings, using defaults");
            Settings::default()
        });
        let database = storage.load_anime_list().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not load anime list");
            AnimeDatabase::new()
        });
        Self::new(storage, settings, database)
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn save_settings(&self) {
        if let Err(e) = self.storage.save_settings(&self.settings) {
            tracing::warn!(error = %e, "Could not save settings");
        }
    }

    pub fn save_list(&self) {
        if let Err(e) = self.storage.save_anime_list(&self.database) {
            tracing::warn!(error = %e, "Could not save anime list");
        }
    }

    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
