//! # AnimeDesk
//!
//! Action router for a lightweight MyAnimeList desktop client.
//!
//! Menus, hotkeys and scripts describe commands as short strings such as
//! `Settings(0)` or `AddToListAs(2)`. This crate parses them into typed
//! [`Action`]s and runs them against the application state through a set of
//! collaborator traits (window system, prompts, event queue, MyAnimeList
//! client, media library and friends).
//!
//! ## Architecture
//! - Action layer - verb/body split and the typed `Action` enum
//! - App layer - `AppState`, the `Router` and its per-family handlers
//! - Services - collaborator traits; `headless` has console implementations

pub mod action;
pub mod app;
pub mod constants;
pub mod database;
pub mod headless;
pub mod messages;
pub mod models;
pub mod season;
pub mod services;
pub mod settings;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use action::{Action, ParseActionError, WindowKind};
pub use app::{AppState, Router, RouterActor};
pub use database::AnimeDatabase;
pub use messages::SyncResponse;
pub use models::{AnimeItem, EventItem, EventMode, MyStatus};
pub use services::Services;
pub use settings::Settings;
pub use storage::Storage;
