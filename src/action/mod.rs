//! Action text parsing and the typed action vocabulary

pub mod kind;
pub mod parser;

pub use kind::{
    Action, AnnounceChannel, InfoPage, ParseActionError, SearchBarMode, SearchMode, SettingsPage,
    WindowKind,
};
pub use parser::{split_action, to_int};
