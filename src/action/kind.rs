//! Typed actions - one variant per verb, carrying its own payload

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::action::parser::{split_action, to_int};
use crate::models::MyStatus;
use crate::season::{SeasonGroup, SeasonSort};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("empty action")]
    Empty,

    #[error("unknown action: {0}")]
    UnknownVerb(String),

    #[error("invalid argument for {verb}: {body:?}")]
    InvalidPayload { verb: String, body: String },
}

/// Windows the router can show
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowKind {
    Main,
    About,
    Update,
    Filter,
    AnimeInfo,
    RecognitionTest,
    Season,
    Settings,
    Search,
    Torrents,
    FeedFilter,
    EventQueue,
}

/// Tab of the anime information window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoPage {
    SeriesInfo,
    MyInfo,
}

/// Pages of the settings window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsPage {
    #[default]
    Account,
    Update,
    Http,
    Messenger,
    Mirc,
    Skype,
    Twitter,
    FoldersRoot,
    FoldersSpecific,
    AppBehavior,
    AppConnection,
    AppInterface,
    AppList,
    Recognition,
    Torrents,
}

impl SettingsPage {
    const ALL: [SettingsPage; 15] = [
        SettingsPage::Account,
        SettingsPage::Update,
        SettingsPage::Http,
        SettingsPage::Messenger,
        SettingsPage::Mirc,
        SettingsPage::Skype,
        SettingsPage::Twitter,
        SettingsPage::FoldersRoot,
        SettingsPage::FoldersSpecific,
        SettingsPage::AppBehavior,
        SettingsPage::AppConnection,
        SettingsPage::AppInterface,
        SettingsPage::AppList,
        SettingsPage::Recognition,
        SettingsPage::Torrents,
    ];

    pub fn from_index(index: i32) -> Option<SettingsPage> {
        usize::try_from(index).ok().and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Third-party channels the current episode can be announced to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnnounceChannel {
    Http,
    Messenger,
    Mirc,
    Skype,
    Twitter,
}

/// Search bar target
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchMode {
    Mal,
    Torrent { url: String },
    Web { url: String },
}

/// Payload of `SetSearchMode`: menu index, mode and cue text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchBarMode {
    pub menu_index: i32,
    pub mode: SearchMode,
    pub cue_text: String,
}

/// Every action the router understands.
///
/// Fields that the text form cannot express (window parents, modality,
/// silent mode) take their defaults when parsed from a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    // Session
    Login,
    Logout { user: Option<String> },
    ToggleLogin,
    Synchronize { login_after: bool },
    ViewPanel,
    ViewProfile,
    ViewHistory,
    ViewAnimePage { anime_id: Option<i32> },

    // Launching
    Execute { path: String },
    Url { address: String },

    // Windows
    About,
    CheckUpdates,
    Exit,
    Filter,
    Info { anime_id: Option<i32> },
    MainDialog,
    RecognitionTest,
    SeasonBrowser,
    Settings { page: SettingsPage },
    Torrents,
    TorrentAddFilter { modal: bool, parent: Option<WindowKind> },

    // Search and misc
    SetSearchMode(SearchBarMode),
    ToggleListSearch,
    SaveSettings,
    SearchAnime { query: String },
    SearchTorrents { url: String },
    ShowListStats,
    CheckEventBuffer,
    ToggleRecognition,

    // List
    AddToListAs { status: MyStatus, anime_id: Option<i32> },
    EditAll { anime_id: Option<i32> },
    EditDelete,
    EditEpisode,
    EditScore { score: i32 },
    EditStatus { status: MyStatus },
    EditTags,
    EditTitles,

    // Folders
    AddFolder,
    CheckEpisodes { silent: bool, selected_only: bool },
    OpenFolder,
    SetFolder,

    // Playback
    PlayEpisode { number: i32 },
    PlayLast,
    PlayNext,
    PlayRandom { anime_id: Option<i32> },
    PlayRandomAnime,

    // Filters, 1-based indices as written in menus
    FilterReset,
    FilterStatus { index: i32 },
    FilterType { index: i32 },

    Announce { channel: AnnounceChannel, force: bool },

    // Season browser
    SeasonLoad { file: String },
    SeasonGroupBy(SeasonGroup),
    SeasonSortBy(SeasonSort),
    SeasonRefreshItemData { anime_id: Option<i32> },
}

/// Zero or empty means "no explicit id"
fn optional_id(body: &str) -> Option<i32> {
    match to_int(body) {
        0 => None,
        id => Some(id),
    }
}

fn optional_text(body: &str) -> Option<String> {
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}

fn parse_search_mode(body: &str) -> Option<SearchBarMode> {
    let parts: Vec<&str> = body.split(", ").collect();
    if parts.len() < 3 {
        return None;
    }
    let mode = match (parts[1], parts.get(3)) {
        ("MAL", _) => SearchMode::Mal,
        ("Torrent", Some(url)) => SearchMode::Torrent { url: url.to_string() },
        ("Web", Some(url)) => SearchMode::Web { url: url.to_string() },
        _ => return None,
    };
    Some(SearchBarMode {
        menu_index: to_int(parts[0]),
        mode,
        cue_text: parts[2].to_string(),
    })
}

impl Action {
    /// Build an action from an already split verb and body
    pub fn from_parts(verb: &str, body: &str) -> Result<Action, ParseActionError> {
        let invalid = || ParseActionError::InvalidPayload {
            verb: verb.to_string(),
            body: body.to_string(),
        };

        let action = match verb {
            "Login" => Action::Login,
            "Logout" => Action::Logout { user: optional_text(body) },
            "LoginLogout" | "ToggleLogin" => Action::ToggleLogin,
            "Synchronize" => Action::Synchronize { login_after: false },
            "ViewPanel" => Action::ViewPanel,
            "ViewProfile" => Action::ViewProfile,
            "ViewHistory" => Action::ViewHistory,
            "ViewAnimePage" => Action::ViewAnimePage { anime_id: optional_id(body) },

            "Execute" => Action::Execute { path: body.to_string() },
            "URL" => Action::Url { address: body.to_string() },

            "About" => Action::About,
            "CheckUpdates" => Action::CheckUpdates,
            "Exit" | "Quit" => Action::Exit,
            "Filter" => Action::Filter,
            "Info" => Action::Info { anime_id: optional_id(body) },
            "MainDialog" => Action::MainDialog,
            "RecognitionTest" => Action::RecognitionTest,
            "SeasonBrowser" => Action::SeasonBrowser,
            "Settings" => {
                let page = if body.is_empty() {
                    SettingsPage::default()
                } else {
                    SettingsPage::from_index(to_int(body)).ok_or_else(invalid)?
                };
                Action::Settings { page }
            }
            "Torrents" => Action::Torrents,
            "TorrentAddFilter" => Action::TorrentAddFilter { modal: false, parent: None },

            "SetSearchMode" => Action::SetSearchMode(parse_search_mode(body).ok_or_else(invalid)?),
            "ToggleListSearch" => Action::ToggleListSearch,
            "SaveSettings" => Action::SaveSettings,
            "SearchAnime" => Action::SearchAnime { query: body.to_string() },
            "SearchTorrents" => Action::SearchTorrents { url: body.to_string() },
            "ShowListStats" => Action::ShowListStats,
            "CheckEventBuffer" => Action::CheckEventBuffer,
            "ToggleRecognition" => Action::ToggleRecognition,

            "AddToListAs" => Action::AddToListAs {
                status: MyStatus::from_code(to_int(body)).ok_or_else(invalid)?,
                anime_id: None,
            },
            "EditAll" => Action::EditAll { anime_id: optional_id(body) },
            "EditDelete" => Action::EditDelete,
            "EditEpisode" => Action::EditEpisode,
            "EditScore" => Action::EditScore { score: to_int(body) },
            "EditStatus" => Action::EditStatus {
                status: MyStatus::from_code(to_int(body)).ok_or_else(invalid)?,
            },
            "EditTags" => Action::EditTags,
            "EditTitles" => Action::EditTitles,

            "AddFolder" => Action::AddFolder,
            "CheckEpisodes" => Action::CheckEpisodes {
                silent: false,
                selected_only: !body.is_empty(),
            },
            "OpenFolder" => Action::OpenFolder,
            "SetFolder" => Action::SetFolder,

            "PlayEpisode" => Action::PlayEpisode { number: to_int(body) },
            "PlayLast" => Action::PlayLast,
            "PlayNext" => Action::PlayNext,
            "PlayRandom" => Action::PlayRandom { anime_id: optional_id(body) },
            "PlayRandomAnime" => Action::PlayRandomAnime,

            "FilterReset" => Action::FilterReset,
            "FilterStatus" => Action::FilterStatus { index: to_int(body) },
            "FilterType" => Action::FilterType { index: to_int(body) },

            "AnnounceToHTTP" | "AnnounceToMessenger" | "AnnounceToMIRC" | "AnnounceToSkype"
            | "AnnounceToTwitter" => {
                let channel = match verb {
                    "AnnounceToHTTP" => AnnounceChannel::Http,
                    "AnnounceToMessenger" => AnnounceChannel::Messenger,
                    "AnnounceToMIRC" => AnnounceChannel::Mirc,
                    "AnnounceToSkype" => AnnounceChannel::Skype,
                    _ => AnnounceChannel::Twitter,
                };
                Action::Announce {
                    channel,
                    force: body == "true",
                }
            }

            "Season_Load" => Action::SeasonLoad { file: body.to_string() },
            "Season_GroupBy" => {
                Action::SeasonGroupBy(SeasonGroup::from_index(to_int(body)).ok_or_else(invalid)?)
            }
            "Season_SortBy" => {
                Action::SeasonSortBy(SeasonSort::from_index(to_int(body)).ok_or_else(invalid)?)
            }
            "Season_RefreshItemData" => Action::SeasonRefreshItemData { anime_id: optional_id(body) },

            _ => return Err(ParseActionError::UnknownVerb(verb.to_string())),
        };
        Ok(action)
    }

    /// Canonical verb, as written in menus and scripts
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Login => "Login",
            Action::Logout { .. } => "Logout",
            Action::ToggleLogin => "ToggleLogin",
            Action::Synchronize { .. } => "Synchronize",
            Action::ViewPanel => "ViewPanel",
            Action::ViewProfile => "ViewProfile",
            Action::ViewHistory => "ViewHistory",
            Action::ViewAnimePage { .. } => "ViewAnimePage",
            Action::Execute { .. } => "Execute",
            Action::Url { .. } => "URL",
            Action::About => "About",
            Action::CheckUpdates => "CheckUpdates",
            Action::Exit => "Exit",
            Action::Filter => "Filter",
            Action::Info { .. } => "Info",
            Action::MainDialog => "MainDialog",
            Action::RecognitionTest => "RecognitionTest",
            Action::SeasonBrowser => "SeasonBrowser",
            Action::Settings { .. } => "Settings",
            Action::Torrents => "Torrents",
            Action::TorrentAddFilter { .. } => "TorrentAddFilter",
            Action::SetSearchMode(_) => "SetSearchMode",
            Action::ToggleListSearch => "ToggleListSearch",
            Action::SaveSettings => "SaveSettings",
            Action::SearchAnime { .. } => "SearchAnime",
            Action::SearchTorrents { .. } => "SearchTorrents",
            Action::ShowListStats => "ShowListStats",
            Action::CheckEventBuffer => "CheckEventBuffer",
            Action::ToggleRecognition => "ToggleRecognition",
            Action::AddToListAs { .. } => "AddToListAs",
            Action::EditAll { .. } => "EditAll",
            Action::EditDelete => "EditDelete",
            Action::EditEpisode => "EditEpisode",
            Action::EditScore { .. } => "EditScore",
            Action::EditStatus { .. } => "EditStatus",
            Action::EditTags => "EditTags",
            Action::EditTitles => "EditTitles",
            Action::AddFolder => "AddFolder",
            Action::CheckEpisodes { .. } => "CheckEpisodes",
            Action::OpenFolder => "OpenFolder",
            Action::SetFolder => "SetFolder",
            Action::PlayEpisode { .. } => "PlayEpisode",
            Action::PlayLast => "PlayLast",
            Action::PlayNext => "PlayNext",
            Action::PlayRandom { .. } => "PlayRandom",
            Action::PlayRandomAnime => "PlayRandomAnime",
            Action::FilterReset => "FilterReset",
            Action::FilterStatus { .. } => "FilterStatus",
            Action::FilterType { .. } => "FilterType",
            Action::Announce { channel, .. } => match channel {
                AnnounceChannel::Http => "AnnounceToHTTP",
                AnnounceChannel::Messenger => "AnnounceToMessenger",
                AnnounceChannel::Mirc => "AnnounceToMIRC",
                AnnounceChannel::Skype => "AnnounceToSkype",
                AnnounceChannel::Twitter => "AnnounceToTwitter",
            },
            Action::SeasonLoad { .. } => "Season_Load",
            Action::SeasonGroupBy(_) => "Season_GroupBy",
            Action::SeasonSortBy(_) => "Season_SortBy",
            Action::SeasonRefreshItemData { .. } => "Season_RefreshItemData",
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, body) = split_action(s).ok_or(ParseActionError::Empty)?;
        Action::from_parts(verb, body)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!("About".parse::<Action>(), Ok(Action::About));
        assert_eq!("  Login  ".parse::<Action>(), Ok(Action::Login));
        assert_eq!("Quit".parse::<Action>(), Ok(Action::Exit));
        assert_eq!("LoginLogout".parse::<Action>(), Ok(Action::ToggleLogin));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Action>(), Err(ParseActionError::Empty));
        assert_eq!(
            "about".parse::<Action>(),
            Err(ParseActionError::UnknownVerb("about".into()))
        );
        assert!(matches!(
            "EditStatus(5)".parse::<Action>(),
            Err(ParseActionError::InvalidPayload { .. })
        ));
    }

    #[test]
    fn test_parse_settings_page() {
        assert_eq!(
            "Settings(0)".parse::<Action>(),
            Ok(Action::Settings { page: SettingsPage::Account })
        );
        assert_eq!(
            "Settings(7)".parse::<Action>(),
            Ok(Action::Settings { page: SettingsPage::FoldersRoot })
        );
        assert!("Settings(99)".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_payloads() {
        assert_eq!(
            "FilterStatus(2)".parse::<Action>(),
            Ok(Action::FilterStatus { index: 2 })
        );
        assert_eq!(
            "AddToListAs(6)".parse::<Action>(),
            Ok(Action::AddToListAs { status: MyStatus::PlanToWatch, anime_id: None })
        );
        assert_eq!(
            "Info".parse::<Action>(),
            Ok(Action::Info { anime_id: None })
        );
        assert_eq!(
            "PlayRandom(1535)".parse::<Action>(),
            Ok(Action::PlayRandom { anime_id: Some(1535) })
        );
        assert_eq!(
            "CheckEpisodes(current)".parse::<Action>(),
            Ok(Action::CheckEpisodes { silent: false, selected_only: true })
        );
    }

    #[test]
    fn test_parse_announce_force() {
        assert_eq!(
            "AnnounceToMIRC(true)".parse::<Action>(),
            Ok(Action::Announce { channel: AnnounceChannel::Mirc, force: true })
        );
        assert_eq!(
            "AnnounceToTwitter(TRUE)".parse::<Action>(),
            Ok(Action::Announce { channel: AnnounceChannel::Twitter, force: false })
        );
    }

    #[test]
    fn test_parse_search_mode() {
        let action: Action = "SetSearchMode(2, Torrent, Search torrents, http://t.example/?q=%title%)"
            .parse()
            .unwrap();
        assert_eq!(
            action,
            Action::SetSearchMode(SearchBarMode {
                menu_index: 2,
                mode: SearchMode::Torrent { url: "http://t.example/?q=%title%".into() },
                cue_text: "Search torrents".into(),
            })
        );

        // Web mode needs a URL
        assert!("SetSearchMode(1, Web, Search the web)".parse::<Action>().is_err());
        assert!("SetSearchMode(0, MAL, Search list)".parse::<Action>().is_ok());
    }

    #[test]
    fn test_verb_round_trips_through_parser() {
        for text in ["AnnounceToSkype", "Season_SortBy(2)", "URL(http://x)", "EditScore(9)"] {
            let action: Action = text.parse().unwrap();
            let verb = split_action(text).unwrap().0;
            assert_eq!(action.verb(), verb);
        }
    }
}
