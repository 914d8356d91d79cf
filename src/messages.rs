//! Results reported back by the MyAnimeList client after a request started
//! by the router has finished.

use crate::models::AnimeItem;

/// Outcome of a network request started by a session action
#[derive(Clone, Debug)]
pub enum SyncResponse {
    LoginSucceeded {
        user: String,
    },
    LoginFailed {
        message: String,
    },
    /// Downloaded list; `login_after` echoes the flag the refresh was started with
    ListRefreshed {
        user: String,
        items: Vec<AnimeItem>,
        login_after: bool,
    },
    ListFailed {
        message: String,
    },
}

impl SyncResponse {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            SyncResponse::LoginFailed { .. } | SyncResponse::ListFailed { .. }
        )
    }
}
