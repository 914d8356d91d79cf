//! List filter handlers

use crate::app::Router;
use crate::services::ListScope;

/// Toggle the flag at a 1-based menu position; false when out of range
fn toggle_at(flags: &mut [bool], position: i32) -> bool {
    let Some(index) = usize::try_from(position).ok().and_then(|p| p.checked_sub(1)) else {
        return false;
    };
    match flags.get_mut(index) {
        Some(flag) => {
            *flag = !*flag;
            true
        }
        None => false,
    }
}

impl Router {
    pub(crate) fn filter_reset(&mut self) {
        self.state.filters.reset();
        self.services.ui.refresh_filters();
        if !self.services.ui.set_search_text("") {
            self.refresh_list(ListScope::Current);
        }
    }

    pub(crate) fn filter_status(&mut self, position: i32) {
        if toggle_at(&mut self.state.filters.status, position) {
            self.services.ui.refresh_filters();
            self.refresh_list(ListScope::Current);
        }
    }

    pub(crate) fn filter_type(&mut self, position: i32) {
        if toggle_at(&mut self.state.filters.series_type, position) {
            self.services.ui.refresh_filters();
            self.refresh_list(ListScope::Current);
        }
    }

    /// Switch the search bar between filtering the list and searching online
    pub(crate) fn toggle_list_search(&mut self) {
        self.state.filter_list_by_search = !self.state.filter_list_by_search;

        if self.state.filter_list_by_search {
            let text = self.services.ui.search_text();
            if !text.is_empty() {
                self.state.filters.text = text;
                self.refresh_list(ListScope::All);
            }
        } else {
            self.state.filters.text.clear();
            self.refresh_list(ListScope::Current);
        }
    }
}
