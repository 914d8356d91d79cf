//! In-memory anime database: every known title, the user's list entries and
//! the title currently selected in the list view.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{AnimeItem, MyStatus};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnimeDatabase {
    /// Owner of the list, empty until the list has been downloaded once
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    items: BTreeMap<i32, AnimeItem>,
    #[serde(skip)]
    current_id: Option<i32>,
}

impl AnimeDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_item(&self, id: i32) -> Option<&AnimeItem> {
        self.items.get(&id)
    }

    pub fn find_item_mut(&mut self, id: i32) -> Option<&mut AnimeItem> {
        self.items.get_mut(&id)
    }

    /// Insert a title, replacing any previous entry with the same id
    pub fn update_item(&mut self, item: AnimeItem) {
        self.items.insert(item.id, item);
    }

    /// Replace the user's list with a freshly downloaded one. Titles that
    /// dropped off the list stay known but lose their list entry.
    pub fn replace_list(&mut self, user: &str, items: Vec<AnimeItem>) {
        self.user_name = user.to_string();
        for item in self.items.values_mut() {
            item.in_list = false;
        }
        for mut item in items {
            item.in_list = true;
            if let Some(old) = self.items.get(&item.id) {
                // Local-only fields survive a refresh
                item.folder = item.folder.or_else(|| old.folder.clone());
                if item.user_synonyms.is_empty() {
                    item.user_synonyms = old.user_synonyms.clone();
                }
            }
            self.items.insert(item.id, item);
        }
    }

    pub fn current_id(&self) -> Option<i32> {
        self.current_id
    }

    /// Select a title; ids that are not in the database clear the selection
    pub fn set_current(&mut self, id: Option<i32>) {
        self.current_id = id.filter(|id| self.items.contains_key(id));
    }

    pub fn current_item(&self) -> Option<&AnimeItem> {
        self.current_id.and_then(|id| self.items.get(&id))
    }

    pub fn current_item_mut(&mut self) -> Option<&mut AnimeItem> {
        match self.current_id {
            Some(id) => self.items.get_mut(&id),
            None => None,
        }
    }

    /// Resolve an explicit id, falling back to the current selection
    pub fn resolve_id(&self, id: Option<i32>) -> Option<i32> {
        id.or(self.current_id)
    }

    pub fn ids(&self) -> Vec<i32> {
        self.items.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimeItem> {
        self.items.values()
    }

    /// Titles on the user's list with the given status
    pub fn with_status(&self, status: MyStatus) -> impl Iterator<Item = &AnimeItem> {
        self.items
            .values()
            .filter(move |item| item.in_list && item.my_status == Some(status))
    }
}
