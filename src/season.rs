//! Season browser data - titles airing in one broadcast season, independent
//! of the user's own list

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::{AiringStatus, SeriesType};

/// A title listed in a season file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeasonItem {
    pub anime_id: i32,
    pub title: String,
    #[serde(default)]
    pub series_type: SeriesType,
    #[serde(default)]
    pub airing_status: AiringStatus,
    #[serde(default)]
    pub episode_count: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Member count on MyAnimeList, used as popularity
    #[serde(default)]
    pub members: u32,
    #[serde(default)]
    pub score: f32,
}

/// Contents of one season file
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SeasonDatabase {
    pub name: String,
    #[serde(default)]
    pub items: Vec<SeasonItem>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeasonGroup {
    #[default]
    AiringStatus,
    Type,
}

impl SeasonGroup {
    pub fn from_index(index: i32) -> Option<SeasonGroup> {
        match index {
            0 => Some(SeasonGroup::AiringStatus),
            1 => Some(SeasonGroup::Type),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeasonSort {
    AiringDate,
    Episodes,
    Popularity,
    Score,
    #[default]
    Title,
}

impl SeasonSort {
    pub fn from_index(index: i32) -> Option<SeasonSort> {
        match index {
            0 => Some(SeasonSort::AiringDate),
            1 => Some(SeasonSort::Episodes),
            2 => Some(SeasonSort::Popularity),
            3 => Some(SeasonSort::Score),
            4 => Some(SeasonSort::Title),
            _ => None,
        }
    }

    fn compare(&self, a: &SeasonItem, b: &SeasonItem) -> Ordering {
        match self {
            SeasonSort::AiringDate => a.start_date.cmp(&b.start_date),
            SeasonSort::Episodes => b.episode_count.cmp(&a.episode_count),
            SeasonSort::Popularity => b.members.cmp(&a.members),
            SeasonSort::Score => b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal),
            SeasonSort::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}

impl SeasonDatabase {
    pub fn sorted(&self, sort: SeasonSort) -> Vec<&SeasonItem> {
        let mut items: Vec<&SeasonItem> = self.items.iter().collect();
        items.sort_by(|a, b| sort.compare(a, b));
        items
    }

    /// Sorted items split into labelled groups, empty groups omitted
    pub fn grouped(&self, group: SeasonGroup, sort: SeasonSort) -> Vec<(String, Vec<&SeasonItem>)> {
        let mut groups: Vec<(String, Vec<&SeasonItem>)> = Vec::new();
        for item in self.sorted(sort) {
            let label = group_label(group, item);
            match groups.iter_mut().find(|(l, _)| *l == label) {
                Some((_, members)) => members.push(item),
                None => groups.push((label, vec![item])),
            }
        }
        groups.sort_by(|a, b| a.0.cmp(&b.0));
        groups
    }
}

fn group_label(group: SeasonGroup, item: &SeasonItem) -> String {
    match group {
        SeasonGroup::AiringStatus => match item.airing_status {
            AiringStatus::Airing => "Currently airing",
            AiringStatus::Finished => "Finished airing",
            AiringStatus::NotYetAired => "Not yet aired",
            AiringStatus::Unknown => "Unknown",
        }
        .to_string(),
        SeasonGroup::Type => match item.series_type {
            SeriesType::Tv => "TV",
            SeriesType::Ova => "OVA",
            SeriesType::Movie => "Movie",
            SeriesType::Special => "Special",
            SeriesType::Ona => "ONA",
            SeriesType::Music => "Music",
        }
        .to_string(),
    }
}

/// Season browser state kept by the application
#[derive(Clone, Debug, Default)]
pub struct SeasonState {
    pub database: Option<SeasonDatabase>,
    pub group_by: SeasonGroup,
    pub sort_by: SeasonSort,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, title: &str, series_type: SeriesType, members: u32) -> SeasonItem {
        SeasonItem {
            anime_id: id,
            title: title.to_string(),
            series_type,
            airing_status: AiringStatus::Airing,
            episode_count: 12,
            start_date: None,
            members,
            score: 0.0,
        }
    }

    #[test]
    fn test_group_by_type_keeps_sort_order_inside_groups() {
        let db = SeasonDatabase {
            name: "Spring 2012".into(),
            items: vec![
                item(1, "Zetman", SeriesType::Tv, 10),
                item(2, "Acchi Kocchi", SeriesType::Tv, 50),
                item(3, "Hotarubi", SeriesType::Movie, 30),
            ],
        };

        let groups = db.grouped(SeasonGroup::Type, SeasonSort::Popularity);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Movie");
        let tv: Vec<i32> = groups[1].1.iter().map(|i| i.anime_id).collect();
        assert_eq!(tv, vec![2, 1]);
    }

    #[test]
    fn test_indices_out_of_range() {
        assert_eq!(SeasonSort::from_index(5), None);
        assert_eq!(SeasonGroup::from_index(-1), None);
        assert_eq!(SeasonSort::from_index(4), Some(SeasonSort::Title));
    }
}
