//! List statistics shown by `ShowListStats`

use crate::constants::DEFAULT_EPISODE_LENGTH;
use crate::database::AnimeDatabase;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListStats {
    pub anime_count: usize,
    pub episode_count: i64,
    pub life_spent_watching: String,
    pub score_mean: f64,
    pub score_deviation: f64,
}

impl ListStats {
    pub fn calculate(db: &AnimeDatabase) -> Self {
        let mut stats = ListStats::default();
        let mut minutes: u64 = 0;
        let mut scores: Vec<f64> = Vec::new();

        for item in db.iter().filter(|item| item.in_list) {
            stats.anime_count += 1;
            let watched = item.my_last_watched_episode.max(0);
            stats.episode_count += i64::from(watched);

            let length = if item.episode_length > 0 {
                item.episode_length
            } else {
                DEFAULT_EPISODE_LENGTH
            };
            minutes += u64::from(watched as u32) * u64::from(length);

            if item.my_score > 0 {
                scores.push(f64::from(item.my_score));
            }
        }

        stats.life_spent_watching = format_duration(minutes);

        if !scores.is_empty() {
            let n = scores.len() as f64;
            let mean = scores.iter().sum::<f64>() / n;
            let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
            stats.score_mean = mean;
            stats.score_deviation = variance.sqrt();
        }

        stats
    }

    /// Body of the stats message box
    pub fn to_message(&self) -> String {
        format!(
            "\u{2022} Anime count: \t\t{}\n\
             \u{2022} Episode count: \t\t{}\n\
             \u{2022} Life spent watching: \t{}\n\
             \u{2022} Mean score: \t\t{:.2}\n\
             \u{2022} Score deviation: \t\t{:.2}",
            self.anime_count,
            self.episode_count,
            self.life_spent_watching,
            self.score_mean,
            self.score_deviation,
        )
    }
}

fn format_duration(total_minutes: u64) -> String {
    let days = total_minutes / (60 * 24);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 || parts.is_empty() {
        parts.push(plural(minutes, "minute"));
    }
    parts.join(", ")
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnimeItem;

    #[test]
    fn test_stats_skip_titles_outside_list() {
        let mut db = AnimeDatabase::new();

        let mut a = AnimeItem::new(1, "A");
        a.in_list = true;
        a.my_last_watched_episode = 60;
        a.my_score = 8;
        let mut b = AnimeItem::new(2, "B");
        b.in_list = true;
        b.my_last_watched_episode = 1;
        b.episode_length = 90;
        b.my_score = 6;
        let mut c = AnimeItem::new(3, "C");
        c.my_last_watched_episode = 100;

        db.update_item(a);
        db.update_item(b);
        db.update_item(c);

        let stats = ListStats::calculate(&db);
        assert_eq!(stats.anime_count, 2);
        assert_eq!(stats.episode_count, 61);
        // 60 * 24 + 90 minutes
        assert_eq!(stats.life_spent_watching, "1 day, 1 hour, 30 minutes");
        assert!((stats.score_mean - 7.0).abs() < f64::EPSILON);
        assert!((stats.score_deviation - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_duration() {
        assert_eq!(format_duration(0), "0 minutes");
        assert_eq!(format_duration(61), "1 hour, 1 minute");
    }
}
