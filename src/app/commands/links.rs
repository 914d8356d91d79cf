//! Launch handlers: files, folders and links

use std::path::Path;

use crate::app::Router;
use crate::constants::URL_TITLE_STRIP_CHARS;

/// Title as it goes into a search URL
pub(crate) fn url_title(title: &str) -> String {
    let stripped: String = title
        .chars()
        .filter(|c| !URL_TITLE_STRIP_CHARS.contains(*c))
        .collect();
    stripped.replace(" -", "")
}

impl Router {
    /// Replace `%title%` with the current title, when there is one
    pub(crate) fn substitute_title(&self, template: &str) -> String {
        match self.state.database.current_item() {
            Some(item) => template.replace("%title%", &url_title(&item.title)),
            None => template.to_string(),
        }
    }

    pub(crate) fn execute_path(&mut self, path: &str) {
        if !self.services.launcher.execute(Path::new(path)) {
            tracing::debug!(path, "Nothing launched");
        }
    }

    pub(crate) fn open_url(&mut self, address: &str) {
        let url = self.substitute_title(address);
        self.services.launcher.open_link(&url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_title_strips_punctuation() {
        assert_eq!(url_title("K-On!!"), "K-On");
        assert_eq!(url_title("Steins;Gate"), "SteinsGate");
        assert_eq!(url_title("Fate/Zero - Part 2"), "Fate/Zero Part 2");
        assert_eq!(url_title("Lucky_Star~"), "LuckyStar");
    }
}
