//! Season browser handlers

use crate::app::Router;
use crate::season::{SeasonGroup, SeasonSort};

impl Router {
    /// Load a season file; a file that cannot be read leaves the browser as is
    pub(crate) fn season_load(&mut self, file: &str) {
        match self.state.storage().load_season(file) {
            Ok(season) => {
                tracing::info!(season = %season.name, count = season.items.len(), "Season loaded");
                self.state.season.database = Some(season);

                self.services.ui.refresh_season_data(None, false);
                self.refresh_season_list();
                self.services.ui.refresh_season_status();
                self.services.ui.refresh_season_toolbar();
            }
            Err(e) => tracing::warn!(file, error = %e, "Could not load season"),
        }
    }

    pub(crate) fn season_group_by(&mut self, group: SeasonGroup) {
        self.state.season.group_by = group;
        self.refresh_season_list();
        self.services.ui.refresh_season_toolbar();
    }

    pub(crate) fn season_sort_by(&mut self, sort: SeasonSort) {
        self.state.season.sort_by = sort;
        self.refresh_season_list();
        self.services.ui.refresh_season_toolbar();
    }

    /// Hand the loaded season, grouped and sorted as chosen, to the UI
    fn refresh_season_list(&mut self) {
        let season = &self.state.season;
        let groups = season
            .database
            .as_ref()
            .map(|db| db.grouped(season.group_by, season.sort_by))
            .unwrap_or_default();
        self.services.ui.refresh_season_list(&groups);
    }
}
