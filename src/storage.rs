use crate::constants::{ANIME_LIST_FILE, CONFIG_DIR_NAME, SEASONS_DIR, SETTINGS_FILE};
use crate::database::AnimeDatabase;
use crate::season::SeasonDatabase;
use crate::settings::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes settings, the anime list and season files
#[derive(Clone, Debug)]
pub struct Storage {
    config_dir: PathBuf,
}

impl Storage {
    pub fn new() -> Self {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME);
        Storage { config_dir }
    }

    /// Storage rooted at a specific directory
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Storage {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Ensure config directory exists
    fn ensure_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Load settings, falling back to defaults when none were saved yet
    pub fn load_settings(&self) -> Result<Settings> {
        let path = self.config_dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_yaml::to_string(settings)?;
        fs::write(self.config_dir.join(SETTINGS_FILE), content)?;
        Ok(())
    }

    /// Load the anime list, empty when none was saved yet
    pub fn load_anime_list(&self) -> Result<AnimeDatabase> {
        let path = self.config_dir.join(ANIME_LIST_FILE);
        if !path.exists() {
            return Ok(AnimeDatabase::new());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let db = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(db)
    }

    pub fn save_anime_list(&self, db: &AnimeDatabase) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_yaml::to_string(db)?;
        fs::write(self.config_dir.join(ANIME_LIST_FILE), content)?;
        Ok(())
    }

    /// Resolve a season file name; relative names live in the seasons directory
    pub fn season_path(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config_dir.join(SEASONS_DIR).join(path)
        };
        if path.extension().is_none() {
            path.with_extension("yaml")
        } else {
            path
        }
    }

    pub fn load_season(&self, file: &str) -> Result<SeasonDatabase> {
        let path = self.season_path(file);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let season = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(season)
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnimeItem, MyStatus};
    use tempfile::tempdir;

    #[test]
    fn test_missing_files_load_defaults() {
        let dir = tempdir().unwrap();
        let storage = Storage::with_dir(dir.path().join("nested"));
        assert_eq!(storage.load_settings().unwrap(), Settings::default());
        assert!(storage.load_anime_list().unwrap().is_empty());
    }

    #[test]
    fn test_settings_and_list_persist() {
        let dir = tempdir().unwrap();
        let storage = Storage::with_dir(dir.path());

        let mut settings = Settings::default();
        settings.account.user = "eren".into();
        settings.folders.root.push(PathBuf::from("/media/anime"));
        storage.save_settings(&settings).unwrap();
        assert_eq!(storage.load_settings().unwrap(), settings);

        let mut db = AnimeDatabase::new();
        let mut item = AnimeItem::new(1535, "Death Note");
        item.in_list = true;
        item.my_status = Some(MyStatus::Completed);
        db.update_item(item);
        storage.save_anime_list(&db).unwrap();

        let loaded = storage.load_anime_list().unwrap();
        let item = loaded.find_item(1535).unwrap();
        assert_eq!(item.title, "Death Note");
        assert_eq!(item.my_status, Some(MyStatus::Completed));
    }

    #[test]
    fn test_season_path_resolution() {
        let storage = Storage::with_dir("/tmp/cfg");
        assert_eq!(
            storage.season_path("2012_spring"),
            PathBuf::from("/tmp/cfg/seasons/2012_spring.yaml")
        );
        assert_eq!(
            storage.season_path("/data/fall.yml"),
            PathBuf::from("/data/fall.yml")
        );
    }

    #[test]
    fn test_load_season_file() {
        let dir = tempdir().unwrap();
        let storage = Storage::with_dir(dir.path());
        fs::create_dir_all(dir.path().join(SEASONS_DIR)).unwrap();
        fs::write(
            dir.path().join(SEASONS_DIR).join("spring.yaml"),
            "name: Spring 2012\nitems:\n  - anime_id: 11757\n    title: Sword Art Online\n",
        )
        .unwrap();

        let season = storage.load_season("spring").unwrap();
        assert_eq!(season.name, "Spring 2012");
        assert_eq!(season.items[0].anime_id, 11757);
        assert_eq!(season.items[0].title, "Sword Art Online");
        assert!(storage.load_season("missing").is_err());
    }
}
