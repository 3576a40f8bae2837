use crate::config::Config;
use crate::favorites::Favorites;
use crate::utils::error::{AppError, AppResult};
use std::path::PathBuf;

/// File-backed persistence for the favorites set.
///
/// Loading fails soft: an absent or malformed file yields an empty set so a
/// broken state file can never keep the application from starting. Saving
/// reports its error to the caller, who decides whether to surface it.
pub struct StateStore {
    favorites_file: PathBuf,
}

impl StateStore {
    pub fn new(config: &Config) -> Self {
        Self {
            favorites_file: config.general.favorites_file.clone(),
        }
    }

    pub fn load_favorites(&self) -> Favorites {
        let content = match std::fs::read_to_string(&self.favorites_file) {
            Ok(content) => content,
            Err(_) => return Favorites::new(),
        };

        serde_json::from_str(&content).unwrap_or_default()
    }

    pub fn save_favorites(&self, favorites: &Favorites) -> AppResult<()> {
        if let Some(parent) = self.favorites_file.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Storage(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(favorites)
            .map_err(|e| AppError::Storage(format!("Failed to serialize favorites: {}", e)))?;

        std::fs::write(&self.favorites_file, content).map_err(|e| {
            AppError::Storage(format!(
                "Failed to write favorites file {}: {}",
                self.favorites_file.display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn store_in(dir: &std::path::Path) -> StateStore {
        let mut config = Config::default();
        config.general.favorites_file = dir.join("favorites.json");
        StateStore::new(&config)
    }

    #[test]
    fn test_load_absent_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.load_favorites().is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = store_in(dir.path());
        assert!(store.load_favorites().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let mut favorites = Favorites::new();
        favorites.insert("將場景換成在海邊、衣服換成藍色T恤、手上換成拿著小螃蟹");
        favorites.insert("a cat，風格：watercolor");

        store.save_favorites(&favorites).unwrap();
        assert_eq!(store.load_favorites(), favorites);
    }

    #[test]
    fn test_persisted_form_is_json_string_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let mut favorites = Favorites::new();
        favorites.insert("one");
        favorites.insert("two");
        store.save_favorites(&favorites).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("favorites.json")).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, vec!["one", "two"]);
    }
}
