pub mod board;
pub mod config;
pub mod movies;
pub mod reset;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use movie_board_config::{Config, PathManager};
use crate::output::Output;
use movie_board_core::{JsonFileSlot, Lifecycle, MovieStore};
use movie_board_sources::SourceFactoryRegistry;

/// Build the store from configuration: file-backed slot plus the configured movie source
pub fn build_store(config: &Config, paths: &PathManager) -> Result<MovieStore> {
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Invalid configuration: {}", e))?;

    let registry = SourceFactoryRegistry::new();
    let source = registry
        .create_from_config(config)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create movie source: {}", e))?;

    let slot = JsonFileSlot::from_paths(paths, config.storage.slot.trim());
    tracing::debug!("Using slot file {}", slot.path().display());

    Ok(MovieStore::new(Box::new(slot), source))
}

/// Build and hydrate the store; every board command starts here
pub async fn open_store(config: &Config, paths: &PathManager) -> Result<MovieStore> {
    let mut store = build_store(config, paths)?;
    store.initialize().await.wrap_err("Failed to save the initial board")?;
    Ok(store)
}

/// Surface a failed source load; the board itself is still usable (empty or as saved)
pub fn report_lifecycle(store: &MovieStore, output: &Output) {
    if let Lifecycle::Failed(reason) = store.lifecycle() {
        output.warn(format!("Could not load movies: {}", reason));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_board_config::SourceKind;
    use movie_board_models::WatchStatus;

    fn fast_config() -> Config {
        let mut config = Config::default();
        config.source.latency_ms = 0;
        config
    }

    #[tokio::test]
    async fn test_open_store_seeds_then_restores() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::from_base(dir.path());
        let config = fast_config();

        let mut store = open_store(&config, &paths).await.unwrap();
        assert_eq!(store.all().len(), 4);
        let id = store.add("Inception", "Sci-Fi", WatchStatus::Watchlist).unwrap().unwrap();

        let reopened = open_store(&config, &paths).await.unwrap();
        assert_eq!(reopened.all().len(), 5);
        assert_eq!(reopened.get(&id).map(|m| m.name.as_str()), Some("Inception"));
    }

    #[test]
    fn test_build_store_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::from_base(dir.path());
        let mut config = fast_config();
        config.source.kind = SourceKind::Http;
        assert!(build_store(&config, &paths).is_err());
    }
}
