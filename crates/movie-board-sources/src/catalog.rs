use async_trait::async_trait;
use movie_board_models::{Movie, MovieId, Rating, WatchStatus};
use std::time::Duration;
use tracing::debug;
use crate::{MovieSource, SourceError};

/// The starter collection served to a brand new board
pub fn seed_catalog() -> Vec<Movie> {
    vec![
        Movie::new(MovieId::from("1"), "The Shawshank Redemption", "Drama", WatchStatus::Watchlist),
        Movie::new(MovieId::from("2"), "The Godfather", "Crime", WatchStatus::Watching),
        Movie::new(MovieId::from("3"), "The Dark Knight", "Action", WatchStatus::Watched)
            .with_review(Rating::new(5), "Amazing superhero movie!"),
        Movie::new(MovieId::from("4"), "Pulp Fiction", "Crime", WatchStatus::Watched)
            .with_review(Rating::new(4), "Iconic Tarantino film."),
    ]
}

/// In-process stand-in for the movies endpoint.
///
/// Serves a fixed list after sleeping for `latency` to mimic a network round trip.
pub struct CatalogSource {
    movies: Vec<Movie>,
    latency: Duration,
}

impl CatalogSource {
    pub fn new(latency: Duration) -> Self {
        Self {
            movies: seed_catalog(),
            latency,
        }
    }

    /// Serve a custom list instead of the seed catalog
    pub fn with_movies(mut self, movies: Vec<Movie>) -> Self {
        self.movies = movies;
        self
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[async_trait]
impl MovieSource for CatalogSource {
    fn source_name(&self) -> &str {
        "catalog"
    }

    async fn fetch_movies(&self) -> Result<Vec<Movie>, SourceError> {
        if !self.latency.is_zero() {
            debug!("Simulating {:?} of latency", self.latency);
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.movies.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_ids_are_unique() {
        let movies = seed_catalog();
        let mut ids: Vec<_> = movies.iter().map(|m| m.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), movies.len());
    }

    #[tokio::test]
    async fn test_catalog_serves_seed_movies() {
        let source = CatalogSource::new(Duration::ZERO);
        let movies = source.fetch_movies().await.unwrap();
        assert_eq!(movies.len(), 4);
        assert_eq!(movies[1].name, "The Godfather");
        assert_eq!(movies[2].rating.value(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_catalog_waits_for_latency() {
        let source = CatalogSource::new(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        source.fetch_movies().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_custom_movies() {
        let source = CatalogSource::new(Duration::ZERO).with_movies(Vec::new());
        assert!(source.fetch_movies().await.unwrap().is_empty());
    }
}
