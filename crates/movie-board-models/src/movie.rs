use serde::{Deserialize, Serialize};
use crate::{MovieId, Rating, WatchStatus};

/// A single entry on the board.
///
/// Only `id` and `name` are required when decoding; everything else falls back
/// to its default so that sparse records from a source still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub status: WatchStatus,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub review: String,
}

impl Movie {
    /// A freshly added movie: unrated, no review.
    pub fn new(id: MovieId, name: impl Into<String>, genre: impl Into<String>, status: WatchStatus) -> Self {
        Self {
            id,
            name: name.into(),
            genre: genre.into(),
            status,
            rating: Rating::UNRATED,
            review: String::new(),
        }
    }

    /// Builder-style helper used by sources and tests
    pub fn with_review(mut self, rating: Rating, review: impl Into<String>) -> Self {
        self.rating = rating;
        self.review = review.into();
        self
    }

    /// Case-insensitive substring match against name or genre.
    /// `needle` must already be lowercased.
    pub fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.genre.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_movie_is_unrated() {
        let movie = Movie::new(MovieId::from("1"), "Inception", "Sci-Fi", WatchStatus::Watchlist);
        assert_eq!(movie.rating, Rating::UNRATED);
        assert!(movie.review.is_empty());
    }

    #[test]
    fn test_sparse_record_uses_defaults() {
        let movie: Movie = serde_json::from_str(r#"{"id":"7","name":"Heat"}"#).unwrap();
        assert_eq!(movie.status, WatchStatus::Watchlist);
        assert_eq!(movie.genre, "");
        assert_eq!(movie.rating.value(), 0);
    }

    #[test]
    fn test_record_shape_matches_storage_format() {
        let movie = Movie::new(MovieId::from("3"), "The Dark Knight", "Action", WatchStatus::Watched)
            .with_review(Rating::new(5), "Amazing superhero movie!");
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "3",
                "name": "The Dark Knight",
                "genre": "Action",
                "status": "watched",
                "rating": 5,
                "review": "Amazing superhero movie!"
            })
        );
    }

    #[test]
    fn test_matches_query() {
        let movie = Movie::new(MovieId::from("2"), "The Godfather", "Crime", WatchStatus::Watching);
        assert!(movie.matches_query(""));
        assert!(movie.matches_query("crime"));
        assert!(movie.matches_query("godf"));
        assert!(!movie.matches_query("action"));
    }
}
