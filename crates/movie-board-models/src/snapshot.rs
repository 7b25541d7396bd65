use serde::{Deserialize, Serialize};
use crate::Movie;

/// The persisted slice of board state: `{ "movies": [...], "initialized": bool }`.
///
/// The search query is UI state and is never part of a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub initialized: bool,
}

impl BoardSnapshot {
    pub fn new(movies: Vec<Movie>, initialized: bool) -> Self {
        Self { movies, initialized }
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let snapshot = BoardSnapshot::from_json("{}").unwrap();
        assert!(snapshot.movies.is_empty());
        assert!(!snapshot.initialized);
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        assert!(BoardSnapshot::from_json("not json").is_err());
        assert!(BoardSnapshot::from_json(r#"{"movies": 3}"#).is_err());
    }

    #[test]
    fn test_float_rating_keeps_board() {
        let json = r#"{"movies":[{"id":"3","name":"The Dark Knight","genre":"Action","status":"watched","rating":4.0,"review":""}],"initialized":true}"#;
        let snapshot = BoardSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.movies.len(), 1);
        assert_eq!(snapshot.movies[0].rating.value(), 4);
    }
}
