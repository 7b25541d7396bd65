//! Pure board transitions: collection in, command in, collection out.
//!
//! Nothing here touches storage; the store decides what to persist based on
//! the returned [`Outcome`].

use movie_board_models::{Movie, MovieId, Rating, WatchStatus};
use std::collections::HashSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a movie whose id has already been assigned
    Add(Movie),
    SetStatus {
        id: MovieId,
        status: WatchStatus,
    },
    SetReview {
        id: MovieId,
        name: String,
        genre: String,
        rating: Rating,
        review: String,
    },
    Remove {
        id: MovieId,
    },
    /// Replace the whole collection (initial hydration)
    Replace(Vec<Movie>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command matched and the collection was written
    Applied,
    /// Rejected or nothing matched; the collection is untouched
    Unchanged,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

pub fn apply(movies: &mut Vec<Movie>, command: Command) -> Outcome {
    match command {
        Command::Add(movie) => {
            if movie.name.trim().is_empty() {
                debug!("Rejecting add with empty name");
                return Outcome::Unchanged;
            }
            if movies.iter().any(|m| m.id == movie.id) {
                warn!("Rejecting add: id {} already exists", movie.id);
                return Outcome::Unchanged;
            }
            movies.push(movie);
            Outcome::Applied
        }
        Command::SetStatus { id, status } => match find_mut(movies, &id) {
            Some(movie) => {
                movie.status = status;
                Outcome::Applied
            }
            None => {
                debug!("set_status: no movie with id {}", id);
                Outcome::Unchanged
            }
        },
        Command::SetReview { id, name, genre, rating, review } => match find_mut(movies, &id) {
            Some(movie) => {
                movie.name = name;
                movie.genre = genre;
                movie.rating = rating;
                movie.review = review;
                Outcome::Applied
            }
            None => {
                debug!("set_review: no movie with id {}", id);
                Outcome::Unchanged
            }
        },
        Command::Remove { id } => {
            let before = movies.len();
            movies.retain(|m| m.id != id);
            if movies.len() == before {
                debug!("remove: no movie with id {}", id);
                Outcome::Unchanged
            } else {
                Outcome::Applied
            }
        }
        Command::Replace(incoming) => {
            *movies = dedupe_by_id(incoming);
            Outcome::Applied
        }
    }
}

fn find_mut<'a>(movies: &'a mut [Movie], id: &MovieId) -> Option<&'a mut Movie> {
    movies.iter_mut().find(|m| &m.id == id)
}

/// Keep the first record for each id
fn dedupe_by_id(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen = HashSet::new();
    let total = movies.len();
    let unique: Vec<Movie> = movies.into_iter().filter(|m| seen.insert(m.id.clone())).collect();
    if unique.len() < total {
        warn!("Dropped {} movies with duplicate ids", total - unique.len());
    }
    unique
}
