use movie_board_models::{Movie, WatchStatus};
use serde::Serialize;

/// Movies whose name or genre contains `query`, case-insensitively, in collection order.
/// An empty query matches everything.
pub fn filter_movies<'a>(movies: &'a [Movie], query: &str) -> Vec<&'a Movie> {
    let needle = query.to_lowercase();
    movies.iter().filter(|m| m.matches_query(&needle)).collect()
}

/// [`filter_movies`] narrowed to a single status column
pub fn movies_with_status<'a>(movies: &'a [Movie], query: &str, status: WatchStatus) -> Vec<&'a Movie> {
    filter_movies(movies, query)
        .into_iter()
        .filter(|m| m.status == status)
        .collect()
}

/// The filtered collection split into the three board columns.
#[derive(Debug, Default, Serialize)]
pub struct BoardColumns<'a> {
    pub watchlist: Vec<&'a Movie>,
    pub watching: Vec<&'a Movie>,
    pub watched: Vec<&'a Movie>,
}

impl<'a> BoardColumns<'a> {
    pub fn build(movies: &'a [Movie], query: &str) -> Self {
        let mut columns = Self::default();
        for movie in filter_movies(movies, query) {
            columns.column_mut(movie.status).push(movie);
        }
        columns
    }

    pub fn column(&self, status: WatchStatus) -> &[&'a Movie] {
        match status {
            WatchStatus::Watchlist => &self.watchlist,
            WatchStatus::Watching => &self.watching,
            WatchStatus::Watched => &self.watched,
        }
    }

    fn column_mut(&mut self, status: WatchStatus) -> &mut Vec<&'a Movie> {
        match status {
            WatchStatus::Watchlist => &mut self.watchlist,
            WatchStatus::Watching => &mut self.watching,
            WatchStatus::Watched => &mut self.watched,
        }
    }

    /// Columns in board order, paired with their status
    pub fn iter(&self) -> impl Iterator<Item = (WatchStatus, &[&'a Movie])> + '_ {
        WatchStatus::ALL.into_iter().map(move |status| (status, self.column(status)))
    }

    pub fn total(&self) -> usize {
        self.watchlist.len() + self.watching.len() + self.watched.len()
    }
}
