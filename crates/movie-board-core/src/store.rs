use movie_board_models::{BoardSnapshot, Movie, MovieId, Rating, WatchStatus};
use movie_board_sources::MovieSource;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info};
use crate::reducer::{self, Command, Outcome};
use crate::views::{self, BoardColumns};
use crate::{IdGenerator, Lifecycle, PersistenceSlot, StoreError};

/// A store shared across tasks on a multi-threaded runtime.
/// The mutex keeps mutations single-writer.
pub type SharedMovieStore = Arc<tokio::sync::Mutex<MovieStore>>;

/// Owns the canonical movie collection.
///
/// Mutations run through [`reducer::apply`]; whenever a command is applied the
/// `{movies, initialized}` snapshot is written to the persistence slot. The
/// search query is view state only and is never persisted.
pub struct MovieStore {
    movies: Vec<Movie>,
    search_query: String,
    lifecycle: watch::Sender<Lifecycle>,
    slot: Box<dyn PersistenceSlot>,
    source: Box<dyn MovieSource>,
    ids: IdGenerator,
}

impl MovieStore {
    pub fn new(slot: Box<dyn PersistenceSlot>, source: Box<dyn MovieSource>) -> Self {
        let (lifecycle, _) = watch::channel(Lifecycle::Uninitialized);
        Self {
            movies: Vec::new(),
            search_query: String::new(),
            lifecycle,
            slot,
            source,
            ids: IdGenerator::new(),
        }
    }

    pub fn into_shared(self) -> SharedMovieStore {
        Arc::new(tokio::sync::Mutex::new(self))
    }

    /// Hydrate the board on first use.
    ///
    /// A slot marked `initialized` wins outright. Otherwise the movie source is
    /// fetched once; a failure is logged and leaves the lifecycle `Failed`
    /// without retrying. Calls after the first are no-ops.
    pub async fn initialize(&mut self) -> Result<(), StoreError> {
        let uninitialized = matches!(*self.lifecycle.borrow(), Lifecycle::Uninitialized);
        if !uninitialized {
            debug!("initialize: already {}, skipping", self.lifecycle());
            return Ok(());
        }

        if let Some(snapshot) = self.slot.load() {
            reducer::apply(&mut self.movies, Command::Replace(snapshot.movies));
            if snapshot.initialized {
                info!("Board restored from slot {} ({} movies)", self.slot.key(), self.movies.len());
                self.set_lifecycle(Lifecycle::Ready);
                return Ok(());
            }
        }

        self.set_lifecycle(Lifecycle::Loading);
        info!("Loading movies from {} source", self.source.source_name());

        match self.source.fetch_movies().await {
            Ok(movies) => {
                reducer::apply(&mut self.movies, Command::Replace(movies));
                self.set_lifecycle(Lifecycle::Ready);
                info!("Board initialized with {} movies", self.movies.len());
                self.sync()
            }
            Err(e) => {
                error!("Failed to load movies from {}: {}", self.source.source_name(), e);
                self.set_lifecycle(Lifecycle::Failed(e.to_string()));
                Ok(())
            }
        }
    }

    /// Add a movie to the board. Returns `None` (and changes nothing) when the name is blank.
    pub fn add(&mut self, name: &str, genre: &str, status: WatchStatus) -> Result<Option<MovieId>, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            debug!("add: ignoring movie with empty name");
            return Ok(None);
        }

        let movies = &self.movies;
        let id = self.ids.next_id(|candidate| movies.iter().any(|m| &m.id == candidate));
        let movie = Movie::new(id.clone(), name, genre.trim(), status);

        let outcome = self.dispatch(Command::Add(movie))?;
        if outcome.is_applied() {
            info!("Added {} ({}) to {}", name, id, status);
            Ok(Some(id))
        } else {
            Ok(None)
        }
    }

    /// Move a movie to another column. Returns whether the id was found.
    pub fn set_status(&mut self, id: &MovieId, status: WatchStatus) -> Result<bool, StoreError> {
        let outcome = self.dispatch(Command::SetStatus { id: id.clone(), status })?;
        Ok(outcome.is_applied())
    }

    /// Overwrite name, genre, rating and review in one go. The rating is clamped to 0-5.
    pub fn set_review(
        &mut self,
        id: &MovieId,
        name: &str,
        genre: &str,
        rating: i64,
        review: &str,
    ) -> Result<bool, StoreError> {
        let outcome = self.dispatch(Command::SetReview {
            id: id.clone(),
            name: name.to_string(),
            genre: genre.to_string(),
            rating: Rating::new(rating),
            review: review.to_string(),
        })?;
        Ok(outcome.is_applied())
    }

    pub fn remove(&mut self, id: &MovieId) -> Result<bool, StoreError> {
        let outcome = self.dispatch(Command::Remove { id: id.clone() })?;
        Ok(outcome.is_applied())
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Wipe the persisted slot and the in-memory board.
    /// The next `initialize()` fetches from the source again.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.slot.clear()?;
        self.movies.clear();
        self.search_query.clear();
        self.set_lifecycle(Lifecycle::Uninitialized);
        info!("Reset board in slot {}", self.slot.key());
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<Outcome, StoreError> {
        let outcome = reducer::apply(&mut self.movies, command);
        if outcome.is_applied() {
            self.sync()?;
        }
        Ok(outcome)
    }

    /// Post-mutation hook: mirror the persisted slice to the slot
    fn sync(&self) -> Result<(), StoreError> {
        self.slot.save(&self.snapshot())
    }

    fn set_lifecycle(&self, lifecycle: Lifecycle) {
        debug!("Lifecycle -> {}", lifecycle);
        self.lifecycle.send_replace(lifecycle);
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.movies.clone(), self.lifecycle.borrow().is_initialized())
    }

    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| &m.id == id)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filtered(&self) -> Vec<&Movie> {
        views::filter_movies(&self.movies, &self.search_query)
    }

    pub fn by_status(&self, status: WatchStatus) -> Vec<&Movie> {
        views::movies_with_status(&self.movies, &self.search_query, status)
    }

    pub fn columns(&self) -> BoardColumns<'_> {
        BoardColumns::build(&self.movies, &self.search_query)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.borrow().is_loading()
    }

    /// Watch lifecycle transitions, e.g. to show a spinner while the source is loading
    pub fn subscribe_lifecycle(&self) -> watch::Receiver<Lifecycle> {
        self.lifecycle.subscribe()
    }

    pub fn slot_key(&self) -> &str {
        self.slot.key()
    }
}
