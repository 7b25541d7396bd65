pub mod error;
pub mod ids;
pub mod lifecycle;
pub mod reducer;
pub mod slot;
pub mod store;
pub mod views;

pub use error::StoreError;
pub use ids::IdGenerator;
pub use lifecycle::Lifecycle;
pub use reducer::{apply, Command, Outcome};
pub use slot::{JsonFileSlot, MemorySlot, PersistenceSlot};
pub use store::{MovieStore, SharedMovieStore};
pub use views::{filter_movies, movies_with_status, BoardColumns};
