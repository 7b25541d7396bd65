pub mod movie;
pub mod movie_id;
pub mod rating;
pub mod snapshot;
pub mod status;

pub use movie::Movie;
pub use movie_id::MovieId;
pub use rating::Rating;
pub use snapshot::BoardSnapshot;
pub use status::{ParseStatusError, WatchStatus};
