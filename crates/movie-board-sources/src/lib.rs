pub mod catalog;
pub mod error;
pub mod factory;
pub mod http;
pub mod traits;

pub use catalog::{seed_catalog, CatalogSource};
pub use error::SourceError;
pub use factory::{SourceFactory, SourceFactoryRegistry};
pub use http::{parse_movies, HttpSource};
pub use traits::MovieSource;
