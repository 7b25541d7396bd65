use async_trait::async_trait;
use movie_board_models::Movie;
use crate::SourceError;

/// Where the board's initial collection comes from on first load.
///
/// A single request/response call: no parameters, no pagination.
#[async_trait]
pub trait MovieSource: Send + Sync {
    fn source_name(&self) -> &str;

    async fn fetch_movies(&self) -> Result<Vec<Movie>, SourceError>;
}
