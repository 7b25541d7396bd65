use async_trait::async_trait;
use movie_board_models::Movie;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use crate::{MovieSource, SourceError};

/// Response body of the movies endpoint.
/// Older deployments wrap the list in `data` instead of `movies`.
#[derive(Debug, Deserialize)]
struct MoviesEnvelope {
    #[serde(alias = "data")]
    movies: Vec<Movie>,
}

/// Decode an endpoint response body into movies
pub fn parse_movies(body: &str) -> Result<Vec<Movie>, SourceError> {
    serde_json::from_str::<MoviesEnvelope>(body)
        .map(|envelope| envelope.movies)
        .map_err(|e| SourceError::Decode(e.to_string()))
}

/// Fetches the initial collection from a JSON endpoint with a single GET.
#[derive(Clone)]
pub struct HttpSource {
    client: Arc<Client>,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            url: url.into(),
        }
    }
}

#[async_trait]
impl MovieSource for HttpSource {
    fn source_name(&self) -> &str {
        "http"
    }

    async fn fetch_movies(&self) -> Result<Vec<Movie>, SourceError> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| SourceError::Request { url: self.url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| SourceError::Request { url: self.url.clone(), source })?;
        let movies = parse_movies(&body)?;
        info!("Fetched {} movies from {}", movies.len(), self.url);
        Ok(movies)
    }
}
