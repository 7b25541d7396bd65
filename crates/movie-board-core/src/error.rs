use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write slot '{key}': {source}")]
    Persist {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode board snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
