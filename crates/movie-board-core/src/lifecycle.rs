use serde::Serialize;
use std::fmt;

/// Where the board is in its first-load sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "error", rename_all = "lowercase")]
pub enum Lifecycle {
    /// `initialize()` has not run yet
    #[default]
    Uninitialized,
    /// Waiting on the movie source
    Loading,
    /// Collection hydrated from storage or the source
    Ready,
    /// The source fetch failed; the board stays usable with whatever it holds
    Failed(String),
}

impl Lifecycle {
    pub fn is_loading(&self) -> bool {
        matches!(self, Lifecycle::Loading)
    }

    /// Mirrors the persisted `initialized` flag
    pub fn is_initialized(&self) -> bool {
        matches!(self, Lifecycle::Ready)
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifecycle::Uninitialized => f.write_str("uninitialized"),
            Lifecycle::Loading => f.write_str("loading"),
            Lifecycle::Ready => f.write_str("ready"),
            Lifecycle::Failed(error) => write!(f, "failed ({})", error),
        }
    }
}
