use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The board column a movie sits in.
///
/// Every status is reachable from every other one; there is no terminal state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WatchStatus {
    /// Want to watch
    #[default]
    Watchlist,
    /// Currently watching
    Watching,
    /// Finished watching
    Watched,
}

impl WatchStatus {
    /// Columns in board order.
    pub const ALL: [WatchStatus; 3] = [WatchStatus::Watchlist, WatchStatus::Watching, WatchStatus::Watched];

    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::Watchlist => "watchlist",
            WatchStatus::Watching => "watching",
            WatchStatus::Watched => "watched",
        }
    }

    /// Column heading shown on the board
    pub fn label(&self) -> &'static str {
        match self {
            WatchStatus::Watchlist => "Watch List",
            WatchStatus::Watching => "Watching",
            WatchStatus::Watched => "Watched",
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid status '{}': expected one of watchlist, watching, watched",
            self.0
        )
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for WatchStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "watchlist" => Ok(WatchStatus::Watchlist),
            "watching" => Ok(WatchStatus::Watching),
            "watched" => Ok(WatchStatus::Watched),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&WatchStatus::Watching).unwrap();
        assert_eq!(json, "\"watching\"");

        let parsed: WatchStatus = serde_json::from_str("\"watched\"").unwrap();
        assert_eq!(parsed, WatchStatus::Watched);
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        assert!(serde_json::from_str::<WatchStatus>("\"dropped\"").is_err());
        assert!("dropped".parse::<WatchStatus>().is_err());
    }

    #[test]
    fn test_status_from_str_is_case_insensitive() {
        assert_eq!("Watchlist".parse::<WatchStatus>().unwrap(), WatchStatus::Watchlist);
        assert_eq!(" WATCHING ".parse::<WatchStatus>().unwrap(), WatchStatus::Watching);
    }

    #[test]
    fn test_default_status_is_watchlist() {
        assert_eq!(WatchStatus::default(), WatchStatus::Watchlist);
    }
}
