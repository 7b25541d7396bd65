pub mod config;
pub mod paths;

pub use config::{Config, LoggingConfig, SourceConfig, SourceKind, StorageConfig, DEFAULT_SLOT_KEY};
pub use paths::{PathManager, home_override};
