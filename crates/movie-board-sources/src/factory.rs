/// Source factory pattern for creating the movie source from configuration
use anyhow::Result;
use movie_board_config::{Config, SourceKind};
use std::collections::HashMap;
use crate::MovieSource;

/// Factory trait for building one kind of movie source
pub trait SourceFactory: Send + Sync {
    /// The configured `source.kind` this factory handles
    fn kind(&self) -> SourceKind;

    /// Validate the source section before creating anything
    fn validate_config(&self, config: &Config) -> Result<()>;

    fn create_source(&self, config: &Config) -> Result<Box<dyn MovieSource>>;
}

/// Registry of source factories, keyed by source kind
pub struct SourceFactoryRegistry {
    factories: HashMap<SourceKind, Box<dyn SourceFactory>>,
}

impl SourceFactoryRegistry {
    /// Create a new registry with the built-in factories registered
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };

        registry.register(Box::new(catalog::CatalogSourceFactory));
        registry.register(Box::new(http::HttpSourceFactory));

        registry
    }

    pub fn register(&mut self, factory: Box<dyn SourceFactory>) {
        self.factories.insert(factory.kind(), factory);
    }

    /// Build the source selected by `config.source.kind`
    pub fn create_from_config(&self, config: &Config) -> Result<Box<dyn MovieSource>> {
        let kind = config.source.kind;
        let factory = self
            .factories
            .get(&kind)
            .ok_or_else(|| anyhow::anyhow!("No movie source registered for {:?}", kind))?;
        factory.validate_config(config)?;
        factory.create_source(config)
    }

    pub fn is_registered(&self, kind: SourceKind) -> bool {
        self.factories.contains_key(&kind)
    }
}

impl Default for SourceFactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

mod catalog {
    use super::*;
    use crate::CatalogSource;
    use std::time::Duration;

    pub struct CatalogSourceFactory;

    impl SourceFactory for CatalogSourceFactory {
        fn kind(&self) -> SourceKind {
            SourceKind::Catalog
        }

        fn validate_config(&self, _config: &Config) -> Result<()> {
            Ok(())
        }

        fn create_source(&self, config: &Config) -> Result<Box<dyn MovieSource>> {
            Ok(Box::new(CatalogSource::new(Duration::from_millis(config.source.latency_ms))))
        }
    }
}

mod http {
    use super::*;
    use crate::HttpSource;

    pub struct HttpSourceFactory;

    impl SourceFactory for HttpSourceFactory {
        fn kind(&self) -> SourceKind {
            SourceKind::Http
        }

        fn validate_config(&self, config: &Config) -> Result<()> {
            match config.source.url.as_deref().map(str::trim) {
                Some(url) if !url.is_empty() => Ok(()),
                _ => Err(anyhow::anyhow!("HTTP source selected but source.url is not configured")),
            }
        }

        fn create_source(&self, config: &Config) -> Result<Box<dyn MovieSource>> {
            let url = config.source.url.as_deref().unwrap_or_default().trim();
            Ok(Box::new(HttpSource::new(url)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_catalog() {
        let registry = SourceFactoryRegistry::new();
        let source = registry.create_from_config(&Config::default()).unwrap();
        assert_eq!(source.source_name(), "catalog");
    }

    #[test]
    fn test_http_requires_url() {
        let registry = SourceFactoryRegistry::new();
        let mut config = Config::default();
        config.source.kind = SourceKind::Http;
        assert!(registry.create_from_config(&config).is_err());

        config.source.url = Some("http://localhost:3000/api/movies".to_string());
        let source = registry.create_from_config(&config).unwrap();
        assert_eq!(source.source_name(), "http");
    }

    #[test]
    fn test_builtins_registered() {
        let registry = SourceFactoryRegistry::default();
        assert!(registry.is_registered(SourceKind::Catalog));
        assert!(registry.is_registered(SourceKind::Http));
    }
}
