//! Configuration for pathgraph
//!
//! Configuration is read from TOML. Every field is optional:
//!
//! ```toml
//! [graph]
//! kind = "undirected"
//! strategy = "breadth-first"
//! undirected_edges = "short-circuit"
//!
//! [logging]
//! level = "debug"
//! json = false
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};

pub use types::{Config, GraphConfig, LoggingConfig};

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            kind = %config.graph.kind,
            strategy = %config.graph.strategy,
            "loaded config"
        );
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::failed_operation("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgePolicy, GraphKind, Strategy};
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.graph.kind, GraphKind::Directed);
        assert_eq!(config.graph.strategy, Strategy::BreadthFirst);
        assert_eq!(config.graph.undirected_edges, EdgePolicy::ShortCircuit);
        assert!(!config.logging.verbose);
        assert!(config.logging.level.is_none());
        assert!(!config.logging.json);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full_document() {
        let config = Config::from_toml_str(
            r#"
            [graph]
            kind = "undirected"
            strategy = "depth-first"
            undirected_edges = "symmetric"

            [logging]
            verbose = true
            level = "pathgraph=trace"
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.graph.kind, GraphKind::Undirected);
        assert_eq!(config.graph.strategy, Strategy::DepthFirst);
        assert_eq!(config.graph.undirected_edges, EdgePolicy::Symmetric);
        assert!(config.logging.verbose);
        assert_eq!(config.logging.level.as_deref(), Some("pathgraph=trace"));
        assert!(config.logging.json);
    }

    #[test]
    fn test_strategy_short_alias() {
        let config = Config::from_toml_str("[graph]\nstrategy = \"dfs\"\n").unwrap();
        assert_eq!(config.graph.strategy, Strategy::DepthFirst);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = Config::from_toml_str("[graph]\nkind = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pathgraph.toml");

        let config = Config {
            graph: GraphConfig {
                kind: GraphKind::Undirected,
                strategy: Strategy::DepthFirst,
                undirected_edges: EdgePolicy::Symmetric,
            },
            logging: LoggingConfig {
                level: Some("debug".to_string()),
                ..Default::default()
            },
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
