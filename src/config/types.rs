//! Configuration type definitions

use crate::graph::{EdgePolicy, GraphKind, Strategy};
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Structured logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings applied when a graph is created with `Graph::with_config`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Directed or undirected, fixed for the graph's lifetime
    #[serde(default)]
    pub kind: GraphKind,

    /// Strategy used by `Graph::find_path`
    #[serde(default)]
    pub strategy: Strategy,

    /// How undirected edge inserts report success
    #[serde(default)]
    pub undirected_edges: EdgePolicy,
}

/// Settings for `logging::init_from_config`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log at debug level when no explicit level is set
    #[serde(default)]
    pub verbose: bool,

    /// Level or filter directive, e.g. `"trace"` or `"pathgraph=debug"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}
