//! pathgraph
//!
//! Generic in-memory graph with pluggable depth-first and breadth-first
//! path search.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use config::{Config, GraphConfig, LoggingConfig};
pub use error::{GraphError, Result};
pub use graph::{
    format_path, BreadthFirst, DepthFirst, Edge, EdgePolicy, Graph, GraphKind, Strategy,
    Traversal, VertexId, Vertices,
};
