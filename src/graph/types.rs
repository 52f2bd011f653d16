use crate::bail_unsupported;
use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Handle to a vertex inside a graph's arena.
///
/// Handles are dense indices assigned in insertion order and are only
/// meaningful for the graph that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        VertexId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Whether edges are one-way or symmetric. Fixed for the lifetime of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

pub const GRAPH_KINDS: &str = "directed, undirected";

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

impl FromStr for GraphKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "directed" => Ok(GraphKind::Directed),
            "undirected" => Ok(GraphKind::Undirected),
            other => bail_unsupported!("graph kind", other, GRAPH_KINDS),
        }
    }
}

/// How an undirected `add_edge` applies its two adjacency inserts.
///
/// `ShortCircuit` inserts `source -> destination` first and only attempts
/// `destination -> source` when the first insert was new; the result is the
/// conjunction of the attempted inserts. `Symmetric` always performs both
/// inserts and reports success when either one was new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgePolicy {
    #[default]
    ShortCircuit,
    Symmetric,
}

pub const EDGE_POLICIES: &str = "short-circuit, symmetric";

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgePolicy::ShortCircuit => write!(f, "short-circuit"),
            EdgePolicy::Symmetric => write!(f, "symmetric"),
        }
    }
}

impl FromStr for EdgePolicy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short-circuit" => Ok(EdgePolicy::ShortCircuit),
            "symmetric" => Ok(EdgePolicy::Symmetric),
            other => bail_unsupported!("undirected edge policy", other, EDGE_POLICIES),
        }
    }
}

/// One step of a path, from `source` to `destination`.
///
/// Edges are produced by path queries; the graph itself stores adjacency,
/// not edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    source: V,
    destination: V,
}

impl<V> Edge<V> {
    pub fn new(source: V, destination: V) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn destination(&self) -> &V {
        &self.destination
    }

    pub fn into_parts(self) -> (V, V) {
        (self.source, self.destination)
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}

/// Render a path as `[a->b, b->c]`
pub fn format_path<V: fmt::Display>(path: &[Edge<V>]) -> String {
    let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
    format!("[{}]", steps.join(", "))
}
