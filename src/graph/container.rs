use crate::config::GraphConfig;
use crate::graph::traversal::{Strategy, Traversal};
use crate::graph::types::{Edge, EdgePolicy, GraphKind};
use crate::graph::vertices::Vertices;
use parking_lot::Mutex;
use std::hash::Hash;

/// In-memory graph keyed by vertex value.
///
/// Vertices and edges only accumulate; nothing is ever removed. Every
/// operation takes the same lock, so a `Graph` can be shared between threads
/// (e.g. behind an `Arc`) and each call observes the graph either before or
/// after any other call, never in between. Path queries run the traversal
/// while holding the lock.
#[derive(Debug)]
pub struct Graph<V> {
    kind: GraphKind,
    edge_policy: EdgePolicy,
    strategy: Strategy,
    vertices: Mutex<Vertices<V>>,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            edge_policy: EdgePolicy::default(),
            strategy: Strategy::default(),
            vertices: Mutex::new(Vertices::new()),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Create an empty graph with kind, edge policy and default strategy
    /// taken from configuration
    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            kind: config.kind,
            edge_policy: config.undirected_edges,
            strategy: config.strategy,
            vertices: Mutex::new(Vertices::new()),
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Strategy used by `find_path`
    pub fn default_strategy(&self) -> Strategy {
        self.strategy
    }

    /// Register a vertex. Returns false, changing nothing, if the value is
    /// already present.
    pub fn add_vertex(&self, value: V) -> bool {
        let inserted = self.vertices.lock().insert(value);
        if !inserted {
            tracing::trace!(kind = %self.kind, "vertex already present");
        }
        inserted
    }

    /// Connect two existing vertices.
    ///
    /// Returns false without changes when either endpoint is unknown. In a
    /// directed graph the result says whether `source -> destination` is new.
    /// In an undirected graph both directions are inserted and the result
    /// follows the graph's `EdgePolicy`.
    pub fn add_edge(&self, source: &V, destination: &V) -> bool {
        let mut vertices = self.vertices.lock();
        let (Some(from), Some(to)) = (vertices.id_of(source), vertices.id_of(destination)) else {
            tracing::trace!(kind = %self.kind, "edge endpoint not in graph");
            return false;
        };

        let inserted = match (self.kind, self.edge_policy) {
            (GraphKind::Directed, _) => vertices.link(from, to),
            (GraphKind::Undirected, EdgePolicy::ShortCircuit) => {
                vertices.link(from, to) && vertices.link(to, from)
            }
            (GraphKind::Undirected, EdgePolicy::Symmetric) => {
                let forward = vertices.link(from, to);
                let backward = vertices.link(to, from);
                forward || backward
            }
        };
        if !inserted {
            tracing::trace!(kind = %self.kind, "edge already present");
        }
        inserted
    }

    /// Find a path from `source` to `destination` with the given strategy.
    ///
    /// Empty when either value is not a vertex, when no path exists, or when
    /// `source == destination`.
    #[tracing::instrument(skip_all, fields(kind = %self.kind, strategy = strategy.name()))]
    pub fn get_path<T>(&self, source: &V, destination: &V, strategy: &T) -> Vec<Edge<V>>
    where
        T: Traversal<V> + ?Sized,
    {
        let vertices = self.vertices.lock();
        let (Some(from), Some(to)) = (vertices.id_of(source), vertices.id_of(destination)) else {
            tracing::debug!("path endpoint not in graph");
            return Vec::new();
        };

        let path = strategy.find_path(&vertices, from, to);
        tracing::debug!(path_len = path.len(), "path query complete");
        path
    }

    /// `get_path` with the graph's default strategy
    pub fn find_path(&self, source: &V, destination: &V) -> Vec<Edge<V>> {
        self.get_path(source, destination, &self.strategy)
    }

    pub fn contains_vertex(&self, value: &V) -> bool {
        self.vertices.lock().id_of(value).is_some()
    }

    /// Whether `destination` is in the adjacency set of `source`
    pub fn has_edge(&self, source: &V, destination: &V) -> bool {
        let vertices = self.vertices.lock();
        match (vertices.id_of(source), vertices.id_of(destination)) {
            (Some(from), Some(to)) => vertices.is_adjacent(from, to),
            _ => false,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.lock().len()
    }

    /// Number of adjacency entries. An undirected edge between two distinct
    /// vertices counts twice, a self-loop once.
    pub fn edge_count(&self) -> usize {
        self.vertices.lock().adjacency_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.lock().is_empty()
    }
}
