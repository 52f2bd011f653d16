//! Arena holding every vertex of a graph and its adjacency set
//!
//! Vertex values live in an `IndexSet`, so a vertex's position doubles as its
//! handle. Adjacency sets store handles, never values, which keeps ownership
//! of every value with the arena.

use crate::graph::types::VertexId;
use indexmap::IndexSet;
use std::collections::{btree_set, BTreeSet};
use std::hash::Hash;

/// Iterator over the handles adjacent to a vertex, in insertion order of the
/// adjacent vertices
pub type Adjacent<'a> = std::iter::Copied<btree_set::Iter<'a, VertexId>>;

/// Read view over a graph's vertices, handed to traversal strategies.
///
/// Methods taking a `VertexId` panic when given a handle that did not come
/// from this arena.
#[derive(Debug, Clone)]
pub struct Vertices<V> {
    values: IndexSet<V>,
    adjacency: Vec<BTreeSet<VertexId>>,
}

impl<V> Default for Vertices<V> {
    fn default() -> Self {
        Self {
            values: IndexSet::default(),
            adjacency: Vec::new(),
        }
    }
}

impl<V: Eq + Hash> Vertices<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up the handle for a value
    pub fn id_of(&self, value: &V) -> Option<VertexId> {
        self.values.get_index_of(value).map(VertexId::new)
    }

    /// The value a handle stands for
    pub fn value(&self, id: VertexId) -> &V {
        &self.values[id.index()]
    }

    /// Handles directly reachable from `id` over one edge
    pub fn adjacent(&self, id: VertexId) -> Adjacent<'_> {
        self.adjacency[id.index()].iter().copied()
    }

    pub fn is_adjacent(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency[from.index()].contains(&to)
    }

    /// Number of adjacency entries across all vertices. An undirected edge
    /// between two distinct vertices counts twice.
    pub fn adjacency_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum()
    }

    /// Register a value; returns false when it is already present
    pub(crate) fn insert(&mut self, value: V) -> bool {
        let inserted = self.values.insert(value);
        if inserted {
            self.adjacency.push(BTreeSet::new());
        }
        inserted
    }

    /// Add `to` to the adjacency set of `from`; returns false when it was already there
    pub(crate) fn link(&mut self, from: VertexId, to: VertexId) -> bool {
        self.adjacency[from.index()].insert(to)
    }
}
