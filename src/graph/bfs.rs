//! Breadth-first path search

mod path;


use crate::graph::traversal::{edge_between, Traversal};
use crate::graph::types::{Edge, VertexId};
use crate::graph::vertices::Vertices;
use crate::trace_time;
use path::reconstruct_path;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::time::Instant;

/// Breadth-first search.
///
/// Returns a path with the fewest edges. When several shortest paths exist,
/// which one is returned follows adjacency iteration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreadthFirst;

/// Run the search and return each discovered vertex's first parent, or
/// `None` when `destination` is unreachable.
///
/// Vertices are marked visited when dequeued, so a vertex may sit in the
/// frontier several times; repeats are dropped when they come up.
fn search<V: Eq + Hash>(
    vertices: &Vertices<V>,
    source: VertexId,
    destination: VertexId,
) -> Option<Vec<Option<VertexId>>> {
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut parents: Vec<Option<VertexId>> = vec![None; vertices.len()];
    let mut discovered = 0usize;
    let mut frontier: VecDeque<VertexId> = VecDeque::new();
    frontier.push_back(source);

    while let Some(current) = frontier.pop_front() {
        if !visited.insert(current) {
            continue;
        }

        for adjacent in vertices.adjacent(current) {
            if visited.contains(&adjacent) {
                continue;
            }

            discovered += 1;
            parents[adjacent.index()].get_or_insert(current);
            if adjacent == destination {
                return Some(parents);
            }
            frontier.push_back(adjacent);
        }
    }

    tracing::trace!(
        visited = visited.len(),
        discovered,
        "bfs frontier exhausted"
    );
    None
}

impl<V: Eq + Hash + Clone> Traversal<V> for BreadthFirst {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn find_path(
        &self,
        vertices: &Vertices<V>,
        source: VertexId,
        destination: VertexId,
    ) -> Vec<Edge<V>> {
        if source == destination {
            return Vec::new();
        }

        let start = Instant::now();
        let path: Vec<Edge<V>> = match search(vertices, source, destination) {
            Some(parents) => reconstruct_path(&parents, source, destination)
                .into_iter()
                .map(|(from, to)| edge_between(vertices, from, to))
                .collect(),
            None => Vec::new(),
        };

        trace_time!(start, "bfs_find_path", path_len = path.len());
        path
    }
}
