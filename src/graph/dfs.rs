//! Depth-first path search


use crate::graph::traversal::{edge_between, Traversal};
use crate::graph::types::{Edge, VertexId};
use crate::graph::vertices::{Adjacent, Vertices};
use crate::trace_time;
use std::collections::HashSet;
use std::hash::Hash;
use std::time::Instant;

/// Depth-first search.
///
/// Explores one branch completely before backtracking and returns the first
/// path it reaches the destination along. The result is a valid path but not
/// necessarily the shortest one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirst;

/// One level of the explicit stack: a vertex on the current branch and the
/// neighbors not yet tried from it
struct Frame<'a> {
    vertex: VertexId,
    pending: Adjacent<'a>,
}

/// Find the chain of vertices from `source` to `destination`, both included
fn search<V: Eq + Hash>(
    vertices: &Vertices<V>,
    source: VertexId,
    destination: VertexId,
) -> Option<Vec<VertexId>> {
    if source == destination {
        return Some(vec![source]);
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    visited.insert(source);
    let mut stack = vec![Frame {
        vertex: source,
        pending: vertices.adjacent(source),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.pending.next() else {
            stack.pop();
            continue;
        };

        // The stack holds exactly the current branch
        if next == destination {
            let mut chain: Vec<VertexId> = stack.iter().map(|frame| frame.vertex).collect();
            chain.push(destination);
            return Some(chain);
        }

        if visited.insert(next) {
            stack.push(Frame {
                vertex: next,
                pending: vertices.adjacent(next),
            });
        }
    }

    tracing::trace!(visited = visited.len(), "dfs exhausted reachable vertices");
    None
}

impl<V: Eq + Hash + Clone> Traversal<V> for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn find_path(
        &self,
        vertices: &Vertices<V>,
        source: VertexId,
        destination: VertexId,
    ) -> Vec<Edge<V>> {
        let start = Instant::now();

        let path: Vec<Edge<V>> = match search(vertices, source, destination) {
            Some(chain) => chain
                .windows(2)
                .map(|step| edge_between(vertices, step[0], step[1]))
                .collect(),
            None => Vec::new(),
        };

        trace_time!(start, "dfs_find_path", path_len = path.len());
        path
    }
}
