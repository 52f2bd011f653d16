//! Path reconstruction from breadth-first parent links

use crate::graph::types::VertexId;

/// Walk the parent links back from `destination` to `source` and return the
/// `(parent, child)` steps in forward order.
///
/// `parents[v]` holds the parent through which `v` was first discovered. A
/// vertex can be reached from several parents before it is expanded; the
/// first one was dequeued earliest, so it lies one level closer to the
/// source and the path stays minimal. Empty when the links do not lead back
/// to `source`.
pub(super) fn reconstruct_path(
    parents: &[Option<VertexId>],
    source: VertexId,
    destination: VertexId,
) -> Vec<(VertexId, VertexId)> {
    let mut path = Vec::new();
    let mut current = destination;

    while current != source {
        let Some(parent) = parents.get(current.index()).copied().flatten() else {
            return Vec::new();
        };
        path.push((parent, current));
        current = parent;
    }

    path.reverse();
    path
}
