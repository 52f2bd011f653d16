//! Fixtures shared by the strategy unit tests

use crate::graph::types::{Edge, VertexId};
use crate::graph::vertices::Vertices;

/// Build an arena with values `1..=count` and the given directed links
pub(crate) fn arena(count: u32, links: &[(u32, u32)]) -> Vertices<u32> {
    let mut vertices = Vertices::new();
    for value in 1..=count {
        vertices.insert(value);
    }
    for &(from, to) in links {
        let from = id(&vertices, from);
        let to = id(&vertices, to);
        vertices.link(from, to);
    }
    vertices
}

/// Same as `arena`, inserting every link in both directions
pub(crate) fn undirected_arena(count: u32, links: &[(u32, u32)]) -> Vertices<u32> {
    let both: Vec<(u32, u32)> = links
        .iter()
        .flat_map(|&(a, b)| [(a, b), (b, a)])
        .collect();
    arena(count, &both)
}

pub(crate) fn id(vertices: &Vertices<u32>, value: u32) -> VertexId {
    vertices
        .id_of(&value)
        .unwrap_or_else(|| panic!("vertex {value} not in fixture"))
}

/// Assert that `path` chains from `source` to `destination` over existing
/// adjacency and reaches `destination` only on its last step
pub(crate) fn assert_valid_path(
    vertices: &Vertices<u32>,
    path: &[Edge<u32>],
    source: u32,
    destination: u32,
) {
    assert!(!path.is_empty(), "expected a path from {source} to {destination}");
    assert_eq!(path[0].source(), &source);
    assert_eq!(path[path.len() - 1].destination(), &destination);

    for (index, edge) in path.iter().enumerate() {
        let from = id(vertices, *edge.source());
        let to = id(vertices, *edge.destination());
        assert!(vertices.is_adjacent(from, to), "{edge} is not an edge");
        if index + 1 < path.len() {
            assert_eq!(edge.destination(), path[index + 1].source());
            assert_ne!(edge.destination(), &destination, "destination reached early");
        }
    }
}
