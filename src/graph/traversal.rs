use crate::bail_unsupported;
use crate::error::GraphError;
use crate::graph::bfs::BreadthFirst;
use crate::graph::dfs::DepthFirst;
use crate::graph::types::{Edge, VertexId};
use crate::graph::vertices::Vertices;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Trait for path-finding algorithms run by `Graph::get_path`.
///
/// Implementations receive the arena and two handles from it and return the
/// edges of one path from `source` to `destination`, in order. An empty path
/// means either that `source == destination` or that no path exists.
/// Implementations hold no state between calls.
pub trait Traversal<V> {
    /// Short name used in log fields
    fn name(&self) -> &'static str;

    fn find_path(
        &self,
        vertices: &Vertices<V>,
        source: VertexId,
        destination: VertexId,
    ) -> Vec<Edge<V>>;
}

/// Build the caller-facing edge for an adjacency step
pub(crate) fn edge_between<V: Eq + Hash + Clone>(
    vertices: &Vertices<V>,
    from: VertexId,
    to: VertexId,
) -> Edge<V> {
    Edge::new(vertices.value(from).clone(), vertices.value(to).clone())
}

/// Value-level choice between the built-in strategies, for configuration
/// and for callers that pick the algorithm at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[serde(alias = "dfs")]
    DepthFirst,
    #[default]
    #[serde(alias = "bfs")]
    BreadthFirst,
}

pub const STRATEGIES: &str = "depth-first (dfs), breadth-first (bfs)";

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

impl FromStr for Strategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            other => bail_unsupported!("traversal strategy", other, STRATEGIES),
        }
    }
}

impl<V: Eq + Hash + Clone> Traversal<V> for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => Traversal::<V>::name(&DepthFirst),
            Strategy::BreadthFirst => Traversal::<V>::name(&BreadthFirst),
        }
    }

    fn find_path(
        &self,
        vertices: &Vertices<V>,
        source: VertexId,
        destination: VertexId,
    ) -> Vec<Edge<V>> {
        match self {
            Strategy::DepthFirst => DepthFirst.find_path(vertices, source, destination),
            Strategy::BreadthFirst => BreadthFirst.find_path(vertices, source, destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_str_accepts_short_names() {
        assert_eq!("dfs".parse::<Strategy>().unwrap(), Strategy::DepthFirst);
        assert_eq!("BFS".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
        assert_eq!(
            "depth-first".parse::<Strategy>().unwrap(),
            Strategy::DepthFirst
        );
        assert!("dijkstra".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_strategy_default_is_breadth_first() {
        assert_eq!(Strategy::default(), Strategy::BreadthFirst);
    }

    #[test]
    fn test_strategy_names_match_implementations() {
        assert_eq!(Traversal::<u8>::name(&Strategy::DepthFirst), "dfs");
        assert_eq!(Traversal::<u8>::name(&Strategy::BreadthFirst), "bfs");
    }

    #[test]
    fn test_strategy_dispatch() {
        let mut vertices = Vertices::new();
        for v in 0..3 {
            vertices.insert(v);
        }
        let ids: Vec<VertexId> = (0..3).filter_map(|v| vertices.id_of(&v)).collect();
        vertices.link(ids[0], ids[1]);
        vertices.link(ids[1], ids[2]);

        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let path = strategy.find_path(&vertices, ids[0], ids[2]);
            assert_eq!(path, vec![Edge::new(0, 1), Edge::new(1, 2)]);
        }
    }
}
