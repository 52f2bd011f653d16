//! Graph storage and path-finding
//!
//! - `Graph`: value-keyed container with directed/undirected edge rules
//! - `Vertices`: the arena strategies read
//! - `DepthFirst` / `BreadthFirst`: traversal strategies passed to `Graph::get_path`

pub mod bfs;
pub mod container;
pub mod dfs;
pub mod traversal;
pub mod types;
pub mod vertices;

#[cfg(test)]
pub(crate) mod test_support;

pub use bfs::BreadthFirst;
pub use container::Graph;
pub use dfs::DepthFirst;
pub use traversal::{Strategy, Traversal};
pub use types::{format_path, Edge, EdgePolicy, GraphKind, VertexId};
pub use vertices::{Adjacent, Vertices};
