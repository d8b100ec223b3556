//! Weighted undirected graph over [`ChainedHashMap`](crate::dict::ChainedHashMap).

pub mod edge;
pub mod error;
pub mod neighbors;
pub mod wugraph;

pub use edge::{EdgeId, VertexPair};
pub use neighbors::Neighbors;
pub use wugraph::WUGraph;

/// Edge weight.
pub type Weight = i64;
