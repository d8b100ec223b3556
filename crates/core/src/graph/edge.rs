use core::hash::{BuildHasher, Hash, Hasher};

use rustc_hash::FxBuildHasher;

use super::Weight;
use crate::arena::Handle;
use crate::list::NodeHandle;

/// Identifies an edge record inside one [`WUGraph`](super::WUGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub(crate) Handle);

/// Edge record, owned by the graph's edge arena.
///
/// `nodes[i]` locates this edge inside the adjacency sequence of `ends[i]`.
/// A self-edge is linked once, so its `nodes[1]` is `None`.
#[derive(Debug, Clone)]
pub(crate) struct Edge<V> {
    pub(crate) weight: Weight,
    pub(crate) ends: [V; 2],
    pub(crate) nodes: [Option<NodeHandle>; 2],
}

impl<V: PartialEq> Edge<V> {
    /// The endpoint that is not `vertex`; `vertex` itself for a self-edge.
    pub(crate) fn opposite(&self, vertex: &V) -> &V {
        if self.ends[0] == *vertex {
            &self.ends[1]
        } else {
            &self.ends[0]
        }
    }
}

/// Unordered pair of vertices, the key of the edge table.
///
/// `VertexPair::new(a, b)` and `VertexPair::new(b, a)` are equal and hash
/// identically.
#[derive(Debug, Clone)]
pub struct VertexPair<V> {
    first: V,
    second: V,
}

impl<V> VertexPair<V> {
    #[must_use]
    pub const fn new(first: V, second: V) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub const fn first(&self) -> &V {
        &self.first
    }

    #[must_use]
    pub const fn second(&self) -> &V {
        &self.second
    }
}

impl<V: PartialEq> VertexPair<V> {
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }
}

impl<V: PartialEq> PartialEq for VertexPair<V> {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl<V: Eq> Eq for VertexPair<V> {}

impl<V: Hash> Hash for VertexPair<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Endpoints are hashed on their own with a fixed hasher and fed in
        // sorted order, so swapping them cannot change the result.
        let a = FxBuildHasher.hash_one(&self.first);
        let b = FxBuildHasher.hash_one(&self.second);
        state.write_u64(a.min(b));
        state.write_u64(a.max(b));
    }
}
