use derive_more::From;

use super::edge::EdgeId;
use crate::list::error::Error as SequenceError;

/// Broken internal invariant of a [`WUGraph`](super::WUGraph).
///
/// Never produced by a well-formed graph: missing vertices and edges are
/// no-ops, not errors. Seeing one of these means edge bookkeeping went out
/// of sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum Error {
    /// An adjacency or enumeration handle no longer resolves.
    Sequence(SequenceError),
    /// The edge table names an edge record that was already dropped.
    #[from(ignore)]
    StaleEdge(EdgeId),
    /// An edge record names an endpoint that is no longer a vertex.
    #[from(ignore)]
    DanglingEdge(EdgeId),
}
