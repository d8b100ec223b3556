//! Weighted undirected graphs with O(1) vertex and edge operations.
//!
//! `wugraph_core` stores a weighted undirected graph on top of its own
//! resizable chained hash table and computes minimum spanning forests with
//! Kruskal's algorithm. The crate is organised leaves-first:
//!
//! 1. **[`list`]** -- a doubly linked sequence whose nodes are addressed by
//!    generation-checked handles, so removal given a handle is O(1).
//! 2. **[`dict`]** -- a chained hash table with a pluggable compression
//!    function mapping hash codes to buckets. Duplicate keys are allowed.
//! 3. **[`set`]** -- disjoint sets over `0..n` with path compression and
//!    union by rank.
//! 4. **[`graph`]** -- [`WUGraph`], mapping caller vertex identities to
//!    adjacency sequences. Each edge record is owned once, in an arena, and
//!    referenced from up to two adjacency sequences by handle.
//! 5. **[`mst`]** -- [`min_span_tree()`], reading a graph only through its
//!    public enumeration API.
//!
//! # Entry point
//!
//! ```rust,ignore
//! use wugraph_core::{min_span_tree, WUGraph};
//!
//! let mut g = WUGraph::default();
//! for v in ["a", "b", "c"] {
//!     g.add_vertex(v);
//! }
//! g.add_edge("a", "b", 1);
//! g.add_edge("b", "c", 2);
//! g.add_edge("a", "c", 3);
//!
//! let tree = min_span_tree(&g);
//! assert_eq!(tree.edge_count(), 2);
//! ```
//!
//! Operations naming a vertex that is not in the graph are no-ops or return
//! defaults. Only broken internal invariants (a stale handle) surface as
//! [`graph::error::Error`].
//!
//! This crate is `no_std` compatible (requires `alloc`).

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod arena;
pub mod dict;
pub mod graph;
pub mod list;
pub mod mst;
pub mod set;

pub use graph::{Neighbors, VertexPair, WUGraph, Weight};
pub use mst::{min_span_tree, total_weight};
