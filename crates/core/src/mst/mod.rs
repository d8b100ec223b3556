//! Kruskal's minimum spanning tree.
//!
//! [`min_span_tree`] reads its input only through the public enumeration API
//! of [`WUGraph`] ([`get_vertices`](WUGraph::get_vertices) and
//! [`get_neighbors`](WUGraph::get_neighbors)), sorts the collected edges by
//! weight and keeps every edge that joins two different components of a
//! [`DisjointSets`].

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use self::sort::quicksort_by_key;
use crate::dict::ChainedHashMap;
use crate::graph::{WUGraph, Weight};
use crate::set::DisjointSets;

pub mod sort;

/// One incidence collected from `get_neighbors`. Every non-self edge is
/// collected twice, once from each endpoint; the second copy is dropped by
/// the cycle check.
#[derive(Debug, Clone)]
struct Candidate<V> {
    u: V,
    v: V,
    weight: Weight,
}

/// Returns a minimum spanning forest of `graph` as a new graph.
///
/// The result has exactly the vertices of `graph`, in the same order, and a
/// subset of its edges: one spanning tree per connected component, so
/// `|V| - components` edges in total. Among equal-weight edges no particular
/// choice is guaranteed, only that the total weight is minimal. `graph` is
/// not modified.
#[must_use]
pub fn min_span_tree<V>(graph: &WUGraph<V>) -> WUGraph<V>
where
    V: Hash + Eq + Clone + Debug,
{
    let vertices = graph.get_vertices();

    let mut tree = WUGraph::new();
    for vertex in &vertices {
        tree.add_vertex(vertex.clone());
    }

    let mut candidates = Vec::with_capacity(2 * graph.edge_count());
    for vertex in &vertices {
        let Some(neighbors) = graph.get_neighbors(vertex) else {
            continue;
        };
        for (neighbor, weight) in neighbors.iter() {
            candidates.push(Candidate {
                u: vertex.clone(),
                v: neighbor.clone(),
                weight,
            });
        }
    }
    quicksort_by_key(&mut candidates, |candidate| candidate.weight);

    tracing::debug!(
        vertices = vertices.len(),
        candidates = candidates.len(),
        "building minimum spanning tree"
    );

    let mut index = ChainedHashMap::with_size_estimate(vertices.len());
    for (i, vertex) in vertices.iter().enumerate() {
        index.resize();
        index.insert(vertex.clone(), i);
    }
    let mut components = DisjointSets::new(vertices.len());

    for Candidate { u, v, weight } in candidates {
        let (Some(a), Some(b)) = (index.find(&u), index.find(&v)) else {
            continue;
        };
        if components.union(*a.value(), *b.value()) {
            tree.add_edge(u, v, weight);
        }
    }

    tracing::debug!(edges = tree.edge_count(), "minimum spanning tree built");
    tree
}

/// Sum of all edge weights of `graph`, saturating at the bounds of
/// [`Weight`] instead of overflowing.
#[must_use]
pub fn total_weight<V>(graph: &WUGraph<V>) -> Weight
where
    V: Hash + Eq + Clone + Debug,
{
    graph
        .edge_list()
        .iter()
        .fold(0, |total: Weight, (_, _, weight)| total.saturating_add(*weight))
}
