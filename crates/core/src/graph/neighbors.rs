use alloc::vec::Vec;

use super::Weight;

/// Neighbors of one vertex, as returned by
/// [`WUGraph::get_neighbors`](super::WUGraph::get_neighbors).
///
/// `weight_list[i]` is the weight of the edge to `neighbor_list[i]`. Both
/// vectors are freshly allocated and always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbors<V> {
    pub neighbor_list: Vec<V>,
    pub weight_list: Vec<Weight>,
}

impl<V> Neighbors<V> {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            neighbor_list: Vec::with_capacity(capacity),
            weight_list: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, neighbor: V, weight: Weight) {
        self.neighbor_list.push(neighbor);
        self.weight_list.push(weight);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbor_list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbor_list.is_empty()
    }

    /// Iterates over `(neighbor, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Weight)> {
        self.neighbor_list
            .iter()
            .zip(self.weight_list.iter().copied())
    }
}
