use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use super::edge::{Edge, EdgeId, VertexPair};
use super::error::Error;
use super::neighbors::Neighbors;
use super::Weight;
use crate::arena::Arena;
use crate::dict::ChainedHashMap;
use crate::list::{DList, NodeHandle};

/// Per-vertex state kept in the vertex table.
#[derive(Debug, Clone)]
struct VertexRecord {
    /// Incident edges, one entry per edge (self-edges included once).
    adjacency: DList<EdgeId>,
    /// Slot of the vertex in the enumeration sequence.
    position: NodeHandle,
}

fn breach<E: Into<Error>>(err: E) -> Error {
    let err = err.into();
    tracing::error!(?err, "graph invariant violated");
    err
}

/// Weighted undirected graph. Self-edges are permitted, parallel edges are
/// not: adding an existing edge updates its weight.
///
/// Vertices are caller-supplied identities of type `V`. Each edge record is
/// stored once, in an arena, and linked into the adjacency sequence of each
/// endpoint by handle, so removing an edge never searches a sequence.
///
/// | operation | cost |
/// |---|---|
/// | `add_vertex`, `is_vertex`, `degree` | O(1) expected |
/// | `add_edge`, `remove_edge`, `is_edge`, `weight` | O(1) expected |
/// | `remove_vertex`, `get_neighbors` | O(d) |
/// | `get_vertices` | O(\|V\|) |
///
/// Operations naming a vertex or edge that does not exist leave the graph
/// unchanged.
#[derive(Debug, Clone)]
pub struct WUGraph<V>
where
    V: Hash + Eq + Clone + Debug,
{
    order: DList<V>,
    vertices: ChainedHashMap<V, VertexRecord>,
    edges: ChainedHashMap<VertexPair<V>, EdgeId>,
    records: Arena<Edge<V>>,
    vertex_count: usize,
    edge_count: usize,
}

impl<V> Default for WUGraph<V>
where
    V: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> WUGraph<V>
where
    V: Hash + Eq + Clone + Debug,
{
    /// Creates a graph with no vertices or edges.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: DList::new(),
            vertices: ChainedHashMap::new(),
            edges: ChainedHashMap::new(),
            records: Arena::new(),
            vertex_count: 0,
            edge_count: 0,
        }
    }

    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns every vertex in insertion order.
    ///
    /// The vector is a fresh copy; it does not track later changes.
    #[must_use]
    pub fn get_vertices(&self) -> Vec<V> {
        self.order.iter().cloned().collect()
    }

    /// Adds `vertex` with no incident edges. No-op if it is already present.
    pub fn add_vertex(&mut self, vertex: V) {
        if self.is_vertex(&vertex) {
            return;
        }
        tracing::trace!(?vertex, "adding vertex");
        let position = self.order.push_back(vertex.clone());
        self.vertices.resize();
        self.vertices.insert(
            vertex,
            VertexRecord {
                adjacency: DList::new(),
                position,
            },
        );
        self.vertex_count += 1;
    }

    /// Removes `vertex` and every edge incident on it. No-op if `vertex` is
    /// not in the graph.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] only if the graph's internal bookkeeping is
    /// inconsistent.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), Error> {
        if !self.is_vertex(vertex) {
            return Ok(());
        }
        self.remove_edges_of(vertex)?;

        if let Some(entry) = self.vertices.remove(vertex) {
            self.vertex_count -= 1;
            let (_, record) = entry.into_parts();
            self.order.remove(record.position).map_err(breach)?;
            tracing::trace!(?vertex, "removed vertex");
        }
        Ok(())
    }

    #[must_use]
    pub fn is_vertex(&self, vertex: &V) -> bool {
        self.vertices.find(vertex).is_some()
    }

    /// Number of edges incident on `vertex`; a self-edge counts once.
    /// Zero if `vertex` is not in the graph.
    #[must_use]
    pub fn degree(&self, vertex: &V) -> usize {
        self.vertices
            .find(vertex)
            .map_or(0, |entry| entry.value().adjacency.len())
    }

    fn edge(&self, id: EdgeId) -> Option<&Edge<V>> {
        let edge = self.records.get(id.0);
        if edge.is_none() {
            tracing::error!(?id, "adjacency references a dropped edge");
        }
        edge
    }

    /// Returns the neighbors of `vertex` with the weight of each connecting
    /// edge, in the order the edges were added.
    ///
    /// A self-edge lists `vertex` as its own neighbor. Returns `None` if
    /// `vertex` has degree zero or is not in the graph.
    ///
    /// Debug builds panic if the adjacency sequence of `vertex` names an
    /// edge record that no longer exists.
    #[must_use]
    pub fn get_neighbors(&self, vertex: &V) -> Option<Neighbors<V>> {
        let record = self.vertices.find(vertex)?.value();
        if record.adjacency.is_empty() {
            return None;
        }

        let mut neighbors = Neighbors::with_capacity(record.adjacency.len());
        for edge in record.adjacency.iter().filter_map(|id| self.edge(*id)) {
            neighbors.push(edge.opposite(vertex).clone(), edge.weight);
        }
        debug_assert_eq!(
            neighbors.len(),
            record.adjacency.len(),
            "adjacency of {vertex:?} references dropped edges"
        );
        Some(neighbors)
    }

    /// Adds the edge `(u, v)` with `weight`, or updates the weight if the
    /// edge already exists. No-op unless both `u` and `v` are vertices.
    pub fn add_edge(&mut self, u: V, v: V, weight: Weight) {
        if !self.is_vertex(&u) || !self.is_vertex(&v) {
            return;
        }

        let key = VertexPair::new(u, v);
        if let Some(id) = self.edges.find(&key).map(|entry| *entry.value()) {
            if let Some(edge) = self.records.get_mut(id.0) {
                tracing::trace!(?key, from = edge.weight, to = weight, "updating edge weight");
                edge.weight = weight;
            }
            return;
        }

        let id = EdgeId(self.records.insert(Edge {
            weight,
            ends: [key.first().clone(), key.second().clone()],
            nodes: [None; 2],
        }));

        let first = self
            .vertices
            .find_mut(key.first())
            .map(|entry| entry.value_mut().adjacency.push_back(id));
        let second = if key.is_loop() {
            None
        } else {
            self.vertices
                .find_mut(key.second())
                .map(|entry| entry.value_mut().adjacency.push_back(id))
        };
        if let Some(edge) = self.records.get_mut(id.0) {
            edge.nodes = [first, second];
        }

        tracing::trace!(?key, weight, "adding edge");
        self.edges.resize();
        self.edges.insert(key, id);
        self.edge_count += 1;
    }

    /// Removes the edge `(u, v)`. No-op if it does not exist.
    ///
    /// The edge is unlinked from both adjacency sequences through its stored
    /// handles in O(1).
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] only if the graph's internal bookkeeping is
    /// inconsistent.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> Result<(), Error> {
        if !self.is_vertex(u) || !self.is_vertex(v) {
            return Ok(());
        }
        let key = VertexPair::new(u.clone(), v.clone());
        let Some(id) = self.edges.find(&key).map(|entry| *entry.value()) else {
            return Ok(());
        };

        let edge = self
            .records
            .remove(id.0)
            .ok_or(Error::StaleEdge(id))
            .map_err(breach)?;
        for (end, node) in edge.ends.iter().zip(edge.nodes) {
            let Some(node) = node else {
                continue;
            };
            let record = self
                .vertices
                .find_mut(end)
                .ok_or(Error::DanglingEdge(id))
                .map_err(breach)?;
            record.value_mut().adjacency.remove(node).map_err(breach)?;
        }

        self.edges.remove(&key);
        self.edge_count -= 1;
        tracing::trace!(?u, ?v, "removed edge");
        Ok(())
    }

    /// Removes every edge incident on `vertex`, leaving the vertex itself.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] only if the graph's internal bookkeeping is
    /// inconsistent.
    pub fn remove_edges_of(&mut self, vertex: &V) -> Result<(), Error> {
        let Some(neighbors) = self.get_neighbors(vertex) else {
            return Ok(());
        };
        for neighbor in &neighbors.neighbor_list {
            self.remove_edge(vertex, neighbor)?;
        }
        Ok(())
    }

    fn find_edge(&self, u: &V, v: &V) -> Option<&Edge<V>> {
        if !self.is_vertex(u) || !self.is_vertex(v) {
            return None;
        }
        let id = *self
            .edges
            .find(&VertexPair::new(u.clone(), v.clone()))?
            .value();
        self.edge(id)
    }

    /// Returns `true` if `(u, v)` is an edge. Symmetric in `u` and `v`.
    #[must_use]
    pub fn is_edge(&self, u: &V, v: &V) -> bool {
        self.find_edge(u, v).is_some()
    }

    /// Weight of `(u, v)`, or `None` if it is not an edge.
    #[must_use]
    pub fn try_weight(&self, u: &V, v: &V) -> Option<Weight> {
        self.find_edge(u, v).map(|edge| edge.weight)
    }

    /// Weight of `(u, v)`, or `0` if it is not an edge.
    ///
    /// A zero-weight edge and a missing edge look the same here; use
    /// [`try_weight`](Self::try_weight) or [`is_edge`](Self::is_edge) to
    /// tell them apart.
    #[must_use]
    pub fn weight(&self, u: &V, v: &V) -> Weight {
        self.try_weight(u, v).unwrap_or(0)
    }

    /// Returns every edge once as `(u, v, weight)`, with `u` and `v` in the
    /// order they were first passed to [`add_edge`](Self::add_edge).
    #[must_use]
    pub fn edge_list(&self) -> Vec<(V, V, Weight)> {
        self.records
            .iter()
            .map(|(_, edge)| (edge.ends[0].clone(), edge.ends[1].clone(), edge.weight))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WUGraph<&'static str> {
        let mut graph = WUGraph::new();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v);
        }
        graph.add_edge("a", "b", 1);
        graph.add_edge("b", "c", 2);
        graph.add_edge("a", "c", 3);
        graph
    }

    /// Checks that counts, tables and adjacency sequences agree.
    fn assert_consistent<V>(graph: &WUGraph<V>)
    where
        V: Hash + Eq + Clone + Debug,
    {
        assert_eq!(graph.vertex_count, graph.vertices.size());
        assert_eq!(graph.vertex_count, graph.order.len());
        assert_eq!(graph.edge_count, graph.edges.size());
        assert_eq!(graph.edge_count, graph.records.len());

        let mut incidences = 0;
        for (_, edge) in graph.records.iter() {
            assert!(graph.is_vertex(&edge.ends[0]));
            assert!(graph.is_vertex(&edge.ends[1]));
            incidences += if edge.ends[0] == edge.ends[1] { 1 } else { 2 };
        }
        let degree_sum: usize = graph.get_vertices().iter().map(|v| graph.degree(v)).sum();
        assert_eq!(degree_sum, incidences);
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = WUGraph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_vertex(1);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.get_vertices(), [1, 2]);
        assert_consistent(&graph);
    }

    #[test]
    fn test_triangle() {
        let graph = triangle();

        assert_eq!(graph.edge_count(), 3);
        assert!(graph.is_edge(&"a", &"b"));
        assert!(graph.is_edge(&"b", &"a"));
        assert_eq!(graph.weight(&"c", &"b"), 2);
        assert_eq!(graph.degree(&"a"), 2);

        let neighbors = graph.get_neighbors(&"a").unwrap();
        assert_eq!(neighbors.neighbor_list, ["b", "c"]);
        assert_eq!(neighbors.weight_list, [1, 3]);
        assert_consistent(&graph);
    }

    #[test]
    fn test_existing_edge_updates_weight_only() {
        let mut graph = triangle();
        graph.add_edge("b", "a", 10);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree(&"a"), 2);
        assert_eq!(graph.weight(&"a", &"b"), 10);
        assert_consistent(&graph);
    }

    #[test]
    fn test_edge_requires_both_vertices() {
        let mut graph = triangle();
        graph.add_edge("a", "z", 5);

        assert_eq!(graph.edge_count(), 3);
        assert!(!graph.is_edge(&"a", &"z"));
        assert_eq!(graph.try_weight(&"a", &"z"), None);
        assert_eq!(graph.degree(&"z"), 0);
        assert!(graph.get_neighbors(&"z").is_none());
    }

    #[test]
    fn test_self_edge() {
        let mut graph = WUGraph::new();
        graph.add_vertex('x');
        graph.add_edge('x', 'x', 4);

        assert_eq!(graph.degree(&'x'), 1);
        assert_eq!(graph.edge_count(), 1);
        let neighbors = graph.get_neighbors(&'x').unwrap();
        assert_eq!(neighbors.neighbor_list, ['x']);
        assert_eq!(neighbors.weight_list, [4]);
        assert_consistent(&graph);

        graph.remove_edge(&'x', &'x').unwrap();
        assert_eq!(graph.degree(&'x'), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_edge_either_direction() {
        let mut graph = triangle();
        graph.remove_edge(&"c", &"a").unwrap();

        assert!(!graph.is_edge(&"a", &"c"));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(&"a"), 1);
        assert_eq!(graph.degree(&"c"), 1);
        assert_eq!(graph.get_neighbors(&"c").unwrap().neighbor_list, ["b"]);

        // Removing again is a no-op.
        graph.remove_edge(&"a", &"c").unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let mut graph = triangle();
        graph.add_edge("a", "a", 7);
        graph.remove_vertex(&"a").unwrap();

        assert!(!graph.is_vertex(&"a"));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_vertices(), ["b", "c"]);
        assert!(graph.edge_list().iter().all(|(u, v, _)| *u != "a" && *v != "a"));
        assert_consistent(&graph);

        // Removing a missing vertex is a no-op.
        graph.remove_vertex(&"a").unwrap();
        assert_eq!(graph.vertex_count(), 2);
    }

    fn edge_id(graph: &WUGraph<&'static str>, u: &'static str, v: &'static str) -> EdgeId {
        *graph
            .edges
            .find(&VertexPair::new(u, v))
            .expect("edge present")
            .value()
    }

    #[test]
    fn test_stale_edge_leaves_graph_untouched() {
        let mut graph = triangle();
        let id = edge_id(&graph, "a", "b");
        graph.records.remove(id.0);

        assert_eq!(graph.remove_edge(&"a", &"b"), Err(Error::StaleEdge(id)));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edges.size(), 3);
        assert_eq!(graph.degree(&"a"), 2);
        assert_eq!(graph.degree(&"b"), 2);
    }

    #[test]
    fn test_dangling_edge_is_reported() {
        let mut graph = triangle();
        let id = edge_id(&graph, "a", "b");
        if let Some(edge) = graph.records.get_mut(id.0) {
            edge.ends[1] = "zz";
        }

        assert_eq!(graph.remove_edge(&"a", &"b"), Err(Error::DanglingEdge(id)));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "references dropped edges")]
    fn test_neighbors_of_stale_adjacency() {
        let mut graph = triangle();
        let id = edge_id(&graph, "a", "c");
        graph.records.remove(id.0);

        let _ = graph.get_neighbors(&"a");
    }

    #[test]
    fn test_zero_weight_edge_vs_missing_edge() {
        let mut graph = WUGraph::new();
        graph.add_vertex(0);
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(0, 1, 0);

        assert_eq!(graph.weight(&0, &1), 0);
        assert_eq!(graph.weight(&0, &2), 0);
        assert_eq!(graph.try_weight(&0, &1), Some(0));
        assert_eq!(graph.try_weight(&0, &2), None);
    }

    #[test]
    fn test_readd_vertex_after_removal() {
        let mut graph = triangle();
        graph.remove_vertex(&"b").unwrap();
        graph.add_vertex("b");

        assert_eq!(graph.get_vertices(), ["a", "c", "b"]);
        assert_eq!(graph.degree(&"b"), 0);
        assert!(!graph.is_edge(&"a", &"b"));
        assert!(graph.is_edge(&"a", &"c"));
        assert_consistent(&graph);
    }

    #[test]
    fn test_many_vertices_trigger_resize() {
        let mut graph = WUGraph::new();
        for v in 0..1000u32 {
            graph.add_vertex(v);
        }
        for v in 1..1000u32 {
            graph.add_edge(v - 1, v, i64::from(v));
        }

        assert!(graph.vertices.bucket_count() > 101);
        assert!(graph.edges.bucket_count() > 101);
        assert_eq!(graph.edge_count(), 999);
        assert_eq!(graph.weight(&499, &500), 500);
        assert_consistent(&graph);

        for v in (0..1000u32).step_by(2) {
            graph.remove_vertex(&v).unwrap();
        }
        assert_eq!(graph.vertex_count(), 500);
        assert_eq!(graph.edge_count(), 0);
        assert_consistent(&graph);
    }

    #[test]
    fn test_edge_list_reports_each_edge_once() {
        let graph = triangle();
        let mut edges = graph.edge_list();
        edges.sort_by_key(|(_, _, w)| *w);
        assert_eq!(edges, [("a", "b", 1), ("b", "c", 2), ("a", "c", 3)]);
    }
}
