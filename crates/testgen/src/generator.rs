use chrono::{DateTime, Duration, Local};
use hashbrown::HashSet;
use rand::distr::{Distribution, Uniform};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use wugraph_core::{WUGraph, Weight};

#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder)]
pub struct GraphParams {
    pub id: u64,
    pub n_vertex: u64,
    pub n_edge: u64,
    pub max_weight: Weight,
}

/// One undirected edge of a generated graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeightedEdge {
    pub u: u64,
    pub v: u64,
    pub weight: Weight,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct GraphSample {
    params: GraphParams,
    info: String,
    start: DateTime<Local>,
    end: DateTime<Local>,
    vertices: Vec<u64>,
    edges: Vec<WeightedEdge>,
}

impl GraphSample {
    #[must_use]
    pub const fn new(
        params: GraphParams,
        info: String,
        start: DateTime<Local>,
        end: DateTime<Local>,
        vertices: Vec<u64>,
        edges: Vec<WeightedEdge>,
    ) -> Self {
        Self {
            params,
            info,
            start,
            end,
            vertices,
            edges,
        }
    }

    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub const fn get_params(&self) -> &GraphParams {
        &self.params
    }

    #[must_use]
    pub fn get_vertices(&self) -> &[u64] {
        &self.vertices
    }

    #[must_use]
    pub fn get_edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    #[must_use]
    pub fn get_duration(&self) -> Duration {
        self.end - self.start
    }

    /// Builds the graph described by this sample.
    #[must_use]
    pub fn to_graph(&self) -> WUGraph<u64> {
        build_graph(&self.vertices, &self.edges)
    }
}

/// Builds a [`WUGraph`] from a vertex list and an edge list.
#[must_use]
pub fn build_graph(vertices: &[u64], edges: &[WeightedEdge]) -> WUGraph<u64> {
    let mut graph = WUGraph::new();
    for vertex in vertices {
        graph.add_vertex(*vertex);
    }
    for edge in edges {
        graph.add_edge(edge.u, edge.v, edge.weight);
    }
    graph
}

/// Number of distinct unordered vertex pairs, self-pairs included.
const fn max_edges(n_vertex: u64) -> u64 {
    n_vertex.saturating_mul(n_vertex.saturating_add(1)) / 2
}

/// Generate a graph on vertices `0..n_vertex` with `n_edge` distinct edges.
///
/// Endpoints are drawn uniformly, so self-edges occur. Weights are drawn
/// uniformly from `0..=max_weight` (a negative `max_weight` counts as 0).
/// `n_edge` is capped at the number of distinct unordered pairs.
#[must_use]
pub fn generate_single_graph(
    n_vertex: u64,
    n_edge: u64,
    max_weight: Weight,
) -> (Vec<u64>, Vec<WeightedEdge>) {
    let vertices: Vec<u64> = (0..n_vertex).collect();
    let Ok(vertex_range) = Uniform::new(0, n_vertex) else {
        return (vertices, Vec::new());
    };
    let Ok(weight_range) = Uniform::new_inclusive(0, max_weight.max(0)) else {
        return (vertices, Vec::new());
    };
    let mut random_generator = rand::rng();

    let target = n_edge.min(max_edges(n_vertex));
    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    let mut edges = Vec::new();
    while (edges.len() as u64) < target {
        let u = vertex_range.sample(&mut random_generator);
        let v = vertex_range.sample(&mut random_generator);
        if seen.insert((u.min(v), u.max(v))) {
            edges.push(WeightedEdge {
                u,
                v,
                weight: weight_range.sample(&mut random_generator),
            });
        }
    }

    (vertices, edges)
}

#[must_use]
pub fn generate_mult_graphs(
    n_graph: u64,
    n_vertex: u64,
    n_edge: u64,
    max_weight: Weight,
) -> Vec<GraphSample> {
    (0..n_graph)
        .into_par_iter()
        .map(|i_graph| {
            let start_time = Local::now();
            let (vertices, edges) = generate_single_graph(n_vertex, n_edge, max_weight);
            let end_time = Local::now();
            GraphSample {
                params: GraphParams::builder()
                    .id(i_graph)
                    .n_vertex(n_vertex)
                    .n_edge(n_edge)
                    .max_weight(max_weight)
                    .build(),
                info: "generated".to_string(),
                start: start_time,
                end: end_time,
                vertices,
                edges,
            }
        })
        .collect()
}
