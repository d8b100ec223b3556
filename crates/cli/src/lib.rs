//! wugraph CLI -- generate random weighted graphs and compute their minimum
//! spanning trees.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "wugraph",
    about = "Weighted undirected graphs and Kruskal's minimum spanning tree"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate random weighted graphs
    Generate(GenerateArgs),
    /// Compute the minimum spanning forest of each graph file
    Mst(MstArgs),
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of graphs to generate
    #[arg(long)]
    pub n_graph: u64,
    /// Number of vertices per graph
    #[arg(long)]
    pub n_vertex: u64,
    /// Number of distinct edges per graph (capped at the number of vertex pairs)
    #[arg(long)]
    pub n_edge: u64,
    /// Largest edge weight; weights are uniform in 0..=max-weight
    #[arg(long, default_value_t = 100)]
    pub max_weight: i64,
    /// Output directory for generated graph files
    #[arg(long)]
    pub output_dir: PathBuf,
}

#[derive(Debug, Parser)]
pub struct MstArgs {
    /// Input directory containing graph JSON files
    #[arg(long)]
    pub input_dir: PathBuf,
    /// Print the edges of every spanning forest
    #[arg(long)]
    pub verbose: bool,
    /// Output results as JSON (one object per file)
    #[arg(long)]
    pub json: bool,
}
