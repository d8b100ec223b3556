//! Random weighted graph generation for fixtures, benchmarks and
//! cross-checks of `wugraph_core`.

pub mod generator;
