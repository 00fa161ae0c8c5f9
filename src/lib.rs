//! BMSSP - Bounded Multi-Source Shortest Paths
//!
//! This library implements the recursive divide-and-conquer shortest path
//! procedure from "Breaking the Sorting Barrier for Directed Single-Source
//! Shortest Paths" by Duan et al. (2025), on graphs with non-negative edge
//! weights.
//!
//! A call at level `l` with boundary `B` and sources `S` selects pivots among
//! `S`, extracts them in ascending batches from an ordered batch structure,
//! and recurses one level down on each batch until level 0 runs a bounded
//! Dijkstra. Every call returns a finalized boundary `B' <= B` together with
//! the vertices whose distances are final below it.
//!
//! ```no_run
//! use bmssp::{DirectedGraph, FastSSSP, ShortestPathAlgorithm, ShortestPathResult};
//! use bmssp::graph::MutableGraph;
//! use ordered_float::OrderedFloat;
//!
//! let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_capacity(3);
//! graph.add_edge(0, 1, OrderedFloat(1.0));
//! graph.add_edge(1, 2, OrderedFloat(2.5));
//!
//! let result: ShortestPathResult<OrderedFloat<f64>> = FastSSSP::new().compute_shortest_paths(&graph, &[0]).unwrap();
//! assert_eq!(result.distances[2], Some(OrderedFloat(3.5)));
//! ```

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bmssp::{Bmssp, BmsspResult},
    dijkstra::Dijkstra,
    fast_sssp::{BmsspOutcome, FastSSSP},
    DistanceTable, ShortestPathAlgorithm, ShortestPathResult,
};
pub use config::SolverConfig;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
