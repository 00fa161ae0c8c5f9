pub mod traits;
pub mod distance_table;
pub mod dijkstra;
pub mod bmssp;
pub mod fast_sssp;

pub use distance_table::DistanceTable;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
