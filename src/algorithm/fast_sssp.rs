use std::fmt::Debug;
use num_traits::{Float, NumCast, Zero};
use log::info;

use crate::algorithm::bmssp::Bmssp;
use crate::algorithm::{DistanceTable, ShortestPathAlgorithm, ShortestPathResult};
use crate::config::SolverConfig;
use crate::graph::Graph;
use crate::{Error, Result};

/// Everything a top-level BMSSP run produces
#[derive(Debug, Clone)]
pub struct BmsspOutcome<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Finalized top-level boundary, never above the configured one
    pub boundary: W,

    /// Settled vertices, ascending
    pub settled: Vec<usize>,

    /// Final distances and predecessors; unreached vertices stay at +infinity
    pub table: DistanceTable<W>,
}

/// Top-level driver for the BMSSP solver.
///
/// Validates the input, resolves `k`, `t` and the starting level from the
/// graph size and its [`SolverConfig`], then runs one [`Bmssp`] call.
#[derive(Debug, Clone, Default)]
pub struct FastSSSP {
    config: SolverConfig,
}

impl FastSSSP {
    /// Create a new FastSSSP instance with every parameter derived from the graph
    pub fn new() -> Self {
        FastSSSP {
            config: SolverConfig::default(),
        }
    }

    pub fn with_config(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(FastSSSP { config })
    }

    /// Override `k` and `t`; zero is clamped to one
    pub fn with_params(mut self, k: usize, t: usize) -> Self {
        self.config.k = Some(k.max(1));
        self.config.t = Some(t.max(1));
        self
    }

    /// Override the top-level recursion level
    pub fn with_level(mut self, level: usize) -> Self {
        self.config.level = Some(level);
        self
    }

    /// Only settle vertices strictly below `boundary`
    pub fn with_boundary(mut self, boundary: f64) -> Self {
        self.config.boundary = Some(boundary);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs BMSSP from `sources` and returns the raw outcome
    pub fn solve<W, G>(&self, graph: &G, sources: &[usize]) -> Result<BmsspOutcome<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        self.config.validate()?;

        if sources.is_empty() {
            return Err(Error::InvalidInput("source list is empty".to_string()));
        }
        let n = graph.vertex_count();
        if let Some(&source) = sources.iter().find(|&&s| s >= n) {
            return Err(Error::InvalidVertex(source));
        }
        if self.config.validate_weights {
            check_weights::<W, G>(graph)?;
        }

        let params = self.config.resolve(n);
        let boundary = match self.config.boundary {
            Some(b) => <W as NumCast>::from(b).unwrap_or_else(W::infinity),
            None => W::infinity(),
        };
        info!(
            "bmssp: n={}, m={}, k={}, t={}, level={}, {} sources",
            n,
            graph.edge_count(),
            params.k,
            params.t,
            params.level,
            sources.len()
        );

        let mut table = DistanceTable::with_sources(n, sources);
        let solver = Bmssp::with_params(graph, params.k, params.t);
        let result = solver.execute(params.level, boundary, sources, &mut table)?;

        info!(
            "bmssp: settled {} vertices, boundary {:?}",
            result.vertices.len(),
            result.new_bound
        );

        Ok(BmsspOutcome {
            boundary: result.new_bound,
            settled: result.vertices,
            table,
        })
    }
}

fn check_weights<W, G>(graph: &G) -> Result<()>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    for u in 0..graph.vertex_count() {
        for (_, weight) in graph.outgoing_edges(u) {
            if weight < W::zero() {
                return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
            }
        }
    }
    Ok(())
}

impl<W, G> ShortestPathAlgorithm<W, G> for FastSSSP
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BMSSP"
    }

    fn compute_shortest_paths(&self, graph: &G, sources: &[usize]) -> Result<ShortestPathResult<W>> {
        let outcome = self.solve::<W, G>(graph, sources)?;
        let distances = outcome.table.to_options();
        let (_, predecessors) = outcome.table.into_parts();

        Ok(ShortestPathResult {
            distances,
            predecessors,
            sources: sources.to_vec(),
        })
    }
}
