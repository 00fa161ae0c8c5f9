use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Tunable knobs for a BMSSP run.
///
/// Every field is optional: anything left unset is derived from the vertex
/// count of the graph being solved (see [`derive_parameters`] and
/// [`default_level`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Override for the pivot/relaxation depth parameter `k`
    pub k: Option<usize>,

    /// Override for the level-scaling parameter `t`
    pub t: Option<usize>,

    /// Override for the top-level recursion level
    pub level: Option<usize>,

    /// Exclusive distance boundary for the top-level call (+infinity when unset)
    pub boundary: Option<f64>,

    /// Reject graphs carrying negative edge weights before solving
    pub validate_weights: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            k: None,
            t: None,
            level: None,
            boundary: None,
            validate_weights: true,
        }
    }
}

/// Concrete parameters for one run, after defaults have been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    pub k: usize,
    pub t: usize,
    pub level: usize,
}

impl SolverConfig {
    /// Parses and validates a configuration from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that explicit overrides are usable
    pub fn validate(&self) -> Result<()> {
        if self.k == Some(0) {
            return Err(Error::Config("k must be at least 1".to_string()));
        }
        if self.t == Some(0) {
            return Err(Error::Config("t must be at least 1".to_string()));
        }
        if let Some(boundary) = self.boundary {
            if boundary.is_nan() || boundary < 0.0 {
                return Err(Error::Config(format!(
                    "boundary must be a non-negative number, got {}",
                    boundary
                )));
            }
        }
        Ok(())
    }

    /// Resolves the parameters for a graph with `vertex_count` vertices
    pub fn resolve(&self, vertex_count: usize) -> Parameters {
        let (derived_k, derived_t) = derive_parameters(vertex_count);
        let k = self.k.unwrap_or(derived_k).max(1);
        let t = self.t.unwrap_or(derived_t).max(1);
        let level = self
            .level
            .unwrap_or_else(|| default_level(vertex_count, t));

        Parameters { k, t, level }
    }
}

/// `k = max(1, floor(ln(n)^(1/3)))` and `t = max(1, floor(ln(n)^(2/3)))`.
///
/// Graphs with fewer than two vertices are treated as having two.
pub fn derive_parameters(vertex_count: usize) -> (usize, usize) {
    let ln_n = (vertex_count.max(2) as f64).ln();

    let k = ln_n.powf(1.0 / 3.0).floor() as usize;
    let t = ln_n.powf(2.0 / 3.0).floor() as usize;

    (k.max(1), t.max(1))
}

/// Smallest level `l >= 1` with `l * t > log2(n)`.
///
/// At that level the top-level work cap `k * 2^(l*t)` exceeds the vertex
/// count, so the outermost call only stops once its batch heap drains.
pub fn default_level(vertex_count: usize, t: usize) -> usize {
    let log2_n = (vertex_count.max(2) as f64).log2();
    (log2_n / t.max(1) as f64).floor() as usize + 1
}

/// Block size `M = 2^((level-1)*t)` of the batch heap at `level`
pub fn block_size(level: usize, t: usize) -> usize {
    pow2(level.saturating_sub(1).saturating_mul(t))
}

/// Per-call settled-vertex cap `k * 2^(level*t)`
pub fn work_cap(level: usize, k: usize, t: usize) -> usize {
    k.saturating_mul(pow2(level.saturating_mul(t)))
}

fn pow2(exponent: usize) -> usize {
    if exponent >= usize::BITS as usize {
        usize::MAX
    } else {
        1usize << exponent
    }
}
