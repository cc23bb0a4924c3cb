//! Local Structure (C6): sameNeighbors and jaccardSimilarity over two vertices.

use indexmap::IndexSet;
use tracing::debug;

use crate::backend::Backend;
use crate::edge_query::EdgeStep;
use crate::error::{Result, TraversalError};
use crate::frontier::{expand, Frontier};
use crate::guards::check_limit_value;
use crate::types::{VertexId, NO_LIMIT};

fn neighborhood<B: Backend>(backend: &B, vertex: VertexId, step: &EdgeStep) -> Result<Frontier> {
    let mut seed = Frontier::new();
    seed.insert(vertex);
    expand(backend, &seed, step, None, NO_LIMIT)
}

/// `sameNeighbors(u, v, dir, label, degree, limit)`: materializes N(u) and N(v), each bounded by
/// `degree`, intersects preserving N(u)'s insertion order, then truncates to `limit`.
pub fn same_neighbors<B: Backend>(
    backend: &B,
    u: VertexId,
    v: VertexId,
    step: &EdgeStep,
    limit: i64,
) -> Result<IndexSet<VertexId>> {
    step.validate(false, NO_LIMIT)?;
    check_limit_value(limit)?;

    let n_u = neighborhood(backend, u, step)?;
    let n_v = neighborhood(backend, v, step)?;

    let mut result = IndexSet::new();
    for &candidate in &n_u {
        if n_v.contains(&candidate) {
            result.insert(candidate);
            if limit != NO_LIMIT && (result.len() as i64) >= limit {
                break;
            }
        }
    }

    debug!(u = u.0, v = v.0, same = result.len(), "same_neighbors computed");
    Ok(result)
}

/// `jaccardSimilarity(u, v, dir, label, degree)`: `|N(u) ∩ N(v)| / |N(u) ∪ N(v)|`.
///
/// Fails with [`TraversalError::EmptyNeighborhood`] when both neighborhoods are empty, rather than
/// returning `0.0` or `NaN` — a fatal-on-ambiguity choice documented in DESIGN.md.
pub fn jaccard_similarity<B: Backend>(
    backend: &B,
    u: VertexId,
    v: VertexId,
    step: &EdgeStep,
) -> Result<f64> {
    step.validate(false, NO_LIMIT)?;

    let n_u = neighborhood(backend, u, step)?;
    let n_v = neighborhood(backend, v, step)?;

    if n_u.is_empty() && n_v.is_empty() {
        return Err(TraversalError::EmptyNeighborhood);
    }

    let intersection = n_u.iter().filter(|c| n_v.contains(*c)).count();
    let union = n_u.len() + n_v.len() - intersection;

    Ok(intersection as f64 / union as f64)
}
