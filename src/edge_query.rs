//! Edge Query Builder (C2): translates a source vertex, direction, and filter bundle into an
//! opaque backend [`crate::backend::EdgeQuery`].

use std::collections::BTreeMap;

use tracing::debug;

use crate::backend::{Backend, EdgeQuery};
use crate::error::{Result, TraversalError};
use crate::guards::{check_degree, check_skip_degree};
use crate::types::{Direction, EdgeLabelId, PropertyId, PropertyValue, VertexId, NO_LIMIT};

/// A filter bundle for a single expansion step, exactly as specified in spec §3.
#[derive(Debug, Clone)]
pub struct EdgeStep {
    /// Direction to expand in.
    pub direction: Direction,
    /// Edge labels to match; empty means "any label".
    pub labels: BTreeMap<EdgeLabelId, String>,
    /// Property equality filters; empty means "no property filter".
    pub properties: BTreeMap<PropertyId, PropertyValue>,
    /// Per-vertex fan-out cap, or [`NO_LIMIT`].
    pub degree: i64,
    /// Super-node threshold; 0 disables suppression.
    pub skip_degree: i64,
    /// Result cap for this step, or [`NO_LIMIT`].
    pub limit: i64,
}

impl EdgeStep {
    /// Builds a step with no filters, default budgets taken from `defaults`.
    pub fn new(direction: Direction) -> Self {
        EdgeStep {
            direction,
            labels: BTreeMap::new(),
            properties: BTreeMap::new(),
            degree: NO_LIMIT,
            skip_degree: 0,
            limit: NO_LIMIT,
        }
    }

    /// Validates the invariants spec §3 places on an `EdgeStep`:
    /// - if `skipDegree > 0` then `degree != NO_LIMIT` and `skipDegree >= degree`.
    /// - if `properties` is non-empty and sort-key mode is requested, `labels` must have exactly
    ///   one entry.
    pub fn validate(&self, sort_key_mode: bool, capacity: i64) -> Result<()> {
        check_degree(self.degree)?;
        check_skip_degree(self.skip_degree, self.degree, capacity)?;
        if sort_key_mode && !self.properties.is_empty() && self.labels.len() != 1 {
            return Err(TraversalError::SchemaMismatch(format!(
                "sort-key mode requires exactly one edge label, got {}",
                self.labels.len()
            )));
        }
        Ok(())
    }
}

/// Whether a property filter is pushed down as a generic index predicate or as a sort-key
/// predicate that must exactly cover the edge label's primary sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Any property predicate may be added; the backend picks an index.
    Property,
    /// Property predicates must exactly cover the sort key of the single permitted edge label.
    SortKey,
}

/// Builds an [`crate::backend::EdgeQuery`] for a plain expansion (no result limit requested by
/// the caller beyond what the step specifies).
pub fn build_query<B: Backend>(
    backend: &B,
    source: VertexId,
    step: &EdgeStep,
    mode: FilterMode,
) -> Result<B::Query> {
    let label_ids: Vec<EdgeLabelId> = step.labels.keys().copied().collect();
    let mut query = backend.construct_edges_query(source, step.direction, &label_ids);

    // The engine manages capacity itself; the backend query's own capacity stays unbounded.
    query.capacity(None);

    match mode {
        FilterMode::Property => {
            for (&prop, value) in &step.properties {
                query.property_eq(prop, value.clone());
            }
        }
        FilterMode::SortKey => {
            if !step.properties.is_empty() && step.labels.len() != 1 {
                return Err(TraversalError::SchemaMismatch(format!(
                    "sort-key mode requires exactly one edge label, got {}",
                    step.labels.len()
                )));
            }
            for (&prop, value) in &step.properties {
                query.sort_key_eq(prop, value.clone())?;
            }
            if !step.properties.is_empty() && !backend.matches_full_edge_sort_keys(&query) {
                return Err(TraversalError::SchemaMismatch(
                    "property filter does not cover the edge label's full sort key".into(),
                ));
            }
        }
    }

    if step.limit != NO_LIMIT {
        query.limit(step.limit);
    }

    debug!(
        source = source.0,
        degree = step.degree,
        skip_degree = step.skip_degree,
        limit = step.limit,
        "built edge query"
    );

    Ok(query)
}

/// Builds and executes the COUNT aggregate variant of a step's query, then post-processes the
/// raw count through the degree/skipDegree policy (spec §4.2):
///
/// ```text
/// if degree == NO_LIMIT or count < degree → return count
/// elif skipDegree > 0 and count >= skipDegree → return 0
/// else                                       → return degree
/// ```
pub fn edges_count<B: Backend>(
    backend: &B,
    source: VertexId,
    step: &EdgeStep,
    mode: FilterMode,
) -> Result<i64> {
    let label_ids: Vec<EdgeLabelId> = step.labels.keys().copied().collect();
    let mut query = backend.construct_edges_query(source, step.direction, &label_ids);
    query.capacity(None);
    query.aggregate_count();

    if mode == FilterMode::SortKey {
        for (&prop, value) in &step.properties {
            query.sort_key_eq(prop, value.clone())?;
        }
    } else {
        for (&prop, value) in &step.properties {
            query.property_eq(prop, value.clone());
        }
    }

    let count = backend.query_number(query)?;

    let result = if step.degree == NO_LIMIT || count < step.degree {
        count
    } else if step.skip_degree > 0 && count >= step.skip_degree {
        0
    } else {
        step.degree
    };

    Ok(result)
}
