//! Bounded BFS (C5): k-out and k-neighbor, the depth-layered frontier expansions that enforce
//! capacity and limit bookkeeping atop the Frontier Expander (C4).

use tracing::{debug, warn};

use crate::backend::Backend;
use crate::edge_query::EdgeStep;
use crate::error::{Result, TraversalError};
use crate::frontier::{expand, Frontier};
use crate::guards::{check_capacity_covers_limit, check_capacity_value, check_depth, check_limit_value};
use crate::types::{VertexId, NO_LIMIT};

/// k-out: depth-layered expansion returning only the last layer.
///
/// `nearest = true` restricts the result to vertices whose shortest hop count equals `depth`
/// (the cumulative visited set is used as the exclusion set at every layer). `nearest = false`
/// performs raw re-expansion with no exclusion, so the result may contain vertices reachable in
/// fewer hops.
pub fn kout<B: Backend>(
    backend: &B,
    source: VertexId,
    step: &EdgeStep,
    depth: u32,
    nearest: bool,
    capacity: i64,
    limit: i64,
) -> Result<Frontier> {
    check_depth(depth)?;
    check_capacity_value(capacity)?;
    check_limit_value(limit)?;
    check_capacity_covers_limit(capacity, limit)?;
    // EdgeStep's own degree/skipDegree invariant is about the backend query's capacity (always
    // unbounded, spec §4.2), not k-out's visited-vertex budget — NO_LIMIT here, not `capacity`.
    step.validate(false, NO_LIMIT)?;

    debug!(
        source = source.0,
        depth,
        nearest,
        degree = step.degree,
        capacity,
        limit,
        "kout started"
    );

    let mut latest = Frontier::new();
    latest.insert(source);
    let mut all = Frontier::new();
    all.insert(source);

    let mut remaining: i64 = if capacity == NO_LIMIT {
        NO_LIMIT
    } else {
        capacity - 1
    };

    for layer in 1..=depth {
        let is_last = layer == depth;

        let mut residual = remaining;
        if is_last
            && limit != NO_LIMIT
            && (remaining == NO_LIMIT || limit < remaining)
        {
            residual = limit;
        }

        latest = if nearest {
            expand(backend, &latest, step, Some(&all), residual)?
        } else {
            expand(backend, &latest, step, None, residual)?
        };

        if nearest {
            for &v in &latest {
                all.insert(v);
            }
        }

        if capacity != NO_LIMIT {
            remaining -= latest.len() as i64;
            if remaining <= 0 && layer < depth {
                warn!(source = source.0, capacity, depth_reached = layer, "kout capacity exceeded");
                return Err(TraversalError::CapacityExceeded {
                    capacity,
                    depth_reached: layer,
                    depth_requested: depth,
                });
            }
        }
    }

    Ok(latest)
}

/// k-neighbor: union of all layers 0..=depth, always excluding already-visited vertices.
/// Exits early once `limit` is finite and the accumulated set reaches it.
pub fn kneighbor<B: Backend>(
    backend: &B,
    source: VertexId,
    step: &EdgeStep,
    depth: u32,
    limit: i64,
) -> Result<Frontier> {
    check_depth(depth)?;
    check_limit_value(limit)?;
    step.validate(false, NO_LIMIT)?;

    debug!(
        source = source.0,
        depth,
        degree = step.degree,
        limit,
        "kneighbor started"
    );

    let mut latest = Frontier::new();
    latest.insert(source);
    let mut all = Frontier::new();
    all.insert(source);

    for _layer in 1..=depth {
        if limit != NO_LIMIT && (all.len() as i64) >= limit {
            break;
        }

        let residual = if limit == NO_LIMIT {
            NO_LIMIT
        } else {
            limit - all.len() as i64
        };

        latest = expand(backend, &latest, step, Some(&all), residual)?;
        for &v in &latest {
            all.insert(v);
        }

        if latest.is_empty() {
            break;
        }
    }

    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Backend, BackendEdge};
    use crate::edge_query::EdgeStep;
    use crate::types::{Direction, EdgeLabelId, PropertyId, PropertyValue};
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    struct FakeQuery;
    impl crate::backend::EdgeQuery for FakeQuery {
        fn limit(&mut self, _n: i64) {}
        fn capacity(&mut self, _n: Option<u64>) {}
        fn aggregate_count(&mut self) {}
        fn property_eq(&mut self, _prop: PropertyId, _value: PropertyValue) {}
        fn sort_key_eq(&mut self, _prop: PropertyId, _value: PropertyValue) -> Result<()> {
            Ok(())
        }
    }

    /// Undirected triangle graph from spec §8: vertices {1,2,3,4}, edges {(1,2),(2,3),(3,4),(1,3)}.
    struct TriangleBackend {
        adjacency: BTreeMap<u64, Vec<u64>>,
        calls: RefCell<Vec<u64>>,
    }

    impl TriangleBackend {
        fn new() -> Self {
            let mut adjacency: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
            let edges = [(1u64, 2u64), (2, 3), (3, 4), (1, 3)];
            for &(a, b) in &edges {
                adjacency.entry(a).or_default().push(b);
                adjacency.entry(b).or_default().push(a);
            }
            TriangleBackend {
                adjacency,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Backend for TriangleBackend {
        type Query = FakeQuery;

        fn construct_edges_query(
            &self,
            source: VertexId,
            _direction: Direction,
            _labels: &[EdgeLabelId],
        ) -> Self::Query {
            self.calls.borrow_mut().push(source.0);
            FakeQuery
        }

        fn edges<'a>(
            &'a self,
            _query: Self::Query,
        ) -> Result<Box<dyn Iterator<Item = Result<BackendEdge>> + 'a>> {
            let source = VertexId(*self.calls.borrow().last().unwrap());
            let targets = self.adjacency.get(&source.0).cloned().unwrap_or_default();
            Ok(Box::new(targets.into_iter().map(move |t| {
                Ok(BackendEdge {
                    source,
                    target: VertexId(t),
                    label: EdgeLabelId(0),
                })
            })))
        }

        fn query_number(&self, _query: Self::Query) -> Result<i64> {
            unreachable!()
        }

        fn matches_full_edge_sort_keys(&self, _query: &Self::Query) -> bool {
            true
        }
    }

    fn step() -> EdgeStep {
        let mut s = EdgeStep::new(Direction::Both);
        s.degree = 10;
        s
    }

    #[test]
    fn kout_depth_one_nearest() {
        let b = TriangleBackend::new();
        let out = kout(&b, VertexId(1), &step(), 1, true, 10, 10).unwrap();
        let mut ids: Vec<u64> = out.iter().map(|v| v.0).collect();
        ids.sort();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn kout_depth_two_nearest_excludes_closer_vertices() {
        let b = TriangleBackend::new();
        let out = kout(&b, VertexId(1), &step(), 2, true, 10, 10).unwrap();
        let ids: Vec<u64> = out.iter().map(|v| v.0).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn kneighbor_depth_two_returns_whole_component() {
        let b = TriangleBackend::new();
        let out = kneighbor(&b, VertexId(1), &step(), 2, 100).unwrap();
        let mut ids: Vec<u64> = out.iter().map(|v| v.0).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn kout_capacity_exceeded() {
        let b = TriangleBackend::new();
        let err = kout(&b, VertexId(1), &step(), 3, true, 3, 3).unwrap_err();
        assert!(matches!(err, TraversalError::CapacityExceeded { .. }));
    }

    #[test]
    fn kout_unbounded_capacity_and_limit_allow_any_depth() {
        let b = TriangleBackend::new();
        let out = kout(&b, VertexId(1), &step(), 4, true, NO_LIMIT, NO_LIMIT).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn kneighbor_respects_limit() {
        let b = TriangleBackend::new();
        let out = kneighbor(&b, VertexId(1), &step(), 2, 2).unwrap();
        assert!(out.len() as i64 <= 2);
        assert!(out.contains(&VertexId(1)));
    }

    #[test]
    fn depth_zero_is_rejected() {
        let b = TriangleBackend::new();
        assert!(kout(&b, VertexId(1), &step(), 0, true, 10, 10).is_err());
    }
}
