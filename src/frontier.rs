//! Frontier Expander (C4): folds an Edge Stream per source vertex into the next frontier, subject
//! to an exclusion set and a residual limit.

use indexmap::IndexSet;

use crate::backend::Backend;
use crate::edge_query::{build_query, EdgeStep, FilterMode};
use crate::edge_stream::EdgeStream;
use crate::error::Result;
use crate::types::{VertexId, NO_LIMIT};

/// An order-preserving set of vertices. Membership semantics don't depend on insertion order, but
/// iteration does — callers (and tests) may rely on first-insertion order being preserved.
pub type Frontier = IndexSet<VertexId>;

/// `expand(frontier, step, excluded, residual) -> new_frontier` (spec §4.4).
///
/// 1. If `residual == 0`, returns empty without opening any edge stream.
/// 2. Traverses `frontier` in order, opening an Edge Stream per source.
/// 3. For each edge, takes the other endpoint.
/// 4. Skips it if `excluded` contains it.
/// 5. Otherwise adds it to the result; if `residual != NO_LIMIT` and the result has reached
///    `residual` elements, returns immediately (short-circuit) without continuing to later
///    sources or later edges of the current source.
///
/// Result iteration order is the order of first insertion: a cross-product of sources (in
/// frontier order) by their edge streams (in backend order).
pub fn expand<B: Backend>(
    backend: &B,
    frontier: &Frontier,
    step: &EdgeStep,
    excluded: Option<&Frontier>,
    residual: i64,
) -> Result<Frontier> {
    let mut result = Frontier::new();
    if residual == 0 {
        return Ok(result);
    }

    for &source in frontier {
        let query = build_query(backend, source, step, FilterMode::Property)?;
        let raw = backend.edges(query)?;
        let stream = EdgeStream::new(raw, step.degree, step.skip_degree);

        for edge in stream {
            let edge = edge?;
            let other = if edge.source == source {
                edge.target
            } else {
                edge.source
            };

            if let Some(excluded) = excluded {
                if excluded.contains(&other) {
                    continue;
                }
            }

            result.insert(other);
            if residual != NO_LIMIT && (result.len() as i64) >= residual {
                return Ok(result);
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendEdge;
    use crate::types::{Direction, EdgeLabelId};
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    struct FakeQuery {
        limit: Option<i64>,
    }
    impl crate::backend::EdgeQuery for FakeQuery {
        fn limit(&mut self, n: i64) {
            self.limit = Some(n);
        }
        fn capacity(&mut self, _n: Option<u64>) {}
        fn aggregate_count(&mut self) {}
        fn property_eq(&mut self, _prop: crate::types::PropertyId, _value: crate::types::PropertyValue) {}
        fn sort_key_eq(
            &mut self,
            _prop: crate::types::PropertyId,
            _value: crate::types::PropertyValue,
        ) -> Result<()> {
            Ok(())
        }
    }

    /// Adjacency list keyed by source vertex, edges always reported `source -> target`.
    struct FakeBackend {
        adjacency: BTreeMap<u64, Vec<u64>>,
        calls: RefCell<Vec<u64>>,
    }

    impl Backend for FakeBackend {
        type Query = FakeQuery;

        fn construct_edges_query(
            &self,
            source: VertexId,
            _direction: Direction,
            _labels: &[EdgeLabelId],
        ) -> Self::Query {
            self.calls.borrow_mut().push(source.0);
            FakeQuery { limit: None }
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

    fn backend() -> FakeBackend {
        let mut adjacency = BTreeMap::new();
        adjacency.insert(1, vec![2, 3]);
        adjacency.insert(2, vec![3, 4]);
        FakeBackend {
            adjacency,
            calls: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn residual_zero_returns_empty_without_query() {
        let b = backend();
        let mut frontier = Frontier::new();
        frontier.insert(VertexId(1));
        let step = EdgeStep::new(Direction::Out);
        let out = expand(&b, &frontier, &step, None, 0).unwrap();
        assert!(out.is_empty());
        assert!(b.calls.borrow().is_empty());
    }

    #[test]
    fn cross_product_order_is_first_insertion_order() {
        let b = backend();
        let mut frontier = Frontier::new();
        frontier.insert(VertexId(1));
        frontier.insert(VertexId(2));
        let step = EdgeStep::new(Direction::Out);
        let out = expand(&b, &frontier, &step, None, NO_LIMIT).unwrap();
        let ids: Vec<u64> = out.iter().map(|v| v.0).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn exclusion_set_is_skipped() {
        let b = backend();
        let mut frontier = Frontier::new();
        frontier.insert(VertexId(1));
        let mut excluded = Frontier::new();
        excluded.insert(VertexId(3));
        let step = EdgeStep::new(Direction::Out);
        let out = expand(&b, &frontier, &step, Some(&excluded), NO_LIMIT).unwrap();
        let ids: Vec<u64> = out.iter().map(|v| v.0).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn residual_short_circuits() {
        let b = backend();
        let mut frontier = Frontier::new();
        frontier.insert(VertexId(1));
        frontier.insert(VertexId(2));
        let step = EdgeStep::new(Direction::Out);
        let out = expand(&b, &frontier, &step, None, 1).unwrap();
        let ids: Vec<u64> = out.iter().map(|v| v.0).collect();
        assert_eq!(ids, vec![2]);
    }
}
