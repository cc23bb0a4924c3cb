//! External collaborator interfaces (spec §6): the graph storage backend and the schema
//! resolver. Neither is implemented by this crate — both are consumed traits. Test fixtures
//! provide an in-memory implementation (see `tests/triangle_graph.rs`).

use crate::error::Result;
use crate::types::{Direction, EdgeLabelId, LabelKind, PropertyId, PropertyValue, VertexId};

/// An edge as yielded by the backend's edge iterator. `source`/`target` are the two endpoints in
/// the direction the backend stored the edge; "other endpoint" resolution given the query's
/// direction happens in [`crate::edge_stream::EdgeStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendEdge {
    /// The endpoint the traversal expanded from.
    pub source: VertexId,
    /// The endpoint at the other end of the edge.
    pub target: VertexId,
    /// The edge's label.
    pub label: EdgeLabelId,
}

/// An opaque, mutable query under construction against the backend's edge index.
///
/// Implementations pick their own representation (e.g. an index scan descriptor); this crate only
/// ever calls the setters below, in the order the Edge Query Builder (C2) calls them.
pub trait EdgeQuery {
    /// Caps the number of rows the backend will materialize for this query.
    fn limit(&mut self, n: i64);

    /// Sets the backend-side capacity hint. The traversal engine always requests `None`
    /// (unbounded) here and manages capacity itself (spec §4.2).
    fn capacity(&mut self, n: Option<u64>);

    /// Switches the query into an aggregate `COUNT` query; [`Backend::query_number`] becomes
    /// the only valid way to execute it afterward.
    fn aggregate_count(&mut self);

    /// Adds an equality predicate in *property mode*: any property, the backend picks an index.
    fn property_eq(&mut self, prop: PropertyId, value: PropertyValue);

    /// Adds an equality predicate in *sort-key mode*: the predicate must contribute to covering
    /// the single permitted edge label's primary sort key, enabling predicate pushdown into the
    /// edge index. Fails with [`crate::error::TraversalError::SchemaMismatch`] if the property
    /// is not part of that label's sort key.
    fn sort_key_eq(&mut self, prop: PropertyId, value: PropertyValue) -> Result<()>;
}

/// The graph storage backend: vertex/edge persistence, transactions, and index selection live
/// behind this trait and are entirely out of scope for this crate.
pub trait Backend {
    /// The concrete query type this backend builds and executes.
    type Query: EdgeQuery;

    /// `construct_edges_query(source_id, direction, label_ids[])` (spec §6).
    fn construct_edges_query(
        &self,
        source: VertexId,
        direction: Direction,
        labels: &[EdgeLabelId],
    ) -> Self::Query;

    /// Executes an edge query, returning an iterator over its results in backend order.
    fn edges<'a>(
        &'a self,
        query: Self::Query,
    ) -> Result<Box<dyn Iterator<Item = Result<BackendEdge>> + 'a>>;

    /// Executes a query built with [`EdgeQuery::aggregate_count`], returning the count.
    fn query_number(&self, query: Self::Query) -> Result<i64>;

    /// Whether a sort-key-mode query's predicates exactly cover the edge label's sort key.
    fn matches_full_edge_sort_keys(&self, query: &Self::Query) -> bool;
}

/// Schema resolution: human names to opaque ids, and back.
pub trait Schema {
    /// Resolves a human label name to an opaque id, failing with
    /// [`crate::error::TraversalError::SchemaMismatch`] if unknown.
    fn label_id(&self, kind: LabelKind, name: &str) -> Result<u32>;

    /// Returns the human name of an edge label.
    fn edge_label_name(&self, id: EdgeLabelId) -> Result<String>;

    /// Returns the human name of a property.
    fn property_name(&self, id: PropertyId) -> Result<String>;
}
