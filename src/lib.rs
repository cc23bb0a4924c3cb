//! # graph-traverse — bounded graph traversal primitives
//!
//! This crate is a graph traversal engine that answers neighborhood and path queries over a
//! property graph stored in an external backend. It offers bounded breadth-first expansions
//! (k-out, k-neighbor), local-structure comparisons (shared neighbors, Jaccard similarity), and
//! the primitives longer path and reachability algorithms are built on: frontier expansion,
//! parent-chain paths, and super-node suppression.
//!
//! ## Quick Start
//!
//! ```ignore
//! use graph_traverse::{bfs, edge_query::EdgeStep, types::{Direction, VertexId}};
//!
//! let step = EdgeStep::new(Direction::Both);
//! let neighborhood = bfs::kout(&backend, VertexId(1), &step, 1, true, 10, 10)?;
//! # Ok::<(), graph_traverse::error::TraversalError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Parameter Guards** ([`guards`]) validate every numeric budget before a backend call is made.
//! - **Edge Query Builder** ([`edge_query`]) turns a filter bundle into an opaque backend query.
//! - **Edge Stream** ([`edge_stream`]) enforces per-vertex degree and super-node suppression.
//! - **Frontier Expander** ([`frontier`]) folds edge streams into the next frontier.
//! - **Bounded BFS** ([`bfs`]) layers frontier expansion into k-out and k-neighbor.
//! - **Local Structure** ([`local_structure`]) compares two vertices' neighborhoods.
//! - **Path Tree** ([`path_tree`]) records explored paths without quadratic storage.
//! - **Path & PathSet** ([`path`]) are the value types completed paths are handed back as.
//!
//! The graph storage backend, schema resolution, HTTP façade, and response serialization are all
//! external collaborators ([`backend`] defines the traits this crate consumes) — this crate never
//! persists a vertex or edge itself.

pub mod backend;
pub mod bfs;
pub mod edge_query;
pub mod edge_stream;
pub mod error;
pub mod frontier;
pub mod guards;
pub mod local_structure;
pub mod path;
pub mod path_tree;
pub mod types;

pub use crate::backend::{Backend, BackendEdge, EdgeQuery, Schema};
pub use crate::error::{Result, TraversalError};
pub use crate::guards::TraversalDefaults;
pub use crate::types::{
    Direction, EdgeLabelId, LabelKind, PropertyId, PropertyValue, VertexId, VertexLabelId,
    NO_LIMIT,
};
