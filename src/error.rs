use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, TraversalError>;

/// Errors surfaced to callers of the traversal engine.
///
/// All variants are fatal to the current call: the engine recovers nothing locally and never
/// returns a partial result alongside an error.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// A budget or cross-parameter rule was violated before any backend call was made.
    #[error("invalid parameter {name}: {reason} (value: {value})")]
    Parameter {
        /// Name of the offending parameter (`"degree"`, `"capacity"`, `"skipDegree"`, ...).
        name: &'static str,
        /// The offending value, or -1 if not applicable.
        value: i64,
        /// Human-readable explanation of the violated rule.
        reason: String,
    },

    /// An edge label is unknown, or a sort-key-mode filter does not exactly cover the edge
    /// label's sort key.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A finite capacity was exhausted while layers of a k-out traversal remained.
    #[error("capacity {capacity} exceeded at depth {depth_reached} of {depth_requested}")]
    CapacityExceeded {
        /// The configured capacity.
        capacity: i64,
        /// The depth at which capacity ran out.
        depth_reached: u32,
        /// The depth the caller requested.
        depth_requested: u32,
    },

    /// Opaque wrapper around a backend collaborator failure. Never retried.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Jaccard similarity requested over two vertices whose neighborhoods are both empty.
    #[error("both neighborhoods are empty")]
    EmptyNeighborhood,
}

impl TraversalError {
    /// Constructs a [`TraversalError::Parameter`] error.
    pub fn parameter(name: &'static str, value: i64, reason: impl Into<String>) -> Self {
        TraversalError::Parameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Wraps an arbitrary backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        TraversalError::Backend(Box::new(err))
    }
}
