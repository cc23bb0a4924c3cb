//! Parameter guards (C1): pure validators for the numeric budgets that bound every traversal, and
//! the defaults callers get if they don't specify their own.

use crate::error::{Result, TraversalError};
use crate::types::NO_LIMIT;

/// Named, tunable sentinel defaults (spec §6).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraversalDefaults {
    /// Default global visited-vertex cap.
    pub capacity: i64,
    /// Default cap on the number of elements (vertices) returned.
    pub elements_limit: i64,
    /// Default cap on the number of paths returned by path-producing algorithms.
    pub paths_limit: i64,
    /// Default per-call result limit.
    pub limit: i64,
    /// Default per-vertex fan-out cap.
    pub degree: i64,
    /// Default super-node threshold.
    pub skip_degree: i64,
    /// Default sample size for sampling-based algorithms built atop this engine.
    pub sample: i64,
    /// Default maximum BFS depth.
    pub max_depth: u32,
    /// Default edge weight for weighted algorithms built atop this engine.
    pub weight: i64,
}

impl Default for TraversalDefaults {
    fn default() -> Self {
        TraversalDefaults {
            capacity: 10_000_000,
            elements_limit: 10_000_000,
            paths_limit: 10,
            limit: 100,
            degree: 10_000,
            skip_degree: 100_000,
            sample: 100,
            max_depth: 50,
            weight: 0,
        }
    }
}

/// Validates `depth >= 1`.
pub fn check_depth(depth: u32) -> Result<()> {
    if depth < 1 {
        return Err(TraversalError::parameter(
            "depth",
            depth as i64,
            "depth must be >= 1",
        ));
    }
    Ok(())
}

/// Validates `degree > 0 || degree == NO_LIMIT`.
pub fn check_degree(degree: i64) -> Result<()> {
    if degree != NO_LIMIT && degree <= 0 {
        return Err(TraversalError::parameter(
            "degree",
            degree,
            "degree must be positive or NO_LIMIT",
        ));
    }
    Ok(())
}

/// Validates `capacity > 0 || capacity == NO_LIMIT`.
pub fn check_capacity_value(capacity: i64) -> Result<()> {
    if capacity != NO_LIMIT && capacity <= 0 {
        return Err(TraversalError::parameter(
            "capacity",
            capacity,
            "capacity must be positive or NO_LIMIT",
        ));
    }
    Ok(())
}

/// Validates `limit > 0 || limit == NO_LIMIT`.
pub fn check_limit_value(limit: i64) -> Result<()> {
    if limit != NO_LIMIT && limit <= 0 {
        return Err(TraversalError::parameter(
            "limit",
            limit,
            "limit must be positive or NO_LIMIT",
        ));
    }
    Ok(())
}

/// Validates `skipDegree >= 0`; 0 disables super-node suppression.
pub fn check_skip_degree_value(skip_degree: i64) -> Result<()> {
    if skip_degree < 0 {
        return Err(TraversalError::parameter(
            "skipDegree",
            skip_degree,
            "skipDegree must be >= 0",
        ));
    }
    Ok(())
}

/// `checkCapacity(capacity, access, label)`: fails if capacity is finite and `access` exceeds it.
pub fn check_capacity(capacity: i64, access: i64, label: &'static str) -> Result<()> {
    if capacity != NO_LIMIT && access > capacity {
        return Err(TraversalError::parameter(
            label,
            access,
            format!("exceeds capacity {capacity}"),
        ));
    }
    Ok(())
}

/// `checkSkipDegree(skipDegree, degree, capacity)`: enforces the EdgeStep invariants from spec §3:
/// - if `skipDegree > 0` then `degree != NO_LIMIT` and `skipDegree >= degree`.
/// - if a capacity is in effect, `degree < capacity` and `skipDegree < capacity`.
pub fn check_skip_degree(skip_degree: i64, degree: i64, capacity: i64) -> Result<()> {
    check_degree(degree)?;
    check_capacity_value(capacity)?;
    check_skip_degree_value(skip_degree)?;

    if skip_degree > 0 {
        if degree == NO_LIMIT {
            return Err(TraversalError::parameter(
                "skipDegree",
                skip_degree,
                "skipDegree > 0 requires a finite degree",
            ));
        }
        if skip_degree < degree {
            return Err(TraversalError::parameter(
                "skipDegree",
                skip_degree,
                format!("must be >= degree ({degree})"),
            ));
        }
    }

    if capacity != NO_LIMIT {
        if degree != NO_LIMIT && degree >= capacity {
            return Err(TraversalError::parameter(
                "degree",
                degree,
                format!("must be < capacity ({capacity})"),
            ));
        }
        if skip_degree > 0 && skip_degree >= capacity {
            return Err(TraversalError::parameter(
                "skipDegree",
                skip_degree,
                format!("must be < capacity ({capacity})"),
            ));
        }
    }

    Ok(())
}

/// Global invariant (spec §3): when capacity is finite, `capacity >= limit` (the source vertex
/// counts toward capacity).
pub fn check_capacity_covers_limit(capacity: i64, limit: i64) -> Result<()> {
    check_capacity_value(capacity)?;
    check_limit_value(limit)?;
    if capacity != NO_LIMIT && limit != NO_LIMIT && limit > capacity {
        return Err(TraversalError::parameter(
            "capacity",
            capacity,
            format!("must be >= limit ({limit})"),
        ));
    }
    Ok(())
}
