//! Path & PathSet (C8): value types for completed paths, deduplicated by vertex sequence.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;
use serde_json::Value;

use crate::types::VertexId;

/// A completed path: an ordered vertex sequence plus an optional crosspoint used by bidirectional
/// searches to mark where the forward and backward frontiers met.
///
/// Equality and hashing consider the vertex sequence only — the crosspoint is metadata, not
/// identity: `Path(c1, v) == Path(c2, v)` for any `c1`, `c2`.
#[derive(Debug, Clone)]
pub struct Path {
    vertices: Vec<VertexId>,
    crosspoint: Option<VertexId>,
}

impl Path {
    /// Builds a path from a vertex sequence with no crosspoint.
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Path {
            vertices,
            crosspoint: None,
        }
    }

    /// Builds a path with an explicit crosspoint (bidirectional search join point).
    pub fn with_crosspoint(vertices: Vec<VertexId>, crosspoint: VertexId) -> Self {
        Path {
            vertices,
            crosspoint: Some(crosspoint),
        }
    }

    /// The vertex sequence.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// The crosspoint, if any.
    pub fn crosspoint(&self) -> Option<VertexId> {
        self.crosspoint
    }

    /// Reverses the vertex sequence in place.
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// True iff `source` equals the smallest vertex id along the path — the ownership rule used
    /// to deduplicate paths discovered from multiple roots.
    pub fn owned_by(&self, source: VertexId) -> bool {
        match self.vertices.iter().min() {
            Some(&min) => source == min,
            None => false,
        }
    }

    /// Serializes to the wire shape: `{"objects": [id, ...]}`, optionally prefixed with
    /// `{"crosspoint": id, ...}` when `with_crosspoint` is set and a crosspoint is present.
    pub fn to_map(&self, with_crosspoint: bool) -> BTreeMap<&'static str, Value> {
        let mut map = BTreeMap::new();
        if with_crosspoint {
            if let Some(cp) = self.crosspoint {
                map.insert("crosspoint", Value::from(cp.0));
            }
        }
        map.insert(
            "objects",
            Value::from(self.vertices.iter().map(|v| v.0).collect::<Vec<_>>()),
        );
        map
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertices.hash(state);
    }
}

/// A set of paths, unique by vertex sequence (crosspoint is ignored for deduplication).
#[derive(Debug, Clone, Default)]
pub struct PathSet {
    paths: IndexSet<PathKey>,
}

/// Wraps [`Path`] so it can live in an [`IndexSet`], which requires `Hash + Eq` — already true of
/// `Path` itself, but kept as a distinct newtype so `PathSet`'s API can return `&Path` directly.
#[derive(Debug, Clone)]
struct PathKey(Path);

impl PartialEq for PathKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for PathKey {}
impl Hash for PathKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PathSet {
    /// Creates an empty path set.
    pub fn new() -> Self {
        PathSet {
            paths: IndexSet::new(),
        }
    }

    /// Inserts a path, deduplicating by vertex sequence. Returns `true` if the path was new.
    pub fn insert(&mut self, path: Path) -> bool {
        self.paths.insert(PathKey(path))
    }

    /// Number of distinct paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates the contained paths.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(|k| &k.0)
    }

    /// The union of all vertices appearing in any contained path.
    pub fn vertices(&self) -> IndexSet<VertexId> {
        let mut all = IndexSet::new();
        for path in self.iter() {
            for &v in path.vertices() {
                all.insert(v);
            }
        }
        all
    }
}
