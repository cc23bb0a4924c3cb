//! Edge Stream (C3): wraps a backend edge iterator and enforces per-vertex degree and super-node
//! suppression lazily.
//!
//! Super-node suppression (spec §4.3, §9 "all or nothing"): given `degree` (D) and `skipDegree`
//! (S, possibly 0):
//! - S == 0: pass through, truncated to at most D when D is finite.
//! - S > 0: lazily accumulate up to D edges; if the underlying iterator reaches the S-th element
//!   the entire result becomes empty. A super-node must never contribute a prefix of its edges.
//!
//! The stream is single-pass: once resolved it never re-reads the backend iterator, and dropping
//! it at any point (including mid-resolution, e.g. on an error) releases the wrapped iterator.

use std::collections::VecDeque;

use crate::backend::BackendEdge;
use crate::error::Result;
use crate::types::NO_LIMIT;

/// A single-pass, degree- and super-node-bounded view over a backend edge iterator.
pub struct EdgeStream<'a> {
    inner: Option<Box<dyn Iterator<Item = Result<BackendEdge>> + 'a>>,
    degree: i64,
    skip_degree: i64,
    resolved: Option<VecDeque<BackendEdge>>,
}

impl<'a> EdgeStream<'a> {
    /// Wraps `inner`, applying the degree/skipDegree policy described above.
    pub fn new(
        inner: Box<dyn Iterator<Item = Result<BackendEdge>> + 'a>,
        degree: i64,
        skip_degree: i64,
    ) -> Self {
        EdgeStream {
            inner: Some(inner),
            degree,
            skip_degree,
            resolved: None,
        }
    }

    fn resolve(&mut self) -> Result<VecDeque<BackendEdge>> {
        let mut inner = self.inner.take().expect("resolve called once");
        let mut buffer: VecDeque<BackendEdge> = VecDeque::new();
        let mut total: i64 = 0;

        loop {
            if self.skip_degree == 0 && self.degree != NO_LIMIT && (buffer.len() as i64) >= self.degree {
                // Nothing left to check once there is no super-node threshold: stop pulling.
                break;
            }
            match inner.next() {
                None => break,
                Some(Err(e)) => return Err(e),
                Some(Ok(edge)) => {
                    total += 1;
                    if self.degree == NO_LIMIT || (buffer.len() as i64) < self.degree {
                        buffer.push_back(edge);
                    }
                    if self.skip_degree > 0 && total >= self.skip_degree {
                        // Super-node: suppress everything, not just the tail.
                        buffer.clear();
                        break;
                    }
                }
            }
        }

        Ok(buffer)
    }
}

impl<'a> Iterator for EdgeStream<'a> {
    type Item = Result<BackendEdge>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.resolved.is_none() {
            match self.resolve() {
                Ok(buf) => self.resolved = Some(buf),
                Err(e) => {
                    self.resolved = Some(VecDeque::new());
                    return Some(Err(e));
                }
            }
        }
        self.resolved.as_mut().unwrap().pop_front().map(Ok)
    }
}
