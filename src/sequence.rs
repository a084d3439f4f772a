use crate::types::Value;
use std::fmt;
use std::sync::{Arc, Mutex};

/// A forward-only sequence of values that can be iterated at most once.
///
/// Clones share the same underlying iterator, so consuming elements through
/// one handle consumes them for every handle. This mirrors how a host
/// evaluator hands the same lazily-produced sequence to several function
/// calls within one formula evaluation: whichever call drains it first wins,
/// and later calls observe an empty sequence. That is a documented caveat,
/// not an error.
#[derive(Clone)]
pub struct LazySeq {
    inner: Arc<Mutex<Box<dyn Iterator<Item = Value> + Send>>>,
}

impl LazySeq {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Value> + Send + 'static,
    {
        Self { inner: Arc::new(Mutex::new(Box::new(iter))) }
    }

    /// Wrap an already-materialized vector as a single-pass sequence.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self::new(values.into_iter())
    }

    /// Produce the next element, or None once the sequence is exhausted
    /// (or its lock was poisoned by a panicking producer).
    pub fn next(&self) -> Option<Value> {
        self.inner.lock().ok()?.next()
    }
}

impl fmt::Debug for LazySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazySeq(..)")
    }
}

// Identity equality: a sequence is only equal to itself (and its clones).
// Comparing contents would consume them.
impl PartialEq for LazySeq {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
