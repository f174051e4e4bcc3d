//! A source whose traversal lifecycle is observable.

use std::iter::Cloned;
use std::slice::Iter;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sequent::Source;

/// Counters shared between a [`ProbeSource`] and every traversal it opens.
#[derive(Debug, Default)]
pub struct TraversalLog {
    opened: AtomicUsize,
    dropped: AtomicUsize,
}

impl TraversalLog {
    /// Traversals started so far.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Traversals released so far.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }
}

/// An iteration-only source recording when traversals start and when they
/// are released. Offers no capabilities, so every evaluation runs the
/// generic element path and actually opens a traversal.
#[derive(Debug, Clone)]
pub struct ProbeSource<T> {
    items: Arc<[T]>,
    log: Arc<TraversalLog>,
}

impl<T> ProbeSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        ProbeSource {
            items: items.into(),
            log: Arc::new(TraversalLog::default()),
        }
    }

    /// The shared lifecycle log.
    pub fn log(&self) -> Arc<TraversalLog> {
        Arc::clone(&self.log)
    }
}

impl<T> Source for ProbeSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Item = T;

    type Iter<'s>
        = ProbeIter<'s, T>
    where
        Self: 's;

    fn enumerate(&self) -> ProbeIter<'_, T> {
        self.log.opened.fetch_add(1, Ordering::SeqCst);
        ProbeIter {
            inner: self.items.iter().cloned(),
            log: Arc::clone(&self.log),
        }
    }
}

/// A traversal over a [`ProbeSource`]; reports its release on drop.
pub struct ProbeIter<'s, T> {
    inner: Cloned<Iter<'s, T>>,
    log: Arc<TraversalLog>,
}

impl<T: Clone> Iterator for ProbeIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
}

impl<T> Drop for ProbeIter<'_, T> {
    fn drop(&mut self) {
        self.log.dropped.fetch_add(1, Ordering::SeqCst);
    }
}
