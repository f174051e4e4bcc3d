//! Set-difference stage.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use crate::chain::{Chain, ChainStatus};

use super::Link;

/// Yields the distinct elements of the pipeline that do not occur in a
/// captured reject set.
///
/// Follows set-difference semantics: duplicates surviving the difference are
/// emitted once.
#[derive(Debug, Clone)]
pub struct ExceptLink<T> {
    reject: Arc<[T]>,
}

impl<T> ExceptLink<T> {
    /// Creates a stage rejecting every element of `reject`.
    pub fn new(reject: Arc<[T]>) -> Self {
        ExceptLink { reject }
    }
}

impl<T> Link<T> for ExceptLink<T>
where
    T: Eq + Hash + Clone + Send + Sync,
{
    type Out = T;

    const KEEPS_COUNT: bool = false;

    type Activity<'l, C: Chain<T> + 'l>
        = ExceptActivity<T, C>
    where
        Self: 'l;

    fn build<'l, C: Chain<T> + 'l>(&'l self, next: C) -> ExceptActivity<T, C> {
        ExceptActivity {
            seen: self.reject.iter().cloned().collect(),
            next,
        }
    }
}

/// Per-run state of an [`ExceptLink`]; the reject set is rebuilt per run and
/// grows with the elements already emitted.
pub struct ExceptActivity<T, C> {
    seen: HashSet<T>,
    next: C,
}

impl<T, C> Chain<T> for ExceptActivity<T, C>
where
    T: Eq + Hash + Clone,
    C: Chain<T>,
{
    fn process(&mut self, item: T) -> ChainStatus {
        if self.seen.insert(item.clone()) {
            self.next.process(item)
        } else {
            ChainStatus::Filter
        }
    }

    fn complete(&mut self, status: ChainStatus) {
        self.next.complete(status)
    }
}
