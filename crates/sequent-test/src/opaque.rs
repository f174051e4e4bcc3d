//! A source that hides every capability.

use std::iter::Cloned;
use std::slice::Iter;
use std::sync::Arc;

use sequent::Source;

/// Wraps a vector but declines the contiguous view and the cheap length, so
/// pipelines over it always take the fully generic element path. Evaluating
/// the same data through a `from_vec` pipeline and an `OpaqueSource`
/// pipeline pins the fast paths to the generic baseline.
#[derive(Debug, Clone)]
pub struct OpaqueSource<T> {
    items: Arc<[T]>,
}

impl<T> OpaqueSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        OpaqueSource {
            items: items.into(),
        }
    }
}

impl<T> Source for OpaqueSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Item = T;

    type Iter<'s>
        = Cloned<Iter<'s, T>>
    where
        Self: 's;

    fn enumerate(&self) -> Self::Iter<'_> {
        self.items.iter().cloned()
    }
}
