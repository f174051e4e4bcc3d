//! Contiguous-memory source.

use std::iter::Cloned;
use std::slice::Iter;
use std::sync::Arc;

use super::Source;

/// A window over shared contiguous memory.
///
/// Backs fixed arrays, vectors and borrowed slices alike; the backing block
/// is shared, so deriving new pipelines (including skip/take windows) never
/// copies elements.
#[derive(Debug, Clone)]
pub struct SliceSource<T> {
    data: Arc<[T]>,
    start: usize,
    len: usize,
}

impl<T> SliceSource<T> {
    /// Wraps a shared block, windowing all of it.
    pub fn new(data: Arc<[T]>) -> Self {
        let len = data.len();
        SliceSource {
            data,
            start: 0,
            len,
        }
    }

    fn window(&self) -> &[T] {
        &self.data[self.start..self.start + self.len]
    }

    /// Narrows the window past the first `n` elements. Skipping beyond the
    /// window collapses it to empty.
    pub(crate) fn skipped(mut self, n: usize) -> Self {
        let n = n.min(self.len);
        self.start += n;
        self.len -= n;
        self
    }

    /// Narrows the window to at most `n` elements. An over-long limit is a
    /// no-op.
    pub(crate) fn limited(mut self, n: usize) -> Self {
        self.len = self.len.min(n);
        self
    }
}

impl<T: Clone> From<Vec<T>> for SliceSource<T> {
    fn from(items: Vec<T>) -> Self {
        SliceSource::new(items.into())
    }
}

impl<T> Source for SliceSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Item = T;

    type Iter<'s>
        = Cloned<Iter<'s, T>>
    where
        Self: 's;

    fn enumerate(&self) -> Self::Iter<'_> {
        self.window().iter().cloned()
    }

    fn try_slice(&self) -> Option<&[T]> {
        Some(self.window())
    }

    fn try_len(&self) -> Option<usize> {
        Some(self.len)
    }
}
