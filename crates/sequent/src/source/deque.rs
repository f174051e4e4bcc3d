//! Growable-list source.

use std::collections::vec_deque;
use std::collections::VecDeque;
use std::iter::Cloned;
use std::sync::Arc;

use super::Source;

/// A shared double-ended queue: length is always cheap, contiguity only when
/// the ring happens to occupy a single run of memory.
#[derive(Debug, Clone)]
pub struct DequeSource<T> {
    data: Arc<VecDeque<T>>,
}

impl<T> DequeSource<T> {
    /// Wraps a shared deque.
    pub fn new(data: Arc<VecDeque<T>>) -> Self {
        DequeSource { data }
    }
}

impl<T: Clone> From<VecDeque<T>> for DequeSource<T> {
    fn from(items: VecDeque<T>) -> Self {
        DequeSource::new(Arc::new(items))
    }
}

impl<T> Source for DequeSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Item = T;

    type Iter<'s>
        = Cloned<vec_deque::Iter<'s, T>>
    where
        Self: 's;

    fn enumerate(&self) -> Self::Iter<'_> {
        self.data.iter().cloned()
    }

    fn try_slice(&self) -> Option<&[T]> {
        let (front, back) = self.data.as_slices();
        back.is_empty().then_some(front)
    }

    fn try_len(&self) -> Option<usize> {
        Some(self.data.len())
    }
}
