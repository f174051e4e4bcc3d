//! Materializing consumer.

use crate::chain::{BulkSink, Chain, ChainStatus, Consumer};

/// Collects elements into a `Vec`.
///
/// Pre-sized when the pipeline can answer a cheap count - a single exact
/// allocation - and grown by the allocator's doubling strategy otherwise.
pub struct ToVecConsumer<T> {
    items: Vec<T>,
}

impl<T> ToVecConsumer<T> {
    pub fn new() -> Self {
        ToVecConsumer { items: Vec::new() }
    }

    /// Pre-sizes the buffer when the element count is already known.
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        ToVecConsumer {
            items: match capacity {
                Some(n) => Vec::with_capacity(n),
                None => Vec::new(),
            },
        }
    }
}

impl<T> Default for ToVecConsumer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Chain<T> for ToVecConsumer<T> {
    #[inline]
    fn process(&mut self, item: T) -> ChainStatus {
        self.items.push(item);
        ChainStatus::Flow
    }

    fn complete(&mut self, _status: ChainStatus) {}

    fn as_bulk(&mut self) -> Option<&mut dyn BulkSink<T>>
    where
        T: Clone,
    {
        Some(self)
    }
}

impl<T: Clone> BulkSink<T> for ToVecConsumer<T> {
    fn push_slice(&mut self, items: &[T]) -> ChainStatus {
        self.items.extend_from_slice(items);
        ChainStatus::Flow
    }
}

impl<T> Consumer<T> for ToVecConsumer<T> {
    type Output = Vec<T>;

    fn finish(self) -> Vec<T> {
        self.items
    }
}
