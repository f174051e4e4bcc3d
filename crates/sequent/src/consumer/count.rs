//! Counting consumer - the explicit full pass behind `count()`.

use crate::chain::{BulkSink, Chain, ChainStatus, Consumer};

/// Counts elements by enumeration.
#[derive(Debug, Default)]
pub struct CountConsumer {
    count: usize,
}

impl CountConsumer {
    pub fn new() -> Self {
        CountConsumer { count: 0 }
    }
}

impl<T> Chain<T> for CountConsumer {
    #[inline]
    fn process(&mut self, _item: T) -> ChainStatus {
        self.count += 1;
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

impl<T: Clone> BulkSink<T> for CountConsumer {
    fn push_slice(&mut self, items: &[T]) -> ChainStatus {
        self.count += items.len();
        ChainStatus::Flow
    }
}

impl<T> Consumer<T> for CountConsumer {
    type Output = usize;

    fn finish(self) -> usize {
        self.count
    }
}
