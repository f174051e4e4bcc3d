//! Short-circuiting boolean consumers.

use crate::chain::{Chain, ChainStatus, Consumer};

/// True unless some element fails the predicate; the first failure stops the
/// run immediately.
pub struct AllConsumer<P> {
    result: bool,
    predicate: P,
}

impl<P> AllConsumer<P> {
    pub fn new(predicate: P) -> Self {
        AllConsumer {
            result: true,
            predicate,
        }
    }
}

impl<T, P> Chain<T> for AllConsumer<P>
where
    P: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn process(&mut self, item: T) -> ChainStatus {
        if (self.predicate)(&item) {
            ChainStatus::Flow
        } else {
            self.result = false;
            ChainStatus::Stop
        }
    }

    fn complete(&mut self, _status: ChainStatus) {}
}

impl<T, P> Consumer<T> for AllConsumer<P>
where
    P: Fn(&T) -> bool + Send + Sync,
{
    type Output = bool;

    fn finish(self) -> bool {
        self.result
    }
}

/// False unless some element matches the predicate; the first match stops
/// the run immediately.
pub struct AnyConsumer<P> {
    result: bool,
    predicate: P,
}

impl<P> AnyConsumer<P> {
    pub fn new(predicate: P) -> Self {
        AnyConsumer {
            result: false,
            predicate,
        }
    }
}

impl<T, P> Chain<T> for AnyConsumer<P>
where
    P: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn process(&mut self, item: T) -> ChainStatus {
        if (self.predicate)(&item) {
            self.result = true;
            ChainStatus::Stop
        } else {
            ChainStatus::Flow
        }
    }

    fn complete(&mut self, _status: ChainStatus) {}
}

impl<T, P> Consumer<T> for AnyConsumer<P>
where
    P: Fn(&T) -> bool + Send + Sync,
{
    type Output = bool;

    fn finish(self) -> bool {
        self.result
    }
}
