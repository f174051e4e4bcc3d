//! Folding consumers.

use crate::chain::{Chain, ChainStatus, Consumer};
use crate::error::{Result, SequentError};

/// Seeded fold: never fails, an empty run yields the seed.
pub struct FoldConsumer<B, F> {
    acc: Option<B>,
    f: F,
}

impl<B, F> FoldConsumer<B, F> {
    pub fn new(seed: B, f: F) -> Self {
        FoldConsumer { acc: Some(seed), f }
    }
}

impl<T, B, F> Chain<T> for FoldConsumer<B, F>
where
    F: Fn(B, T) -> B + Send + Sync,
{
    #[inline]
    fn process(&mut self, item: T) -> ChainStatus {
        if let Some(acc) = self.acc.take() {
            self.acc = Some((self.f)(acc, item));
        }
        ChainStatus::Flow
    }

    fn complete(&mut self, _status: ChainStatus) {}
}

impl<T, B, F> Consumer<T> for FoldConsumer<B, F>
where
    F: Fn(B, T) -> B + Send + Sync,
{
    type Output = B;

    fn finish(self) -> B {
        self.acc.expect("accumulator present until finish")
    }
}

/// Unseeded fold: the first element seeds, an empty run is a NoElements
/// failure.
pub struct ReduceConsumer<T, F> {
    acc: Option<T>,
    f: F,
}

impl<T, F> ReduceConsumer<T, F> {
    pub fn new(f: F) -> Self {
        ReduceConsumer { acc: None, f }
    }
}

impl<T, F> Chain<T> for ReduceConsumer<T, F>
where
    F: Fn(T, T) -> T + Send + Sync,
{
    #[inline]
    fn process(&mut self, item: T) -> ChainStatus {
        self.acc = Some(match self.acc.take() {
            Some(acc) => (self.f)(acc, item),
            None => item,
        });
        ChainStatus::Flow
    }

    fn complete(&mut self, _status: ChainStatus) {}
}

impl<T, F> Consumer<T> for ReduceConsumer<T, F>
where
    F: Fn(T, T) -> T + Send + Sync,
{
    type Output = Result<T>;

    fn finish(self) -> Result<T> {
        self.acc.ok_or(SequentError::NoElements)
    }
}
