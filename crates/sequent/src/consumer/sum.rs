//! Summation consumers.

use crate::chain::{BulkSink, Chain, ChainStatus, Consumer};
use crate::error::{Result, SequentError};
use crate::numeric::Numeric;

/// Sums elements in the type's accumulator; an empty run yields zero.
///
/// A failed accumulation (decimal overflow) stops the run and surfaces from
/// `finish`.
pub struct SumConsumer<N: Numeric> {
    acc: N::Acc,
    error: Option<SequentError>,
}

impl<N: Numeric> SumConsumer<N> {
    pub fn new() -> Self {
        SumConsumer {
            acc: N::zero(),
            error: None,
        }
    }
}

impl<N: Numeric> Default for SumConsumer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Numeric> Chain<N> for SumConsumer<N> {
    #[inline]
    fn process(&mut self, item: N) -> ChainStatus {
        match N::add(self.acc, item) {
            Ok(acc) => {
                self.acc = acc;
                ChainStatus::Flow
            }
            Err(error) => {
                self.error = Some(error);
                ChainStatus::Stop
            }
        }
    }

    fn complete(&mut self, _status: ChainStatus) {}

    fn as_bulk(&mut self) -> Option<&mut dyn BulkSink<N>> {
        Some(self)
    }
}

impl<N: Numeric> BulkSink<N> for SumConsumer<N> {
    fn push_slice(&mut self, items: &[N]) -> ChainStatus {
        let mut acc = self.acc;
        for &item in items {
            match N::add(acc, item) {
                Ok(next) => acc = next,
                Err(error) => {
                    self.acc = acc;
                    self.error = Some(error);
                    return ChainStatus::Stop;
                }
            }
        }
        self.acc = acc;
        ChainStatus::Flow
    }
}

impl<N: Numeric> Consumer<N> for SumConsumer<N> {
    type Output = Result<N>;

    fn finish(self) -> Result<N> {
        match self.error {
            Some(error) => Err(error),
            None => N::finish(self.acc),
        }
    }
}

/// Sums present values of an `Option` element type; absent values add
/// nothing and an all-absent or empty run yields zero.
pub struct SumOptConsumer<N: Numeric> {
    inner: SumConsumer<N>,
}

impl<N: Numeric> SumOptConsumer<N> {
    pub fn new() -> Self {
        SumOptConsumer {
            inner: SumConsumer::new(),
        }
    }
}

impl<N: Numeric> Default for SumOptConsumer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Numeric> Chain<Option<N>> for SumOptConsumer<N> {
    #[inline]
    fn process(&mut self, item: Option<N>) -> ChainStatus {
        match item {
            Some(value) => self.inner.process(value),
            None => ChainStatus::Flow,
        }
    }

    fn complete(&mut self, status: ChainStatus) {
        self.inner.complete(status)
    }

    fn as_bulk(&mut self) -> Option<&mut dyn BulkSink<Option<N>>> {
        Some(self)
    }
}

impl<N: Numeric> BulkSink<Option<N>> for SumOptConsumer<N> {
    fn push_slice(&mut self, items: &[Option<N>]) -> ChainStatus {
        for item in items {
            if let Some(value) = *item {
                if self.inner.process(value).is_stopped() {
                    return ChainStatus::Stop;
                }
            }
        }
        ChainStatus::Flow
    }
}

impl<N: Numeric> Consumer<Option<N>> for SumOptConsumer<N> {
    type Output = Result<N>;

    fn finish(self) -> Result<N> {
        self.inner.finish()
    }
}
