//! Running-extremum consumers.
//!
//! The replacement rules live on [`Numeric`]: for floating-point types a NaN
//! running maximum is superseded by any later value, while a NaN minimum
//! candidate wins and sticks. Integer and decimal types never hit either
//! branch.

use crate::chain::{BulkSink, Chain, ChainStatus, Consumer};
use crate::error::{Result, SequentError};
use crate::numeric::Numeric;

/// Tracks a running maximum; an empty run is a NoElements failure.
pub struct MaxConsumer<N: Numeric> {
    current: N,
    no_data: bool,
}

impl<N: Numeric> MaxConsumer<N> {
    pub fn new() -> Self {
        MaxConsumer {
            current: N::max_seed(),
            no_data: true,
        }
    }
}

impl<N: Numeric> Default for MaxConsumer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Numeric> Chain<N> for MaxConsumer<N> {
    #[inline]
    fn process(&mut self, item: N) -> ChainStatus {
        self.no_data = false;
        if N::supersedes_max(item, self.current) {
            self.current = item;
        }
        ChainStatus::Flow
    }

    fn complete(&mut self, _status: ChainStatus) {}

    fn as_bulk(&mut self) -> Option<&mut dyn BulkSink<N>> {
        Some(self)
    }
}

impl<N: Numeric> BulkSink<N> for MaxConsumer<N> {
    fn push_slice(&mut self, items: &[N]) -> ChainStatus {
        if !items.is_empty() {
            self.no_data = false;
        }
        let mut current = self.current;
        for &item in items {
            if N::supersedes_max(item, current) {
                current = item;
            }
        }
        self.current = current;
        ChainStatus::Flow
    }
}

impl<N: Numeric> Consumer<N> for MaxConsumer<N> {
    type Output = Result<N>;

    fn finish(self) -> Result<N> {
        if self.no_data {
            Err(SequentError::NoElements)
        } else {
            Ok(self.current)
        }
    }
}

/// Tracks a running minimum; an empty run is a NoElements failure.
pub struct MinConsumer<N: Numeric> {
    current: N,
    no_data: bool,
}

impl<N: Numeric> MinConsumer<N> {
    pub fn new() -> Self {
        MinConsumer {
            current: N::min_seed(),
            no_data: true,
        }
    }
}

impl<N: Numeric> Default for MinConsumer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Numeric> Chain<N> for MinConsumer<N> {
    #[inline]
    fn process(&mut self, item: N) -> ChainStatus {
        self.no_data = false;
        if N::supersedes_min(item, self.current) {
            self.current = item;
        }
        ChainStatus::Flow
    }

    fn complete(&mut self, _status: ChainStatus) {}

    fn as_bulk(&mut self) -> Option<&mut dyn BulkSink<N>> {
        Some(self)
    }
}

impl<N: Numeric> BulkSink<N> for MinConsumer<N> {
    fn push_slice(&mut self, items: &[N]) -> ChainStatus {
        if !items.is_empty() {
            self.no_data = false;
        }
        let mut current = self.current;
        for &item in items {
            if N::supersedes_min(item, current) {
                current = item;
            }
        }
        self.current = current;
        ChainStatus::Flow
    }
}

impl<N: Numeric> Consumer<N> for MinConsumer<N> {
    type Output = Result<N>;

    fn finish(self) -> Result<N> {
        if self.no_data {
            Err(SequentError::NoElements)
        } else {
            Ok(self.current)
        }
    }
}

/// Maximum over an `Option` element type: a present value always beats an
/// absent one, and an empty or all-absent run yields `None`, never an error.
pub struct MaxOptConsumer<N: Numeric> {
    current: Option<N>,
}

impl<N: Numeric> MaxOptConsumer<N> {
    pub fn new() -> Self {
        MaxOptConsumer { current: None }
    }
}

impl<N: Numeric> Default for MaxOptConsumer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Numeric> Chain<Option<N>> for MaxOptConsumer<N> {
    #[inline]
    fn process(&mut self, item: Option<N>) -> ChainStatus {
        if let Some(value) = item {
            match self.current {
                None => self.current = Some(value),
                Some(current) => {
                    if N::supersedes_max(value, current) {
                        self.current = Some(value);
                    }
                }
            }
        }
        ChainStatus::Flow
    }

    fn complete(&mut self, _status: ChainStatus) {}
}

impl<N: Numeric> Consumer<Option<N>> for MaxOptConsumer<N> {
    type Output = Option<N>;

    fn finish(self) -> Option<N> {
        self.current
    }
}

/// Minimum over an `Option` element type.
pub struct MinOptConsumer<N: Numeric> {
    current: Option<N>,
}

impl<N: Numeric> MinOptConsumer<N> {
    pub fn new() -> Self {
        MinOptConsumer { current: None }
    }
}

impl<N: Numeric> Default for MinOptConsumer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Numeric> Chain<Option<N>> for MinOptConsumer<N> {
    #[inline]
    fn process(&mut self, item: Option<N>) -> ChainStatus {
        if let Some(value) = item {
            match self.current {
                None => self.current = Some(value),
                Some(current) => {
                    if N::supersedes_min(value, current) {
                        self.current = Some(value);
                    }
                }
            }
        }
        ChainStatus::Flow
    }

    fn complete(&mut self, _status: ChainStatus) {}
}

impl<N: Numeric> Consumer<Option<N>> for MinOptConsumer<N> {
    type Output = Option<N>;

    fn finish(self) -> Option<N> {
        self.current
    }
}
