//! Source adapters: one capability surface over heterogeneous containers.
//!
//! Every adapter can enumerate its elements in order; adapters over
//! contiguous memory additionally expose a borrowed slice, and adapters with
//! a known size expose a cheap length. The evaluation driver negotiates
//! these capabilities once per run - the fast paths they unlock are
//! execution strategies only, never observable in the output.
//!
//! Adapter selection happens at construction: `from_vec`/`from_slice` build
//! a [`SliceSource`], `from_deque` a [`DequeSource`], `range`/`repeat` their
//! arithmetic sources, `from_iter` the capability-free [`IterSource`], and
//! containers foreign to the core go through the finder registry
//! ([`crate::source::registry`]). The ordering mirrors how much each shape
//! can offer: contiguous first, length-known second, provider-backed third,
//! bare iteration last.

mod deque;
mod extend;
mod iter;
mod range;
mod repeat;
pub(crate) mod registry;
mod slice;

pub use deque::DequeSource;
pub use extend::ExtendSource;
pub use iter::IterSource;
pub use range::{RangeIter, RangeSource};
pub use repeat::{RepeatIter, RepeatSource};
pub use registry::{
    find_provider, register_source_finder, registered_finders, DynSource, ProviderSource,
};
pub use slice::SliceSource;

/// A backing container exposed to the engine.
///
/// `enumerate` must be restartable: every call yields an independent
/// traversal of the same elements in the same order. The capability probes
/// default to declining.
pub trait Source: Send + Sync {
    /// Element type produced by this source.
    type Item: Clone + Send + Sync + 'static;

    /// Traversal iterator; may borrow the source.
    type Iter<'s>: Iterator<Item = Self::Item> + 's
    where
        Self: 's;

    /// Starts an independent traversal.
    fn enumerate(&self) -> Self::Iter<'_>;

    /// The whole source as one contiguous block, if it is backed by one.
    fn try_slice(&self) -> Option<&[Self::Item]> {
        None
    }

    /// The element count, if known without traversal.
    ///
    /// Must agree with the length of a full enumeration.
    fn try_len(&self) -> Option<usize> {
        None
    }
}
