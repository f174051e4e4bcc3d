//! Immutable pipeline-stage descriptors.
//!
//! A [`Link`] describes one transform stage - what it does and the captured
//! closure state - without any per-run state. Building an evaluation run
//! turns a link into an activity (a [`Chain`]) bound to the downstream chain;
//! the same link can be built any number of times, each run independent.
//!
//! Links compose at the type level: [`Composed`] concatenates two links into
//! one, and the append-time optimizer swaps only the tail stage via
//! [`Composed::replace_tail`]. A tail whose input type does not match is a
//! compile error, not a runtime check.
//!
//! ```text
//! Seq::map(f).filter(p)
//!     -> Composed<Identity, MapFilterLink<F, P>>   (fused at append time)
//!
//! link.build(consumer)
//!     -> MapFilterActivity { f, p, next: consumer }  (fresh per run)
//! ```

mod except;
mod filter;
mod flat_map;
mod map;
mod skip_take;

pub use except::{ExceptActivity, ExceptLink};
pub use filter::{
    FilterActivity, FilterLink, FilterMapActivity, FilterMapLink, MapFilterActivity, MapFilterLink,
};
pub use flat_map::{FlatMapActivity, FlatMapLink, FlatMapWithActivity, FlatMapWithLink};
pub use map::{MapActivity, MapLink};
pub use skip_take::{SkipActivity, SkipLink, TakeActivity, TakeLink};

use crate::chain::{Chain, ChainStatus};

/// One immutable transform stage with input type `T`.
pub trait Link<T>: Send + Sync {
    /// The stage's output element type.
    type Out;

    /// True when the stage emits exactly one output per input. Powers the
    /// cheap-count facet: a pipeline of count-preserving stages over a
    /// length-known source can answer a count query without evaluation.
    const KEEPS_COUNT: bool;

    /// The per-run activity produced by [`build`](Link::build).
    type Activity<'l, C: Chain<Self::Out> + 'l>: Chain<T> + 'l
    where
        Self: 'l;

    /// Builds a fresh activity over the downstream chain. Callable
    /// repeatedly; the link itself is never mutated.
    fn build<'l, C: Chain<Self::Out> + 'l>(&'l self, next: C) -> Self::Activity<'l, C>;

    /// Bulk-execution facet: drives a whole contiguous block through this
    /// stage into `sink`.
    ///
    /// The default builds a transient activity and feeds it element by
    /// element - the silent, value-identical fallback. Stages with a tight
    /// loop override it; [`Identity`] consults the sink's own bulk facet.
    fn run_slice<C: Chain<Self::Out>>(&self, items: &[T], sink: &mut C) -> ChainStatus
    where
        T: Clone,
    {
        let mut activity = self.build(&mut *sink);
        let mut status = ChainStatus::Flow;
        for item in items {
            status = activity.process(item.clone());
            if status.is_stopped() {
                break;
            }
        }
        status
    }
}

/// The no-op stage: a bare source pipeline has an identity link chain.
///
/// Building it returns the downstream chain unchanged, so an identity stage
/// costs nothing per element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T> Link<T> for Identity {
    type Out = T;

    const KEEPS_COUNT: bool = true;

    type Activity<'l, C: Chain<T> + 'l>
        = C
    where
        Self: 'l;

    #[inline]
    fn build<'l, C: Chain<T> + 'l>(&'l self, next: C) -> C {
        next
    }

    fn run_slice<C: Chain<T>>(&self, items: &[T], sink: &mut C) -> ChainStatus
    where
        T: Clone,
    {
        if let Some(bulk) = sink.as_bulk() {
            return bulk.push_slice(items);
        }
        let mut status = ChainStatus::Flow;
        for item in items {
            status = sink.process(item.clone());
            if status.is_stopped() {
                break;
            }
        }
        status
    }
}

/// Ordered concatenation of two links into one.
///
/// Composes right-to-left at build time: the tail's activity is built first
/// and the head's activity wraps it, so elements flow from the head through
/// the tail into the downstream chain.
#[derive(Debug, Clone, Copy)]
pub struct Composed<L1, L2> {
    first: L1,
    second: L2,
}

impl<L1, L2> Composed<L1, L2> {
    /// Concatenates `first` (upstream) with `second` (downstream).
    pub fn new(first: L1, second: L2) -> Self {
        Composed { first, second }
    }

    /// Returns a composition with the same head but a different tail.
    ///
    /// Used by the append-time optimizer to merge the final stage without
    /// rebuilding earlier stages. The new tail's input type must match the
    /// old tail's input type - enforced by the caller's types.
    pub fn replace_tail<N>(self, tail: N) -> Composed<L1, N> {
        Composed {
            first: self.first,
            second: tail,
        }
    }

    /// The tail stage.
    pub fn tail(&self) -> &L2 {
        &self.second
    }

    pub(crate) fn into_parts(self) -> (L1, L2) {
        (self.first, self.second)
    }
}

impl<T, L1, L2> Link<T> for Composed<L1, L2>
where
    L1: Link<T>,
    L2: Link<L1::Out>,
{
    type Out = L2::Out;

    const KEEPS_COUNT: bool = L1::KEEPS_COUNT && L2::KEEPS_COUNT;

    type Activity<'l, C: Chain<L2::Out> + 'l>
        = L1::Activity<'l, L2::Activity<'l, C>>
    where
        Self: 'l;

    fn build<'l, C: Chain<L2::Out> + 'l>(&'l self, next: C) -> Self::Activity<'l, C> {
        self.first.build(self.second.build(next))
    }

    fn run_slice<C: Chain<L2::Out>>(&self, items: &[T], sink: &mut C) -> ChainStatus
    where
        T: Clone,
    {
        // Peel one stage: the tail becomes part of the sink and the head
        // keeps its own bulk strategy.
        let mut tail = self.second.build(&mut *sink);
        self.first.run_slice(items, &mut tail)
    }
}
