//! Pipeline entry points over concrete containers.
//!
//! Each constructor picks the richest adapter its container supports:
//! contiguous memory first, length-known shapes second, provider-backed
//! containers through the finder registry, bare iteration last. The choice
//! is a performance cascade only - every adapter yields the same elements in
//! the same order.

use std::any::Any;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::error::Result;
use crate::link::Identity;
use crate::seq::Seq;
use crate::source::{
    find_provider, DequeSource, DynSource, IterSource, RangeSource, RepeatSource, SliceSource,
};

/// A pipeline over an owned vector; the backing block is shared from here on.
pub fn from_vec<T>(items: Vec<T>) -> Seq<SliceSource<T>, Identity>
where
    T: Clone + Send + Sync + 'static,
{
    Seq::with(SliceSource::new(items.into()), Identity)
}

/// A pipeline over a borrowed slice, cloned once into a shared block.
pub fn from_slice<T>(items: &[T]) -> Seq<SliceSource<T>, Identity>
where
    T: Clone + Send + Sync + 'static,
{
    Seq::with(SliceSource::new(Arc::from(items)), Identity)
}

/// A pipeline over an already-shared block; nothing is copied.
pub fn from_shared<T>(items: Arc<[T]>) -> Seq<SliceSource<T>, Identity>
where
    T: Clone + Send + Sync + 'static,
{
    Seq::with(SliceSource::new(items), Identity)
}

/// A pipeline over a double-ended queue.
pub fn from_deque<T>(items: VecDeque<T>) -> Seq<DequeSource<T>, Identity>
where
    T: Clone + Send + Sync + 'static,
{
    Seq::with(DequeSource::from(items), Identity)
}

/// A pipeline over any cloneable iterator - the capability-free shape; every
/// evaluation restarts from a clone of the prototype.
pub fn from_iter<I>(prototype: I) -> Seq<IterSource<I>, Identity>
where
    I: Iterator + Clone + Send + Sync,
    I::Item: Clone + Send + Sync + 'static,
{
    Seq::with(IterSource::new(prototype), Identity)
}

/// The arithmetic sequence `start, start+1, …` of `count` elements.
///
/// Fails when the final element would exceed `i64::MAX`.
pub fn range(start: i64, count: usize) -> Result<Seq<RangeSource, Identity>> {
    Ok(Seq::with(RangeSource::new(start, count)?, Identity))
}

/// `value` repeated exactly `count` times.
pub fn repeat<T>(value: T, count: usize) -> Seq<RepeatSource<T>, Identity>
where
    T: Clone + Send + Sync + 'static,
{
    Seq::with(RepeatSource::bounded(value, count), Identity)
}

/// `value` repeated forever; bound it with `take` before any full
/// evaluation.
pub fn repeat_forever<T>(value: T) -> Seq<RepeatSource<T>, Identity>
where
    T: Clone + Send + Sync + 'static,
{
    Seq::with(RepeatSource::unbounded(value), Identity)
}

/// The empty pipeline.
pub fn empty<T>() -> Seq<SliceSource<T>, Identity>
where
    T: Clone + Send + Sync + 'static,
{
    Seq::with(SliceSource::new(Vec::new().into()), Identity)
}

/// A pipeline over any custom [`Source`](crate::source::Source)
/// implementation - the entry point for external adapter types.
pub fn from_source<S>(source: S) -> Seq<S, Identity>
where
    S: crate::source::Source,
{
    Seq::with(source, Identity)
}

/// A pipeline over a container known only to a registered provider, or
/// `None` when no finder recognizes it.
pub fn from_provider<C, T>(container: &C) -> Option<Seq<DynSource<T>, Identity>>
where
    C: Any,
    T: Clone + Send + Sync + 'static,
{
    find_provider(container).map(|source| Seq::with(source, Identity))
}
