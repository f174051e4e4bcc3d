//! The caller-visible pipeline value and its operator surface.
//!
//! A [`Seq`] pairs a source adapter with an immutable link chain. Applying
//! an operator returns a new `Seq` - the original is never touched and both
//! remain evaluable any number of times. Evaluation happens only when a
//! terminal is called: [`Seq::iter`] pulls, everything else pushes through
//! [`Seq::consume`].
//!
//! The transform surface lives on the [`Pipeline`] trait so the fused
//! inherent impls (see the optimizer in `ops.rs`) can shadow it for
//! merge-capable pipeline shapes; callers just import the trait and call the
//! same method names everywhere.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::chain::Consumer;
use crate::consume::execute;
use crate::consumer::{
    AllConsumer, AnyConsumer, CountConsumer, FoldConsumer, MaxConsumer, MaxOptConsumer,
    MinConsumer, MinOptConsumer, ReduceConsumer, SumConsumer, SumOptConsumer, ToVecConsumer,
};
use crate::error::Result;
use crate::link::{
    Composed, ExceptLink, FilterLink, FlatMapLink, FlatMapWithLink, Identity, Link, MapLink,
    SkipLink, TakeLink,
};
use crate::numeric::Numeric;
use crate::pull::SeqIter;
use crate::source::{ExtendSource, Source};

/// A reusable, lazy pipeline: a source plus a composed link chain.
#[derive(Clone)]
pub struct Seq<S, L> {
    pub(crate) source: S,
    pub(crate) link: L,
}

impl<S, L> Seq<S, L> {
    pub(crate) fn with(source: S, link: L) -> Self {
        Seq { source, link }
    }
}

impl<S, L> fmt::Debug for Seq<S, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq").finish()
    }
}

impl<S, L> Seq<S, L>
where
    S: Source,
    L: Link<S::Item>,
{
    /// Starts an independent pull cursor over the pipeline.
    pub fn iter<'s>(&'s self) -> SeqIter<'s, S, L>
    where
        L::Out: 's,
    {
        SeqIter::new(&self.source, &self.link)
    }

    /// Drives the pipeline to completion into `consumer` and returns its
    /// result. The workhorse behind every terminal below.
    pub fn consume<C: Consumer<L::Out>>(&self, consumer: C) -> C::Output {
        execute(&self.source, &self.link, consumer)
    }

    /// The element count, if it is known without evaluation; declines
    /// otherwise. Always agrees with [`Seq::count`] when it answers.
    pub fn cheap_count(&self) -> Option<usize> {
        if L::KEEPS_COUNT {
            self.source.try_len()
        } else {
            None
        }
    }

    /// Counts elements, enumerating the pipeline if need be.
    pub fn count(&self) -> usize {
        match self.cheap_count() {
            Some(count) => count,
            None => self.consume(CountConsumer::new()),
        }
    }

    /// Materializes the pipeline into a `Vec`, pre-sized when the count is
    /// already known.
    pub fn to_vec(&self) -> Vec<L::Out> {
        self.consume(ToVecConsumer::with_capacity(self.cheap_count()))
    }

    /// Sums the elements; empty pipelines yield the type's zero.
    pub fn sum(&self) -> Result<L::Out>
    where
        L::Out: Numeric,
    {
        self.consume(SumConsumer::new())
    }

    /// The largest element; fails with NoElements on an empty pipeline.
    pub fn max(&self) -> Result<L::Out>
    where
        L::Out: Numeric,
    {
        self.consume(MaxConsumer::new())
    }

    /// The smallest element; fails with NoElements on an empty pipeline.
    pub fn min(&self) -> Result<L::Out>
    where
        L::Out: Numeric,
    {
        self.consume(MinConsumer::new())
    }

    /// Sums the present values of an `Option` element type; absent values
    /// contribute nothing.
    pub fn sum_opt<N>(&self) -> Result<N>
    where
        N: Numeric,
        L: Link<S::Item, Out = Option<N>>,
    {
        self.consume(SumOptConsumer::new())
    }

    /// The largest present value, or `None` when nothing was present -
    /// never an error.
    pub fn max_opt<N>(&self) -> Option<N>
    where
        N: Numeric,
        L: Link<S::Item, Out = Option<N>>,
    {
        self.consume(MaxOptConsumer::new())
    }

    /// The smallest present value, or `None` when nothing was present.
    pub fn min_opt<N>(&self) -> Option<N>
    where
        N: Numeric,
        L: Link<S::Item, Out = Option<N>>,
    {
        self.consume(MinOptConsumer::new())
    }

    /// Folds every element into `seed`; an empty pipeline yields the seed.
    pub fn fold<B, F>(&self, seed: B, f: F) -> B
    where
        F: Fn(B, L::Out) -> B + Send + Sync,
    {
        self.consume(FoldConsumer::new(seed, f))
    }

    /// Seeded fold with a result projection applied to the accumulator.
    pub fn fold_with<B, R, F, G>(&self, seed: B, f: F, finish: G) -> R
    where
        F: Fn(B, L::Out) -> B + Send + Sync,
        G: FnOnce(B) -> R,
    {
        finish(self.fold(seed, f))
    }

    /// Folds using the first element as the seed; fails with NoElements on
    /// an empty pipeline.
    pub fn reduce<F>(&self, f: F) -> Result<L::Out>
    where
        F: Fn(L::Out, L::Out) -> L::Out + Send + Sync,
    {
        self.consume(ReduceConsumer::new(f))
    }

    /// True when every element satisfies the predicate; stops at the first
    /// failure. An empty pipeline is vacuously true.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&L::Out) -> bool + Send + Sync,
    {
        self.consume(AllConsumer::new(predicate))
    }

    /// True when some element satisfies the predicate; stops at the first
    /// match. An empty pipeline is false.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&L::Out) -> bool + Send + Sync,
    {
        self.consume(AnyConsumer::new(predicate))
    }
}

impl<'s, S, L> IntoIterator for &'s Seq<S, L>
where
    S: Source,
    L: Link<S::Item>,
    L::Out: 's,
{
    type Item = L::Out;
    type IntoIter = SeqIter<'s, S, L>;

    fn into_iter(self) -> SeqIter<'s, S, L> {
        self.iter()
    }
}

/// The generic transform surface, implemented once for every [`Seq`].
///
/// Each method extends the link chain and returns a new pipeline; nothing
/// executes until a terminal runs. Merge-capable shapes shadow these methods
/// with fused inherent versions, so `map(f).map(g)` builds one stage - the
/// rewrite is invisible except to the type.
pub trait Pipeline: Sized {
    /// The source adapter type.
    type Src: Source;
    /// The output element type.
    type Item;
    /// The composed link chain.
    type Lnk: Link<<Self::Src as Source>::Item, Out = Self::Item>;

    /// Recovers the underlying pipeline value.
    fn into_seq(self) -> Seq<Self::Src, Self::Lnk>;

    /// Appends a projection stage.
    fn map<V, F>(self, f: F) -> Seq<Self::Src, Composed<Self::Lnk, MapLink<F>>>
    where
        F: Fn(Self::Item) -> V + Send + Sync,
    {
        let Seq { source, link } = self.into_seq();
        Seq::with(source, Composed::new(link, MapLink::new(f)))
    }

    /// Appends a predicate stage.
    fn filter<P>(self, predicate: P) -> Seq<Self::Src, Composed<Self::Lnk, FilterLink<P>>>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync,
    {
        let Seq { source, link } = self.into_seq();
        Seq::with(source, Composed::new(link, FilterLink::new(predicate)))
    }

    /// Appends a flattening stage.
    fn flat_map<I, F>(self, f: F) -> Seq<Self::Src, Composed<Self::Lnk, FlatMapLink<F>>>
    where
        F: Fn(Self::Item) -> I + Send + Sync,
        I: IntoIterator,
    {
        let Seq { source, link } = self.into_seq();
        Seq::with(source, Composed::new(link, FlatMapLink::new(f)))
    }

    /// Appends a flattening stage that combines each input with each of its
    /// nested elements.
    fn flat_map_with<I, V, F, G>(
        self,
        selector: F,
        combiner: G,
    ) -> Seq<Self::Src, Composed<Self::Lnk, FlatMapWithLink<F, G>>>
    where
        F: Fn(&Self::Item) -> I + Send + Sync,
        G: Fn(&Self::Item, I::Item) -> V + Send + Sync,
        I: IntoIterator,
    {
        let Seq { source, link } = self.into_seq();
        Seq::with(
            source,
            Composed::new(link, FlatMapWithLink::new(selector, combiner)),
        )
    }

    /// Drops the first `n` elements.
    fn skip(self, n: usize) -> Seq<Self::Src, Composed<Self::Lnk, SkipLink>> {
        let Seq { source, link } = self.into_seq();
        Seq::with(source, Composed::new(link, SkipLink::new(n)))
    }

    /// Keeps at most the first `n` elements.
    fn take(self, n: usize) -> Seq<Self::Src, Composed<Self::Lnk, TakeLink>> {
        let Seq { source, link } = self.into_seq();
        Seq::with(source, Composed::new(link, TakeLink::new(n)))
    }

    /// Appends one element after the pipeline's output.
    fn append(self, item: Self::Item) -> Seq<ExtendSource<Self::Src, Self::Lnk>, Identity>
    where
        Self::Item: Clone + Send + Sync + 'static,
    {
        Seq::with(ExtendSource::appended(self.into_seq(), item), Identity)
    }

    /// Prepends one element before the pipeline's output.
    fn prepend(self, item: Self::Item) -> Seq<ExtendSource<Self::Src, Self::Lnk>, Identity>
    where
        Self::Item: Clone + Send + Sync + 'static,
    {
        Seq::with(ExtendSource::prepended(self.into_seq(), item), Identity)
    }

    /// Appends a set-difference stage: the distinct elements of the
    /// pipeline that do not occur in `other`.
    fn except<O>(self, other: O) -> Seq<Self::Src, Composed<Self::Lnk, ExceptLink<Self::Item>>>
    where
        Self::Item: Eq + Hash + Clone + Send + Sync,
        O: IntoIterator<Item = Self::Item>,
    {
        let Seq { source, link } = self.into_seq();
        let reject: Arc<[Self::Item]> = other.into_iter().collect();
        Seq::with(source, Composed::new(link, ExceptLink::new(reject)))
    }
}

impl<S, L> Pipeline for Seq<S, L>
where
    S: Source,
    L: Link<S::Item>,
{
    type Src = S;
    type Item = L::Out;
    type Lnk = L;

    fn into_seq(self) -> Seq<S, L> {
        self
    }
}
