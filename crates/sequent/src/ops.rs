//! Append-time operator fusion.
//!
//! These inherent impls shadow the generic [`Pipeline`](crate::Pipeline)
//! methods for pipeline shapes whose tail stage can absorb the new operator:
//! two projections become one, a projection followed by a predicate becomes
//! a single fused stage, predicates conjoin, and skip/take pairs merge
//! arithmetically. Pipelines over cheaply sliceable sources answer skip/take
//! by adjusting the source window and never build a counting stage at all.
//!
//! Every rewrite here must be observationally indistinguishable from the
//! unfused two-stage pipeline - the equivalence suite holds each one to the
//! two-stage baseline built through the generic trait path.

use crate::link::{
    Composed, FilterLink, FilterMapLink, Identity, Link, MapFilterLink, MapLink, SkipLink,
    TakeLink,
};
use crate::seq::Seq;
use crate::source::{ExtendSource, RangeSource, RepeatSource, SliceSource, Source};

// ============================================================================
// Bare sources: the first operator skips the identity stage entirely
// ============================================================================

impl<S: Source> Seq<S, Identity> {
    /// Appends a projection stage.
    pub fn map<V, F>(self, f: F) -> Seq<S, MapLink<F>>
    where
        F: Fn(S::Item) -> V + Send + Sync,
    {
        Seq::with(self.source, MapLink::new(f))
    }

    /// Appends a predicate stage.
    pub fn filter<P>(self, predicate: P) -> Seq<S, FilterLink<P>>
    where
        P: Fn(&S::Item) -> bool + Send + Sync,
    {
        Seq::with(self.source, FilterLink::new(predicate))
    }
}

// ============================================================================
// Projection tails: map·map composes, map·filter fuses
// ============================================================================

impl<S: Source, F> Seq<S, MapLink<F>> {
    /// Merges a second projection into the existing one.
    pub fn map<U, V, G>(self, g: G) -> Seq<S, MapLink<impl Fn(S::Item) -> V + Send + Sync>>
    where
        F: Fn(S::Item) -> U + Send + Sync,
        G: Fn(U) -> V + Send + Sync,
    {
        let f = self.link.into_fn();
        Seq::with(self.source, MapLink::new(move |item| g(f(item))))
    }

    /// Fuses a predicate onto the projection; the predicate tests the
    /// projected value.
    pub fn filter<U, P>(self, predicate: P) -> Seq<S, MapFilterLink<F, P>>
    where
        F: Fn(S::Item) -> U + Send + Sync,
        P: Fn(&U) -> bool + Send + Sync,
    {
        Seq::with(self.source, MapFilterLink::new(self.link.into_fn(), predicate))
    }
}

impl<S: Source, H: Link<S::Item>, F> Seq<S, Composed<H, MapLink<F>>> {
    /// Merges a second projection into the tail projection.
    pub fn map<U, V, G>(
        self,
        g: G,
    ) -> Seq<S, Composed<H, MapLink<impl Fn(H::Out) -> V + Send + Sync>>>
    where
        F: Fn(H::Out) -> U + Send + Sync,
        G: Fn(U) -> V + Send + Sync,
    {
        let (head, tail) = self.link.into_parts();
        let f = tail.into_fn();
        Seq::with(
            self.source,
            Composed::new(head, MapLink::new(move |item| g(f(item)))),
        )
    }

    /// Fuses a predicate onto the tail projection.
    pub fn filter<U, P>(self, predicate: P) -> Seq<S, Composed<H, MapFilterLink<F, P>>>
    where
        F: Fn(H::Out) -> U + Send + Sync,
        P: Fn(&U) -> bool + Send + Sync,
    {
        let (head, tail) = self.link.into_parts();
        Seq::with(
            self.source,
            Composed::new(head, MapFilterLink::new(tail.into_fn(), predicate)),
        )
    }
}

// ============================================================================
// Predicate tails: filter·filter conjoins, filter·map fuses
// ============================================================================

impl<S: Source, P> Seq<S, FilterLink<P>> {
    /// Conjoins a second predicate into the existing one.
    pub fn filter<Q>(self, q: Q) -> Seq<S, FilterLink<impl Fn(&S::Item) -> bool + Send + Sync>>
    where
        P: Fn(&S::Item) -> bool + Send + Sync,
        Q: Fn(&S::Item) -> bool + Send + Sync,
    {
        let p = self.link.into_fn();
        Seq::with(
            self.source,
            FilterLink::new(move |item: &S::Item| p(item) && q(item)),
        )
    }

    /// Fuses a projection onto the predicate.
    pub fn map<V, G>(self, g: G) -> Seq<S, FilterMapLink<P, G>>
    where
        P: Fn(&S::Item) -> bool + Send + Sync,
        G: Fn(S::Item) -> V + Send + Sync,
    {
        Seq::with(self.source, FilterMapLink::new(self.link.into_fn(), g))
    }
}

impl<S: Source, H: Link<S::Item>, P> Seq<S, Composed<H, FilterLink<P>>> {
    /// Conjoins a second predicate into the tail predicate.
    pub fn filter<Q>(
        self,
        q: Q,
    ) -> Seq<S, Composed<H, FilterLink<impl Fn(&H::Out) -> bool + Send + Sync>>>
    where
        P: Fn(&H::Out) -> bool + Send + Sync,
        Q: Fn(&H::Out) -> bool + Send + Sync,
    {
        let (head, tail) = self.link.into_parts();
        let p = tail.into_fn();
        Seq::with(
            self.source,
            Composed::new(
                head,
                FilterLink::new(move |item: &H::Out| p(item) && q(item)),
            ),
        )
    }

    /// Fuses a projection onto the tail predicate.
    pub fn map<V, G>(self, g: G) -> Seq<S, Composed<H, FilterMapLink<P, G>>>
    where
        P: Fn(&H::Out) -> bool + Send + Sync,
        G: Fn(H::Out) -> V + Send + Sync,
    {
        let (head, tail) = self.link.into_parts();
        Seq::with(
            self.source,
            Composed::new(head, FilterMapLink::new(tail.into_fn(), g)),
        )
    }
}

// ============================================================================
// Skip/take arithmetic
// ============================================================================

impl<S: Source, H: Link<S::Item>> Seq<S, Composed<H, SkipLink>> {
    /// Merges consecutive skips into one stage.
    pub fn skip(self, n: usize) -> Seq<S, Composed<H, SkipLink>> {
        let merged = self.link.tail().count().saturating_add(n);
        Seq::with(self.source, self.link.replace_tail(SkipLink::new(merged)))
    }
}

impl<S: Source, H: Link<S::Item>> Seq<S, Composed<H, TakeLink>> {
    /// Merges consecutive takes into one stage.
    pub fn take(self, n: usize) -> Seq<S, Composed<H, TakeLink>> {
        let merged = self.link.tail().count().min(n);
        Seq::with(self.source, self.link.replace_tail(TakeLink::new(merged)))
    }
}

impl<T: Clone + Send + Sync + 'static> Seq<SliceSource<T>, Identity> {
    /// Narrows the source window instead of inserting a counting stage.
    pub fn skip(self, n: usize) -> Self {
        Seq::with(self.source.skipped(n), self.link)
    }

    /// Narrows the source window instead of inserting a counting stage.
    pub fn take(self, n: usize) -> Self {
        Seq::with(self.source.limited(n), self.link)
    }
}

impl Seq<RangeSource, Identity> {
    /// Adjusts the range bounds instead of inserting a counting stage.
    pub fn skip(self, n: usize) -> Self {
        Seq::with(self.source.skipped(n), self.link)
    }

    /// Adjusts the range bounds instead of inserting a counting stage.
    pub fn take(self, n: usize) -> Self {
        Seq::with(self.source.limited(n), self.link)
    }
}

impl<T: Clone + Send + Sync + 'static> Seq<RepeatSource<T>, Identity> {
    /// Adjusts the repeat count instead of inserting a counting stage.
    pub fn skip(self, n: usize) -> Self {
        Seq::with(self.source.skipped(n), self.link)
    }

    /// Adjusts the repeat count; this also bounds an unbounded repeat.
    pub fn take(self, n: usize) -> Self {
        Seq::with(self.source.limited(n), self.link)
    }
}

// ============================================================================
// Edit folding: consecutive appends/prepends share one wrapper
// ============================================================================

impl<S, L> Seq<ExtendSource<S, L>, Identity>
where
    S: Source,
    L: Link<S::Item>,
    L::Out: Clone + Send + Sync + 'static,
{
    /// Folds another appended element into the existing wrapper.
    pub fn append(self, item: L::Out) -> Self {
        Seq::with(self.source.push_append(item), Identity)
    }

    /// Folds another prepended element into the existing wrapper.
    pub fn prepend(self, item: L::Out) -> Self {
        Seq::with(self.source.push_prepend(item), Identity)
    }
}
