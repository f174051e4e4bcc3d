//! Predicate stages, including the fused projection/predicate pairs the
//! append-time optimizer produces.

use crate::chain::{Chain, ChainStatus};

use super::Link;

/// Keeps elements matching a captured predicate.
#[derive(Debug, Clone, Copy)]
pub struct FilterLink<P> {
    p: P,
}

impl<P> FilterLink<P> {
    /// Creates a predicate stage.
    pub fn new(p: P) -> Self {
        FilterLink { p }
    }

    pub(crate) fn into_fn(self) -> P {
        self.p
    }
}

impl<T, P> Link<T> for FilterLink<P>
where
    P: Fn(&T) -> bool + Send + Sync,
{
    type Out = T;

    const KEEPS_COUNT: bool = false;

    type Activity<'l, C: Chain<T> + 'l>
        = FilterActivity<'l, P, C>
    where
        Self: 'l;

    fn build<'l, C: Chain<T> + 'l>(&'l self, next: C) -> FilterActivity<'l, P, C> {
        FilterActivity { p: &self.p, next }
    }

    fn run_slice<C: Chain<T>>(&self, items: &[T], sink: &mut C) -> ChainStatus
    where
        T: Clone,
    {
        let mut status = ChainStatus::Flow;
        for item in items {
            if (self.p)(item) {
                status = sink.process(item.clone());
                if status.is_stopped() {
                    break;
                }
            }
        }
        status
    }
}

/// Per-run state of a [`FilterLink`].
pub struct FilterActivity<'l, P, C> {
    p: &'l P,
    next: C,
}

impl<T, P, C> Chain<T> for FilterActivity<'_, P, C>
where
    P: Fn(&T) -> bool + Send + Sync,
    C: Chain<T>,
{
    #[inline]
    fn process(&mut self, item: T) -> ChainStatus {
        if (self.p)(&item) {
            self.next.process(item)
        } else {
            ChainStatus::Filter
        }
    }

    fn complete(&mut self, status: ChainStatus) {
        self.next.complete(status)
    }
}

/// Fused projection-then-predicate stage (`map(f).filter(p)`).
///
/// The predicate tests the projected value, exactly as the unfused
/// two-stage pipeline would.
#[derive(Debug, Clone, Copy)]
pub struct MapFilterLink<F, P> {
    f: F,
    p: P,
}

impl<F, P> MapFilterLink<F, P> {
    pub(crate) fn new(f: F, p: P) -> Self {
        MapFilterLink { f, p }
    }
}

impl<T, V, F, P> Link<T> for MapFilterLink<F, P>
where
    F: Fn(T) -> V + Send + Sync,
    P: Fn(&V) -> bool + Send + Sync,
{
    type Out = V;

    const KEEPS_COUNT: bool = false;

    type Activity<'l, C: Chain<V> + 'l>
        = MapFilterActivity<'l, F, P, C>
    where
        Self: 'l;

    fn build<'l, C: Chain<V> + 'l>(&'l self, next: C) -> MapFilterActivity<'l, F, P, C> {
        MapFilterActivity {
            f: &self.f,
            p: &self.p,
            next,
        }
    }

    fn run_slice<C: Chain<V>>(&self, items: &[T], sink: &mut C) -> ChainStatus
    where
        T: Clone,
    {
        let mut status = ChainStatus::Flow;
        for item in items {
            let projected = (self.f)(item.clone());
            if (self.p)(&projected) {
                status = sink.process(projected);
                if status.is_stopped() {
                    break;
                }
            }
        }
        status
    }
}

/// Per-run state of a [`MapFilterLink`].
pub struct MapFilterActivity<'l, F, P, C> {
    f: &'l F,
    p: &'l P,
    next: C,
}

impl<T, V, F, P, C> Chain<T> for MapFilterActivity<'_, F, P, C>
where
    F: Fn(T) -> V + Send + Sync,
    P: Fn(&V) -> bool + Send + Sync,
    C: Chain<V>,
{
    #[inline]
    fn process(&mut self, item: T) -> ChainStatus {
        let projected = (self.f)(item);
        if (self.p)(&projected) {
            self.next.process(projected)
        } else {
            ChainStatus::Filter
        }
    }

    fn complete(&mut self, status: ChainStatus) {
        self.next.complete(status)
    }
}

/// Fused predicate-then-projection stage (`filter(p).map(f)`).
#[derive(Debug, Clone, Copy)]
pub struct FilterMapLink<P, F> {
    p: P,
    f: F,
}

impl<P, F> FilterMapLink<P, F> {
    pub(crate) fn new(p: P, f: F) -> Self {
        FilterMapLink { p, f }
    }
}

impl<T, V, P, F> Link<T> for FilterMapLink<P, F>
where
    P: Fn(&T) -> bool + Send + Sync,
    F: Fn(T) -> V + Send + Sync,
{
    type Out = V;

    const KEEPS_COUNT: bool = false;

    type Activity<'l, C: Chain<V> + 'l>
        = FilterMapActivity<'l, P, F, C>
    where
        Self: 'l;

    fn build<'l, C: Chain<V> + 'l>(&'l self, next: C) -> FilterMapActivity<'l, P, F, C> {
        FilterMapActivity {
            p: &self.p,
            f: &self.f,
            next,
        }
    }

    fn run_slice<C: Chain<V>>(&self, items: &[T], sink: &mut C) -> ChainStatus
    where
        T: Clone,
    {
        let mut status = ChainStatus::Flow;
        for item in items {
            if (self.p)(item) {
                status = sink.process((self.f)(item.clone()));
                if status.is_stopped() {
                    break;
                }
            }
        }
        status
    }
}

/// Per-run state of a [`FilterMapLink`].
pub struct FilterMapActivity<'l, P, F, C> {
    p: &'l P,
    f: &'l F,
    next: C,
}

impl<T, V, P, F, C> Chain<T> for FilterMapActivity<'_, P, F, C>
where
    P: Fn(&T) -> bool + Send + Sync,
    F: Fn(T) -> V + Send + Sync,
    C: Chain<V>,
{
    #[inline]
    fn process(&mut self, item: T) -> ChainStatus {
        if (self.p)(&item) {
            self.next.process((self.f)(item))
        } else {
            ChainStatus::Filter
        }
    }

    fn complete(&mut self, status: ChainStatus) {
        self.next.complete(status)
    }
}
