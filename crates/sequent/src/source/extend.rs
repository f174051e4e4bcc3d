//! Pipeline-extension source: a pipeline with elements edited on, used by
//! append/prepend.
//!
//! Wrapping the whole pipeline (rather than the backing container) keeps the
//! edits positioned after every transform stage, and consecutive edits fold
//! into the same wrapper instead of nesting.

use std::iter::{Chain, Cloned, Rev};
use std::slice::Iter as SliceIter;

use crate::link::Link;
use crate::pull::SeqIter;
use crate::seq::Seq;

use super::Source;

/// An inner pipeline with prepended and appended elements.
pub struct ExtendSource<S, L>
where
    S: Source,
    L: Link<S::Item>,
{
    inner: Seq<S, L>,
    prepended: Vec<L::Out>,
    appended: Vec<L::Out>,
}

impl<S, L> ExtendSource<S, L>
where
    S: Source,
    L: Link<S::Item>,
{
    pub(crate) fn appended(inner: Seq<S, L>, item: L::Out) -> Self {
        ExtendSource {
            inner,
            prepended: Vec::new(),
            appended: vec![item],
        }
    }

    pub(crate) fn prepended(inner: Seq<S, L>, item: L::Out) -> Self {
        ExtendSource {
            inner,
            prepended: vec![item],
            appended: Vec::new(),
        }
    }

    pub(crate) fn push_append(mut self, item: L::Out) -> Self {
        self.appended.push(item);
        self
    }

    pub(crate) fn push_prepend(mut self, item: L::Out) -> Self {
        self.prepended.push(item);
        self
    }
}

impl<S, L> Clone for ExtendSource<S, L>
where
    S: Source + Clone,
    L: Link<S::Item> + Clone,
    L::Out: Clone,
{
    fn clone(&self) -> Self {
        ExtendSource {
            inner: self.inner.clone(),
            prepended: self.prepended.clone(),
            appended: self.appended.clone(),
        }
    }
}

type ExtendIter<'s, S, L> = Chain<
    Chain<
        Cloned<Rev<SliceIter<'s, <L as Link<<S as Source>::Item>>::Out>>>,
        SeqIter<'s, S, L>,
    >,
    Cloned<SliceIter<'s, <L as Link<<S as Source>::Item>>::Out>>,
>;

impl<S, L> Source for ExtendSource<S, L>
where
    S: Source,
    L: Link<S::Item>,
    L::Out: Clone + Send + Sync + 'static,
{
    type Item = L::Out;

    type Iter<'s>
        = ExtendIter<'s, S, L>
    where
        Self: 's;

    fn enumerate(&self) -> Self::Iter<'_> {
        // Later prepends land closer to the front.
        self.prepended
            .iter()
            .rev()
            .cloned()
            .chain(self.inner.iter())
            .chain(self.appended.iter().cloned())
    }

    fn try_len(&self) -> Option<usize> {
        self.inner
            .cheap_count()?
            .checked_add(self.prepended.len())?
            .checked_add(self.appended.len())
    }
}
