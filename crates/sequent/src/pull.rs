//! Pull evaluation: a cursor over the composed pipeline.
//!
//! The cursor owns a source traversal and a fresh activity chain whose
//! terminal is a small shared buffer (a flattening stage may emit several
//! outputs per input). `complete` fires exactly once - on exhaustion, on an
//! upstream Stop, or when the cursor is dropped early - and the source
//! traversal is released deterministically in all three cases.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::chain::{Chain, ChainStatus};
use crate::link::Link;
use crate::source::Source;

/// Terminal chain of a pull run: parks output for the cursor to hand out.
pub(crate) struct SlotSink<T> {
    slot: Rc<RefCell<VecDeque<T>>>,
}

impl<T> Chain<T> for SlotSink<T> {
    #[inline]
    fn process(&mut self, item: T) -> ChainStatus {
        self.slot.borrow_mut().push_back(item);
        ChainStatus::Flow
    }

    fn complete(&mut self, _status: ChainStatus) {}
}

/// A restartable pull cursor; every [`crate::Seq::iter`] call creates an
/// independent one.
pub struct SeqIter<'s, S, L>
where
    S: Source + 's,
    L: Link<S::Item> + 's,
    L::Out: 's,
{
    source: Option<S::Iter<'s>>,
    activity: L::Activity<'s, SlotSink<L::Out>>,
    slot: Rc<RefCell<VecDeque<L::Out>>>,
    completed: bool,
}

impl<'s, S, L> SeqIter<'s, S, L>
where
    S: Source,
    L: Link<S::Item>,
    L::Out: 's,
{
    pub(crate) fn new(source: &'s S, link: &'s L) -> Self {
        let slot = Rc::new(RefCell::new(VecDeque::new()));
        SeqIter {
            source: Some(source.enumerate()),
            activity: link.build(SlotSink {
                slot: Rc::clone(&slot),
            }),
            slot,
            completed: false,
        }
    }

    fn finish(&mut self, status: ChainStatus) {
        if !self.completed {
            self.completed = true;
            self.activity.complete(status);
            // Release the source traversal before the cursor itself goes.
            self.source = None;
        }
    }
}

impl<'s, S, L> Iterator for SeqIter<'s, S, L>
where
    S: Source,
    L: Link<S::Item>,
    L::Out: 's,
{
    type Item = L::Out;

    fn next(&mut self) -> Option<L::Out> {
        loop {
            if let Some(item) = self.slot.borrow_mut().pop_front() {
                return Some(item);
            }
            if self.completed {
                return None;
            }
            match self.source.as_mut().and_then(Iterator::next) {
                Some(input) => {
                    if self.activity.process(input).is_stopped() {
                        self.finish(ChainStatus::Stop);
                    }
                }
                None => self.finish(ChainStatus::Flow),
            }
        }
    }
}

impl<'s, S, L> Drop for SeqIter<'s, S, L>
where
    S: Source + 's,
    L: Link<S::Item> + 's,
    L::Out: 's,
{
    fn drop(&mut self) {
        // An early drop is an early stop; exhausted cursors already finished.
        self.finish(ChainStatus::Stop);
    }
}
