//! Push evaluation: drive a pipeline into a terminal consumer.

use tracing::trace;

use crate::chain::{Chain, ChainStatus, Consumer};
use crate::link::Link;
use crate::source::Source;

/// Runs `source` through `link` into `consumer` and extracts the result.
///
/// Negotiates the execution strategy once, up front: a contiguous source
/// takes the bulk path through the link chain's `run_slice`, everything else
/// the generic element loop. Both paths produce identical output; `complete`
/// fires exactly once, and all per-run state is released by drop - including
/// when a caller-supplied closure panics mid-run, in which case `complete`
/// is skipped but release still happens.
pub(crate) fn execute<S, L, C>(source: &S, link: &L, mut consumer: C) -> C::Output
where
    S: Source,
    L: Link<S::Item>,
    C: Consumer<L::Out>,
{
    if let Some(items) = source.try_slice() {
        trace!(len = items.len(), "evaluating over contiguous block");
        let status = link.run_slice(items, &mut consumer);
        consumer.complete(status);
    } else {
        trace!("evaluating over generic enumeration");
        let mut activity = link.build(&mut consumer);
        let mut status = ChainStatus::Flow;
        for item in source.enumerate() {
            status = activity.process(item);
            if status.is_stopped() {
                break;
            }
        }
        activity.complete(status);
    }
    consumer.finish()
}
