//! The per-run evaluation protocol.
//!
//! A pipeline is described by immutable links (see [`crate::link`]) and run
//! by chains: short-lived, exclusively owned objects that process one element
//! at a time and report a tri-state status. Terminal chains ([`Consumer`])
//! own the accumulating result.
//!
//! Exactly one `complete` call ends a run, issued by the driving loop on
//! normal exhaustion or early stop. Resource release is `Drop`, which also
//! covers a panic unwinding through a run.

/// Per-element status reported by a chain.
///
/// - `Flow`: the element was forwarded; keep pushing input.
/// - `Filter`: the element produced no output; keep pushing input.
/// - `Stop`: downstream has seen enough; cease pushing input. The run still
///   finishes with a single `complete` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStatus {
    /// Element forwarded downstream.
    Flow,
    /// Element dropped; upstream should continue.
    Filter,
    /// Upstream must stop producing input.
    Stop,
}

impl ChainStatus {
    /// Returns true if the driving loop must stop feeding elements.
    #[inline]
    pub fn is_stopped(self) -> bool {
        matches!(self, ChainStatus::Stop)
    }
}

/// One stage of a live evaluation run.
///
/// Implementations forward processed output to the next chain they were
/// composed over; [`Consumer`]s terminate the run instead.
pub trait Chain<T> {
    /// Processes one input element.
    fn process(&mut self, item: T) -> ChainStatus;

    /// Finalizes the run. Called exactly once by the driving loop; stage
    /// chains forward the call downstream so the terminal sees it.
    fn complete(&mut self, status: ChainStatus);

    /// Capability query: a sink that can take whole contiguous blocks.
    ///
    /// Negotiated once at evaluation start, never per element. The default
    /// declines; consumers with a tight-loop implementation advertise it.
    #[inline]
    fn as_bulk(&mut self) -> Option<&mut dyn BulkSink<T>>
    where
        T: Clone,
    {
        None
    }
}

/// Bulk-execution facet: consume a contiguous block in one call.
///
/// Must be observationally identical to processing the block element by
/// element through [`Chain::process`].
pub trait BulkSink<T: Clone> {
    /// Consumes every element of `items`, or a prefix if it reports `Stop`.
    fn push_slice(&mut self, items: &[T]) -> ChainStatus;
}

impl<'c, T, C: Chain<T> + ?Sized> Chain<T> for &'c mut C {
    #[inline]
    fn process(&mut self, item: T) -> ChainStatus {
        (**self).process(item)
    }

    #[inline]
    fn complete(&mut self, status: ChainStatus) {
        (**self).complete(status)
    }

    #[inline]
    fn as_bulk(&mut self) -> Option<&mut dyn BulkSink<T>>
    where
        T: Clone,
    {
        (**self).as_bulk()
    }
}

/// Terminal chain owning an accumulated result.
///
/// Created fresh per evaluation and never reused; `finish` hands the result
/// back after the run's single `complete` call.
pub trait Consumer<T>: Chain<T> {
    /// The finalized result type.
    type Output;

    /// Extracts the result. Only meaningful after `complete`.
    fn finish(self) -> Self::Output;
}
