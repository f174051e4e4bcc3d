//! sequent - lazy, composable sequence pipelines with operator fusion
//!
//! This crate builds pipelines of transform stages (project, filter,
//! flatten, slice) over heterogeneous sources and evaluates them either by
//! pull (an iterator) or by push (a terminal reduction), picking faster
//! execution strategies transparently when the shapes allow:
//!
//! - Pipeline descriptors are immutable and cheap to share; applying an
//!   operator returns a new pipeline and never touches the original.
//! - Adjacent stages merge at append time: `map(f).map(g)` runs as one
//!   stage, `map(f).filter(p)` as one fused stage, consecutive skips and
//!   takes combine arithmetically.
//! - Contiguous sources (vectors, shared slices) evaluate through tight
//!   block loops instead of per-element dispatch; sliceable sources answer
//!   `skip`/`take` by adjusting their window.
//!
//! Every fast path is an execution strategy only - output is always
//! identical to the naive element-by-element evaluation.
//!
//! # Example
//!
//! ```
//! use sequent::from_vec;
//!
//! let total = from_vec(vec![1, 2, 3, 4])
//!     .map(|x| x * 10)
//!     .filter(|x| *x >= 20)
//!     .sum()
//!     .unwrap();
//! assert_eq!(total, 90);
//! ```
//!
//! Pipelines are values - derive freely, evaluate repeatedly:
//!
//! ```
//! use sequent::{range, Pipeline};
//!
//! let evens = range(0, 100).unwrap().filter(|x| x % 2 == 0);
//! let firsts = evens.clone().take(3);
//!
//! assert_eq!(firsts.to_vec(), vec![0, 2, 4]);
//! assert_eq!(evens.count(), 50);
//! ```
//!
//! # Architecture
//!
//! ```text
//! from_vec(v)                 -> Seq<SliceSource<T>, Identity>
//!     .map(f)                      -> Seq<_, MapLink<F>>        (descriptor only)
//!     .filter(p)                   -> Seq<_, MapFilterLink<F, P>>  (fused)
//!     .sum()                       -> builds a per-run chain and drives it
//! ```
//!
//! Descriptors ([`link`]) are long-lived and shared; per-run state
//! ([`chain`], the consumers) is created fresh for every evaluation and
//! released when the run ends, on every exit path. Sources ([`source`])
//! expose capabilities - a contiguous view, a cheap length - that the
//! driver negotiates once per run, never per element.
//!
//! External containers plug in through a registered finder keyed by the
//! container type (see [`register_source_finder`]); numeric reductions are generic
//! over [`Numeric`], one implementation serving every scalar type including
//! [`rust_decimal::Decimal`].

pub mod chain;
pub mod consumer;
pub mod error;
pub mod link;
pub mod numeric;
pub mod source;

mod consume;
mod factory;
mod ops;
mod pull;
mod seq;

pub use chain::{BulkSink, Chain, ChainStatus, Consumer};
pub use error::{Result, SequentError};
pub use factory::{
    empty, from_deque, from_iter, from_provider, from_shared, from_slice, from_source, from_vec,
    range, repeat, repeat_forever,
};
pub use numeric::Numeric;
pub use pull::SeqIter;
pub use seq::{Pipeline, Seq};
pub use source::{register_source_finder, registered_finders, ProviderSource, Source};
