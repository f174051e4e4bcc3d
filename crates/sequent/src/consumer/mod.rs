//! Terminal consumers: chains that accumulate a single result.
//!
//! All reductions share one shape - process elements, finalize on
//! `complete`, hand the result out through `finish` - and differ only in
//! accumulation logic. The numeric reductions are generic over
//! [`crate::Numeric`], so one implementation serves every scalar type.
//!
//! Consumers that can absorb whole contiguous blocks advertise the
//! [`crate::BulkSink`] facet; the driver negotiates it once per run.

mod collect;
mod count;
mod fold;
mod minmax;
mod predicate;
mod sum;

pub use collect::ToVecConsumer;
pub use count::CountConsumer;
pub use fold::{FoldConsumer, ReduceConsumer};
pub use minmax::{MaxConsumer, MaxOptConsumer, MinConsumer, MinOptConsumer};
pub use predicate::{AllConsumer, AnyConsumer};
pub use sum::{SumConsumer, SumOptConsumer};
