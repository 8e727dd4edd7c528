//! Splitting an export into age buckets
//!
//! The pipeline for one export is load → classify → minimize → emit:
//!
//! - [`buckets`] assigns every record to exactly one [`AgeBucket`](crate::models::AgeBucket)
//!   relative to a reference instant captured once per run.
//! - [`minimize`] reduces a raw record to a [`MinimizedConversation`](crate::models::MinimizedConversation).
//! - [`pipeline`] writes one pretty-printed JSON file per non-empty bucket and
//!   reports counts and sizes on stdout.

pub mod buckets;
pub mod minimize;
pub mod pipeline;

pub use buckets::{Partition, classify, partition};
pub use minimize::minimize;
pub use pipeline::{BucketReport, SplitReport, split_export};
