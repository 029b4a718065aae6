//! Review storage backends.
//!
//! The storage contract itself ([`ReviewStore`](learnhub_reviews::ReviewStore))
//! lives in the domain crate; this module only provides implementations.

pub mod in_memory;

pub use in_memory::InMemoryReviewStore;
