//! cardfeed - deterministic synthetic card-feed workload engine
//!
//! Generates reproducible mock datasets from a query seed, simulates
//! cancellable network latency, and runs a substring-based relevance
//! scoring/filter/sort/truncate pipeline over the results. Everything
//! derived from the seed is bit-exact across platforms, so consumers
//! (UIs, benchmarks) can stress themselves with identical workloads.

pub mod feed;
pub mod generator;
pub mod interface;
pub mod ranking;
pub mod rng;
pub mod session;
pub mod text;

pub use feed::FeedService;
pub use interface::*;
pub use session::{FeedSession, RequestTicket};
