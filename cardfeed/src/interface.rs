//! Public value types and the service boundary.
//!
//! These types are the whole external surface: consumers issue
//! `FetchRequest`s against a `CardFeedApi`, receive `Item`s, and feed them
//! through `ranking::rank` for display.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Default simulated latency window in milliseconds.
pub const DEFAULT_MIN_DELAY_MS: u64 = 350;
pub const DEFAULT_MAX_DELAY_MS: u64 = 900;

/// A synthetic card. Immutable once generated. `id` is unique within a
/// single generated batch only, not globally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Base ranking score drawn from the seeded stream, in `0..100_000`.
    pub score: u32,
    /// Ordered keyword draws from the fixed vocabulary.
    pub keywords: Vec<String>,
    /// Large filler text (~1.2-2.0 KB) that makes substring scans expensive.
    pub blob: String,
}

/// Parameters for one simulated fetch.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub count: usize,
    /// The "server" query. Seeds generation and drives the server-side
    /// substring filter; empty means unfiltered.
    pub query: String,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl FetchRequest {
    pub fn new(count: usize, query: impl Into<String>) -> Self {
        Self {
            count,
            query: query.into(),
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }

    pub fn with_delay_window(mut self, min_delay_ms: u64, max_delay_ms: u64) -> Self {
        self.min_delay_ms = min_delay_ms;
        self.max_delay_ms = max_delay_ms;
        self
    }
}

/// Ranked, truncated view over a generated batch.
#[derive(Debug, Clone, Serialize)]
pub struct RankedResults {
    /// Survivors, best first, truncated to the display limit.
    pub shown: Vec<Item>,
    /// Input size before any filtering.
    pub total_count: u64,
    /// Survivors after filtering, before truncation.
    pub match_count: u64,
}

/// Error type for feed operations.
///
/// Generation and ranking are infallible for valid inputs, so `Cancelled`
/// is the only error callers are expected to see in practice; they swallow
/// it silently when a request has been superseded.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request cancelled")]
    Cancelled,
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// The fetch boundary. Object-safe so UIs can mock it.
#[async_trait::async_trait]
pub trait CardFeedApi: Send + Sync {
    /// Simulate a network fetch: wait a random delay inside the request's
    /// window (abortable via `token`), then generate and server-filter the
    /// batch. A cancelled call fails with [`FeedError::Cancelled`] and
    /// never yields data.
    async fn fetch_items(
        &self,
        request: FetchRequest,
        token: &CancellationToken,
    ) -> Result<Vec<Item>, FeedError>;
}
