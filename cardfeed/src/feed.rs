//! Fetch orchestration: simulated latency in front of generation plus the
//! server-side filter.
//!
//! Cancellation architecture: callers hold a `CancellationToken`; the
//! latency wait races against it, and the blocking generation re-checks it
//! before results surface. A cancelled fetch always fails with
//! [`FeedError::Cancelled`], never with data.

use std::time::Duration;

use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::generator::{generate_items, server_filter};
use crate::interface::{CardFeedApi, FeedError, FetchRequest, Item};
use crate::text::normalize;

/// Stateless fetch facade. Every call is pure given its request, so one
/// service instance can serve any number of overlapping requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedService;

impl FeedService {
    pub fn new() -> Self {
        Self
    }

    /// Uniform delay draw from the request's window. The draw itself is
    /// not part of the determinism contract, only the generated data is.
    fn draw_delay(request: &FetchRequest) -> Result<Duration, FeedError> {
        if request.max_delay_ms < request.min_delay_ms {
            return Err(FeedError::InvalidInput(format!(
                "delay window inverted: min {}ms > max {}ms",
                request.min_delay_ms, request.max_delay_ms
            )));
        }
        let ms = rand::thread_rng().gen_range(request.min_delay_ms..=request.max_delay_ms);
        Ok(Duration::from_millis(ms))
    }
}

#[async_trait::async_trait]
impl CardFeedApi for FeedService {
    async fn fetch_items(
        &self,
        request: FetchRequest,
        token: &CancellationToken,
    ) -> Result<Vec<Item>, FeedError> {
        let delay = Self::draw_delay(&request)?;

        if token.is_cancelled() {
            return Err(FeedError::Cancelled);
        }
        tokio::select! {
            _ = token.cancelled() => return Err(FeedError::Cancelled),
            _ = tokio::time::sleep(delay) => {}
        }

        // Generation walks the whole seeded stream and the filter scans
        // every blob; keep both off the async workers.
        let token_for_task = token.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let items = generate_items(request.count, &request.query);
            if token_for_task.is_cancelled() {
                return Err(FeedError::Cancelled);
            }
            let query = normalize(&request.query);
            Ok(server_filter(items, &query))
        });

        match handle.await {
            Ok(result) => result,
            Err(_join_error) => Err(FeedError::Cancelled),
        }
    }
}
