//! Explicit request generations for overlapping fetches.
//!
//! Each issued request carries a monotonically increasing generation tag,
//! and issuing a new one cancels the previous in-flight token. A result is
//! only surfaced while its tag is still the latest, so a stale response can
//! never clobber newer state no matter how the underlying futures race.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::interface::{CardFeedApi, FeedError, FetchRequest, Item};

/// Ownership token for one issued request: the generation tag plus the
/// cancellation token the fetch should observe.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    generation: u64,
    token: CancellationToken,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// Tracks the latest issued request across overlapping fetches.
pub struct FeedSession<A> {
    api: A,
    latest: AtomicU64,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl<A: CardFeedApi> FeedSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            latest: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }

    /// Cancel the previous in-flight request and tag a new one. Token
    /// replacement and generation bump happen under the same lock so tags
    /// observed by `is_current` always agree with which token was
    /// cancelled.
    pub fn issue(&self) -> RequestTicket {
        let mut slot = self.in_flight.lock();
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let token = CancellationToken::new();
        if let Some(previous) = slot.replace(token.clone()) {
            previous.cancel();
        }
        RequestTicket { generation, token }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.generation
    }

    /// Issue a ticket, run the fetch, and surface the result only if no
    /// newer request was issued meanwhile. Superseded requests resolve to
    /// [`FeedError::Cancelled`] like any other cancellation.
    pub async fn fetch_latest(&self, request: FetchRequest) -> Result<Vec<Item>, FeedError> {
        let ticket = self.issue();
        let items = self.api.fetch_items(request, ticket.token()).await?;
        if !self.is_current(&ticket) {
            return Err(FeedError::Cancelled);
        }
        Ok(items)
    }
}
