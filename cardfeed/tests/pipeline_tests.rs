//! End-to-end pipeline tests: fetch -> server filter -> client ranking,
//! exercised through the public API the way a consuming view would.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use cardfeed::generator::generate_items;
use cardfeed::ranking::rank;
use cardfeed::text::normalize;
use cardfeed::{CardFeedApi, FeedError, FeedService, FeedSession, FetchRequest};

/// Display cap a consuming view would configure.
const DISPLAY_LIMIT: usize = 100;

#[tokio::test]
async fn fetch_then_rank_full_pipeline() {
    let service = FeedService::new();
    let token = CancellationToken::new();

    let items = service
        .fetch_items(FetchRequest::new(2_000, "react").with_delay_window(0, 5), &token)
        .await
        .unwrap();

    // Server query appears in every title, so nothing was filtered away.
    assert_eq!(items.len(), 2_000);
    assert!(items.windows(2).all(|w| w[0].score >= w[1].score));

    let results = rank(&items, "quantum", DISPLAY_LIMIT);
    assert_eq!(results.total_count, 2_000);
    assert!(results.match_count > 0, "vocabulary word should match");
    assert!(results.shown.len() <= DISPLAY_LIMIT);
    assert!(results.shown.len() as u64 <= results.match_count);
}

#[tokio::test]
async fn two_fetches_same_request_are_identical() {
    let service = FeedService::new();
    let token = CancellationToken::new();

    let a = service
        .fetch_items(FetchRequest::new(500, "replay").with_delay_window(0, 0), &token)
        .await
        .unwrap();
    let b = service
        .fetch_items(FetchRequest::new(500, "replay").with_delay_window(0, 0), &token)
        .await
        .unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn rank_of_unfiltered_batch_with_empty_filter() {
    let service = FeedService::new();
    let token = CancellationToken::new();

    let items = service
        .fetch_items(FetchRequest::new(610, "").with_delay_window(0, 0), &token)
        .await
        .unwrap();
    assert_eq!(items.len(), 610);

    let results = rank(&items, "", DISPLAY_LIMIT);
    assert_eq!(results.shown.len(), DISPLAY_LIMIT);
    assert_eq!(results.match_count, 610);
    assert_eq!(results.total_count, 610);
}

#[test]
fn absent_query_yields_no_matches() {
    let items = generate_items(100, "");
    let results = rank(&items, "zzzzznotfound", DISPLAY_LIMIT);
    assert_eq!(results.match_count, 0);
    assert!(results.shown.is_empty());
}

#[test]
fn normalization_agrees_between_filter_stages() {
    // The same transform backs the server filter and the client ranking,
    // so a query that survives the server round-trip also matches on the
    // client.
    let items = generate_items(200, "Crème Brûlée");
    let query = normalize("Crème Brûlée");
    assert_eq!(query, "creme brulee");

    let results = rank(&items, "CRÈME brûlée!", DISPLAY_LIMIT);
    // Every title embeds the raw query, so every item matches on title.
    assert_eq!(results.match_count, 200);
}

#[tokio::test]
async fn rapid_supersession_applies_only_latest() {
    let session = Arc::new(FeedSession::new(FeedService::new()));

    // Simulate a user typing: each keystroke supersedes the previous
    // request mid-delay.
    let mut handles = Vec::new();
    for query in ["r", "re", "rea", "reac"] {
        let session = Arc::clone(&session);
        let request = FetchRequest::new(100, query).with_delay_window(300, 300);
        handles.push(tokio::spawn(async move {
            session.fetch_latest(request).await
        }));
        tokio::time::sleep(Duration::from_millis(30)).await;
    }
    let final_items = session
        .fetch_latest(FetchRequest::new(100, "react").with_delay_window(0, 0))
        .await
        .unwrap();

    for handle in handles {
        let superseded = handle.await.unwrap();
        assert!(
            matches!(superseded, Err(FeedError::Cancelled)),
            "superseded request must fail with Cancelled"
        );
    }
    assert_eq!(final_items, generate_items(100, "react"));
}
