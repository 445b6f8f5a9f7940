mod common;

use std::time::{Duration, Instant};

use common::channel_reader;
use scanline::{CancellationToken, ScanError, Scanner};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test(flavor = "multi_thread")]
async fn cancellation_wins_against_a_silent_stream() {
    init_tracing();
    // Keep the feeder alive: the stream must block, not end.
    let (_feed, probed, reader) = channel_reader();
    let scanner = Scanner::new(reader);
    let token = CancellationToken::new();

    // Cancel only once the blocking read is truly parked on the stream,
    // so the race is decided by cancellation, never by Eof.
    let canceller = token.clone();
    tokio::spawn(async move {
        let _ = tokio::task::spawn_blocking(move || probed.recv()).await;
        canceller.cancel();
    });

    let mut dest = String::from("untouched");
    let started = Instant::now();
    let err = scanner.scan_ctx(&token, &mut dest).await.expect_err("cancelled");

    assert!(matches!(err, ScanError::Cancelled), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(dest, "untouched");
}

#[tokio::test(flavor = "multi_thread")]
async fn completion_wins_when_a_line_is_ready() {
    init_tracing();
    let scanner = Scanner::new(&b"ready\n"[..]);
    let token = CancellationToken::new();

    let mut dest = String::new();
    scanner.scan_ctx(&token, &mut dest).await.expect("scan");
    assert_eq!(dest, "ready");
}

#[tokio::test(flavor = "multi_thread")]
async fn parse_outcome_propagates_through_the_race() {
    init_tracing();
    let scanner = Scanner::new(&b"not a number\n"[..]);
    let token = CancellationToken::new();

    let mut n: u64 = 3;
    let err = scanner.scan_ctx(&token, &mut n).await.expect_err("parse");
    assert!(matches!(err, ScanError::Parse(_)));
    assert_eq!(n, 3);
}

/// The documented resource-lifetime caveat: a cancelled read leaves one
/// blocked worker behind. It still holds the scanner lock, consumes the
/// next line when the stream finally yields, and discards it; only the
/// line after that reaches the next caller.
#[tokio::test(flavor = "multi_thread")]
async fn abandoned_read_discards_its_line_and_releases_the_lock() {
    init_tracing();
    let (feed, probed, reader) = channel_reader();
    let scanner = Scanner::new(reader);
    let token = CancellationToken::new();

    let canceller = token.clone();
    tokio::spawn(async move {
        let _ = tokio::task::spawn_blocking(move || probed.recv()).await;
        canceller.cancel();
    });

    let mut dest = String::new();
    let err = scanner.scan_ctx(&token, &mut dest).await.expect_err("cancelled");
    assert!(matches!(err, ScanError::Cancelled));

    // Unblock the abandoned worker with two lines in one chunk.
    feed.send(b"discarded\nkept\n".to_vec()).expect("feed");

    let follow_up = scanner.clone();
    let line = tokio::task::spawn_blocking(move || follow_up.read_line())
        .await
        .expect("join")
        .expect("read");
    assert_eq!(line, "kept");
}
