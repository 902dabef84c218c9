use rollcall_attendance::{ScanAlert, ScanFeed, SCAN_ERROR_MESSAGE};
use tokio::sync::broadcast::error::TryRecvError;

#[derive(Debug, thiserror::Error)]
#[error("camera unavailable")]
struct CameraError;

#[tokio::test]
async fn non_empty_decode_surfaces_exactly_once() {
    let feed = ScanFeed::new();
    let mut rx = feed.subscribe();

    feed.on_scan(Some("ABC123"));

    assert_eq!(rx.recv().await.unwrap(), ScanAlert::Decoded("ABC123".to_owned()));
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)), "exactly one alert");
}

#[tokio::test]
async fn empty_and_missing_decodes_surface_nothing() {
    let feed = ScanFeed::new();
    let mut rx = feed.subscribe();

    feed.on_scan(None);
    feed.on_scan(Some(""));

    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn scanner_failure_produces_the_fixed_message() {
    let feed = ScanFeed::new();
    let mut rx = feed.subscribe();

    feed.on_error(&CameraError);

    match rx.recv().await.unwrap() {
        ScanAlert::Failed(msg) => assert_eq!(msg, SCAN_ERROR_MESSAGE),
        other => panic!("expected a failure alert, got {other:?}"),
    }
}

#[tokio::test]
async fn every_subscriber_sees_every_alert() {
    let feed = ScanFeed::new();
    let mut rx1 = feed.subscribe();
    let mut rx2 = feed.subscribe();

    feed.on_scan(Some("ROLL-42"));

    assert_eq!(rx1.recv().await.unwrap(), ScanAlert::Decoded("ROLL-42".to_owned()));
    assert_eq!(rx2.recv().await.unwrap(), ScanAlert::Decoded("ROLL-42".to_owned()));
}

#[test]
fn publishing_without_subscribers_is_harmless() {
    let feed = ScanFeed::new();
    feed.on_scan(Some("nobody listening"));
    feed.on_error(&CameraError);

    // A late subscriber starts with a clean stream.
    let mut rx = feed.subscribe();
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn decoded_payloads_are_verbatim() {
    let feed = ScanFeed::new();
    let mut rx = feed.subscribe();

    let payload = "https://example.com/checkin?code=42&室";
    feed.on_scan(Some(payload));

    assert_eq!(rx.recv().await.unwrap(), ScanAlert::Decoded(payload.to_owned()));
}
