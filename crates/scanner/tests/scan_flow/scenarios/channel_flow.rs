//! End-to-end flow through the real database lookup and channel notifier.

use std::sync::Arc;
use std::time::Duration;

use vulnscan_core::error::{NotificationError, ScanError};
use vulnscan_core::types::{Language, Request, Severity, Verdict, VulnerabilityId};
use vulnscan_scanner::{ChannelNotifier, DbLookup, Scanner, VulnDb, VulnDbEntry};

const TIMEOUT: Duration = Duration::from_secs(5);

fn db() -> Arc<VulnDb> {
    Arc::new(VulnDb::from_entries(vec![VulnDbEntry {
        id: VulnerabilityId::new("CVE-2023-12345"),
        language: Language::Java,
        package: "libX".to_owned(),
        severity: Severity::High,
        description: "remote code execution".to_owned(),
        published: "2023-06-01".to_owned(),
    }]))
}

#[tokio::test]
async fn test_risky_scan_emits_notification_event() {
    let (notifier, mut rx) = ChannelNotifier::new(8);
    let scanner = Scanner::new(DbLookup::new(db(), Severity::Info), notifier);

    let response = scanner
        .scan(&Request::new(Language::Java, "libX"))
        .await
        .unwrap();
    assert_eq!(response.verdict(), Verdict::Risky);

    let event = tokio::time::timeout(TIMEOUT, rx.recv())
        .await
        .expect("timed out waiting for notification")
        .expect("channel closed");
    assert_eq!(event.request.name(), "libX");
    assert_eq!(event.message, "Known vulnerability: CVE-2023-12345");
}

#[tokio::test]
async fn test_safe_scan_emits_nothing() {
    let (notifier, mut rx) = ChannelNotifier::new(8);
    let scanner = Scanner::new(DbLookup::new(db(), Severity::Info), notifier);

    let response = scanner
        .scan(&Request::new(Language::Java, "libY"))
        .await
        .unwrap();
    assert_eq!(response.verdict(), Verdict::Safe);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_min_severity_can_make_library_safe() {
    let (notifier, mut rx) = ChannelNotifier::new(8);
    let scanner = Scanner::new(DbLookup::new(db(), Severity::Critical), notifier);

    let response = scanner
        .scan(&Request::new(Language::Java, "libX"))
        .await
        .unwrap();
    assert_eq!(response.verdict(), Verdict::Safe);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_closed_channel_fails_risky_scan() {
    let (notifier, rx) = ChannelNotifier::new(1);
    drop(rx);
    let scanner = Scanner::new(DbLookup::new(db(), Severity::Info), notifier);

    let err = scanner
        .scan(&Request::new(Language::Java, "libX"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ScanError::Notification(NotificationError::ChannelClosed(_))
    ));
}
