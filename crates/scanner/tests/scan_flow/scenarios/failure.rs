//! Failure scenarios: collaborator errors propagate unchanged.

use crate::helpers::context::TestContext;

use vulnscan_core::error::{LookupError, NotificationError, ScanError};

#[tokio::test]
async fn test_lookup_failure_fails_scan_without_notification() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libX")
        .given_known_vulnerability("CVE-2023-12345")
        .given_lookup_failure("database offline");

    ctx.when_scan_runs().await;

    let err = ctx.then_error();
    assert!(
        matches!(
            err,
            ScanError::Lookup(LookupError::Unavailable(reason)) if reason == "database offline"
        ),
        "unexpected error: {err:?}"
    );
    assert_eq!(err.stage(), "lookup");
    ctx.then_notification().was_not_sent();
}

#[tokio::test]
async fn test_notification_failure_fails_scan() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libX")
        .given_known_vulnerability("CVE-2023-12345")
        .given_notification_failure("smtp unreachable");

    ctx.when_scan_runs().await;

    let err = ctx.then_error();
    assert!(
        matches!(
            err,
            ScanError::Notification(NotificationError::Delivery(reason))
                if reason == "smtp unreachable"
        ),
        "unexpected error: {err:?}"
    );
    assert_eq!(err.stage(), "notify");
    ctx.then_notification().was_sent_once();
}

/// A broken notifier is irrelevant when nothing needs reporting.
#[tokio::test]
async fn test_notification_failure_ignored_for_safe_library() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libY")
        .given_no_known_vulnerabilities()
        .given_notification_failure("smtp unreachable");

    ctx.when_scan_runs().await;

    ctx.then_response().is_safe();
}
