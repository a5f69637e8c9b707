//! Notification scenarios: notified iff the lookup result is non-empty.

use std::time::Duration;

use crate::helpers::context::TestContext;

#[tokio::test]
async fn test_notifier_receives_exact_vulnerability_list() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libX")
        .given_known_vulnerability("CVE-2023-12345");

    ctx.when_scan_runs().await;

    ctx.then_notification()
        .was_sent_once()
        .for_library("libX")
        .with_vulnerabilities(&["CVE-2023-12345"]);
}

#[tokio::test]
async fn test_notifier_not_invoked_for_safe_library() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libY").given_no_known_vulnerabilities();

    ctx.when_scan_runs().await;

    ctx.then_notification().was_not_sent();
}

#[tokio::test]
async fn test_notification_preserves_order_and_duplicates() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libX")
        .given_known_vulnerability("CVE-2")
        .given_known_vulnerability("CVE-1")
        .given_known_vulnerability("CVE-2");

    ctx.when_scan_runs().await;

    ctx.then_notification()
        .was_sent_once()
        .with_vulnerabilities(&["CVE-2", "CVE-1", "CVE-2"]);
}

/// The scan does not return before the notification finishes.
#[tokio::test(start_paused = true)]
async fn test_notification_completes_before_response() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libX")
        .given_known_vulnerability("CVE-2023-12345")
        .given_slow_notifier(Duration::from_secs(30));

    ctx.when_scan_runs().await;

    assert!(ctx.notifier.is_completed());
    ctx.then_response().is_risky();
}
