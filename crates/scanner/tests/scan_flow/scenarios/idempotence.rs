//! Repeated scans with unchanged collaborators yield identical responses.

use crate::helpers::context::TestContext;

#[tokio::test]
async fn test_repeated_risky_scans_are_identical() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libX")
        .given_known_vulnerability("CVE-2023-12345");

    ctx.when_scan_runs().await;
    let first = ctx.response();
    ctx.when_scan_runs().await;
    let second = ctx.response();

    assert_eq!(first, second);
    // one notification per risky scan
    ctx.then_notification().was_sent_times(2);
}

#[tokio::test]
async fn test_repeated_safe_scans_are_identical() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libY").given_no_known_vulnerabilities();

    ctx.when_scan_runs().await;
    let first = ctx.response();
    ctx.when_scan_runs().await;
    let second = ctx.response();

    assert_eq!(first, second);
    ctx.then_notification().was_not_sent();
}
