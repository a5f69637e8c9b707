//! Verdict scenarios: the response follows the lookup result.

use crate::helpers::context::TestContext;

use vulnscan_core::types::Language;

/// Known vulnerability -> Risky.
#[tokio::test]
async fn test_java_library_with_known_vulnerability_is_risky() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libX")
        .given_known_vulnerability("CVE-2023-12345");

    ctx.when_scan_runs().await;

    ctx.then_response()
        .is_risky()
        .reason_contains("Known vulnerability");
}

/// No known vulnerability -> Safe.
#[tokio::test]
async fn test_java_library_without_vulnerabilities_is_safe() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libY").given_no_known_vulnerabilities();

    ctx.when_scan_runs().await;

    ctx.then_response()
        .is_safe()
        .reason_contains("No known vulnerabilities");
}

#[tokio::test]
async fn test_multiple_vulnerabilities_are_still_one_risky_verdict() {
    let mut ctx = TestContext::new();
    ctx.given_library(Language::JavaScript, "lodash")
        .given_known_vulnerability("CVE-2019-10744")
        .given_known_vulnerability("CVE-2020-8203")
        .given_known_vulnerability("CVE-2021-23337");

    ctx.when_scan_runs().await;

    ctx.then_response().is_risky();
}

#[tokio::test]
async fn test_reason_does_not_carry_identifiers() {
    let mut ctx = TestContext::new();
    ctx.given_java_library("libX")
        .given_known_vulnerability("CVE-2023-12345");

    ctx.when_scan_runs().await;

    let response = ctx.response();
    assert!(!response.reason().contains("CVE-2023-12345"));
}

#[tokio::test]
async fn test_lookup_receives_request_language_and_name() {
    let mut ctx = TestContext::new();
    ctx.given_library(Language::Go, "golang.org/x/net");

    ctx.when_scan_runs().await;

    assert_eq!(
        ctx.lookup.queries(),
        vec![(Language::Go, "golang.org/x/net".to_owned())]
    );
}
