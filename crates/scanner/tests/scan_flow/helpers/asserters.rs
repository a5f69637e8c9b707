//! Fluent asserters for scan outcomes.

use vulnscan_core::types::{Response, Verdict, VulnerabilityId};

use super::mocks::RecordedNotification;

pub struct ResponseAsserter<'a> {
    response: &'a Response,
}

#[allow(dead_code)]
impl<'a> ResponseAsserter<'a> {
    pub fn new(response: &'a Response) -> Self {
        Self { response }
    }

    pub fn response(&self) -> &'a Response {
        self.response
    }

    pub fn is_risky(self) -> Self {
        assert_eq!(
            self.response.verdict(),
            Verdict::Risky,
            "expected Risky, got {}",
            self.response
        );
        self
    }

    pub fn is_safe(self) -> Self {
        assert_eq!(
            self.response.verdict(),
            Verdict::Safe,
            "expected Safe, got {}",
            self.response
        );
        self
    }

    pub fn reason_contains(self, text: &str) -> Self {
        assert!(
            self.response.reason().contains(text),
            "reason {:?} should contain {:?}",
            self.response.reason(),
            text
        );
        self
    }
}

pub struct NotificationAsserter {
    calls: Vec<RecordedNotification>,
}

#[allow(dead_code)]
impl NotificationAsserter {
    pub fn new(calls: Vec<RecordedNotification>) -> Self {
        Self { calls }
    }

    pub fn was_not_sent(self) -> Self {
        assert!(
            self.calls.is_empty(),
            "expected no notification, got {:?}",
            self.calls
        );
        self
    }

    pub fn was_sent_times(self, times: usize) -> Self {
        assert_eq!(
            self.calls.len(),
            times,
            "unexpected notification count: {:?}",
            self.calls
        );
        self
    }

    pub fn was_sent_once(self) -> Self {
        self.was_sent_times(1)
    }

    /// Checks the identifiers carried by the most recent notification.
    pub fn with_vulnerabilities(self, ids: &[&str]) -> Self {
        let last = self.calls.last().expect("no notification recorded");
        let expected: Vec<VulnerabilityId> =
            ids.iter().map(|id| VulnerabilityId::new(*id)).collect();
        assert_eq!(last.vulnerabilities, expected);
        self
    }

    pub fn for_library(self, name: &str) -> Self {
        let last = self.calls.last().expect("no notification recorded");
        assert_eq!(last.request.name(), name);
        self
    }
}
