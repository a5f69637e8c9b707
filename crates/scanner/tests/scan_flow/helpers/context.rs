//! Test context factory.
//!
//! Every scenario starts with `TestContext::new()`, configures the mock
//! collaborators with `given_*` calls, runs the scan with `when_scan_runs`,
//! and checks the outcome with `then_*` calls.

use std::sync::Arc;
use std::time::Duration;

use vulnscan_core::error::ScanError;
use vulnscan_core::types::{Language, Request, Response};
use vulnscan_scanner::Scanner;

use super::asserters::{NotificationAsserter, ResponseAsserter};
use super::mocks::{MockLookup, MockNotifier};

pub struct TestContext {
    pub lookup: Arc<MockLookup>,
    pub notifier: Arc<MockNotifier>,
    pub scanner: Scanner<Arc<MockLookup>, Arc<MockNotifier>>,
    request: Option<Request>,
    outcome: Option<Result<Response, ScanError>>,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let lookup = Arc::new(MockLookup::default());
        let notifier = Arc::new(MockNotifier::default());
        let scanner = Scanner::new(Arc::clone(&lookup), Arc::clone(&notifier));
        Self {
            lookup,
            notifier,
            scanner,
            request: None,
            outcome: None,
        }
    }

    // --- given ---

    pub fn given_library(&mut self, language: Language, name: &str) -> &mut Self {
        self.request = Some(
            Request::builder()
                .language(language)
                .name(name)
                .build()
                .expect("valid request"),
        );
        self
    }

    pub fn given_java_library(&mut self, name: &str) -> &mut Self {
        self.given_library(Language::Java, name)
    }

    pub fn given_known_vulnerability(&mut self, id: &str) -> &mut Self {
        self.lookup.add_vulnerability(id);
        self
    }

    pub fn given_no_known_vulnerabilities(&mut self) -> &mut Self {
        self.lookup.clear();
        self
    }

    pub fn given_lookup_failure(&mut self, reason: &str) -> &mut Self {
        self.lookup.fail_with(reason);
        self
    }

    pub fn given_notification_failure(&mut self, reason: &str) -> &mut Self {
        self.notifier.fail_with(reason);
        self
    }

    pub fn given_slow_notifier(&mut self, delay: Duration) -> &mut Self {
        self.notifier.delay_by(delay);
        self
    }

    // --- when ---

    /// Runs one scan and stores its outcome, replacing any earlier outcome.
    pub async fn when_scan_runs(&mut self) -> &mut Self {
        let request = self.request.clone().expect("call given_library first");
        self.outcome = Some(self.scanner.scan(&request).await);
        self
    }

    // --- then ---

    pub fn then_response(&self) -> ResponseAsserter<'_> {
        match self.outcome.as_ref().expect("call when_scan_runs first") {
            Ok(response) => ResponseAsserter::new(response),
            Err(e) => panic!("expected a response but the scan failed: {e}"),
        }
    }

    pub fn then_error(&self) -> &ScanError {
        match self.outcome.as_ref().expect("call when_scan_runs first") {
            Ok(response) => panic!("expected an error but got response: {response}"),
            Err(e) => e,
        }
    }

    pub fn then_notification(&self) -> NotificationAsserter {
        NotificationAsserter::new(self.notifier.calls())
    }

    pub fn response(&self) -> Response {
        self.then_response().response().clone()
    }
}
