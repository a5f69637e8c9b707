//! Recording mock collaborators.
//!
//! Both mocks are shared through `Arc` with the scanner under test, so the
//! test can reconfigure them and inspect recorded calls after a scan.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use vulnscan_core::error::{LookupError, NotificationError};
use vulnscan_core::pipeline::{Notifier, VulnerabilityLookup};
use vulnscan_core::types::{Language, Request, VulnerabilityId};

/// A lookup that returns a configurable result and records every query.
#[derive(Default)]
pub struct MockLookup {
    vulnerabilities: Mutex<Vec<VulnerabilityId>>,
    failure: Mutex<Option<String>>,
    queries: Mutex<Vec<(Language, String)>>,
}

#[allow(dead_code)]
impl MockLookup {
    pub fn add_vulnerability(&self, id: &str) {
        self.vulnerabilities
            .lock()
            .unwrap()
            .push(VulnerabilityId::new(id));
    }

    pub fn clear(&self) {
        self.vulnerabilities.lock().unwrap().clear();
    }

    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock().unwrap() = Some(reason.to_owned());
    }

    pub fn queries(&self) -> Vec<(Language, String)> {
        self.queries.lock().unwrap().clone()
    }
}

impl VulnerabilityLookup for MockLookup {
    async fn analyze(
        &self,
        language: Language,
        name: &str,
    ) -> Result<Vec<VulnerabilityId>, LookupError> {
        self.queries
            .lock()
            .unwrap()
            .push((language, name.to_owned()));

        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(LookupError::Unavailable(reason));
        }
        Ok(self.vulnerabilities.lock().unwrap().clone())
    }
}

/// A notification observed by [`MockNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotification {
    pub request: Request,
    pub vulnerabilities: Vec<VulnerabilityId>,
}

/// A notifier that records every call, with optional failure and delay.
#[derive(Default)]
pub struct MockNotifier {
    calls: Mutex<Vec<RecordedNotification>>,
    failure: Mutex<Option<String>>,
    delay: Mutex<Option<Duration>>,
    /// Set once a call has run to completion (after any delay).
    pub completed: AtomicBool,
}

#[allow(dead_code)]
impl MockNotifier {
    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock().unwrap() = Some(reason.to_owned());
    }

    pub fn delay_by(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<RecordedNotification> {
        self.calls.lock().unwrap().clone()
    }

    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }
}

impl Notifier for MockNotifier {
    async fn notify(
        &self,
        request: &Request,
        vulnerabilities: &[VulnerabilityId],
    ) -> Result<(), NotificationError> {
        self.calls.lock().unwrap().push(RecordedNotification {
            request: request.clone(),
            vulnerabilities: vulnerabilities.to_vec(),
        });

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failure.lock().unwrap().clone();
        if let Some(reason) = failure {
            return Err(NotificationError::Delivery(reason));
        }

        self.completed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
