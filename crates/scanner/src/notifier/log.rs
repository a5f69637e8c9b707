use vulnscan_core::error::NotificationError;
use vulnscan_core::pipeline::Notifier;
use vulnscan_core::types::{Request, VulnerabilityId};

use super::notification_message;

/// 알림마다 `warn!` 이벤트 하나를 남기는 알림기
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    async fn notify(
        &self,
        request: &Request,
        vulnerabilities: &[VulnerabilityId],
    ) -> Result<(), NotificationError> {
        tracing::warn!(
            library = request.name(),
            language = %request.language(),
            count = vulnerabilities.len(),
            message = %notification_message(vulnerabilities),
            "vulnerable library detected"
        );
        Ok(())
    }
}
