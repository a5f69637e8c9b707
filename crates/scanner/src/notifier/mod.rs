//! 알림 협력자 구현
//!
//! - [`LogNotifier`]: `tracing` 경고 이벤트로 알림 (실패하지 않음)
//! - [`ChannelNotifier`]: 바운디드 mpsc 채널로 [`NotificationEvent`](crate::NotificationEvent) 전송

mod channel;
mod log;

pub use channel::ChannelNotifier;
pub use log::LogNotifier;

use vulnscan_core::types::VulnerabilityId;

use crate::verdict::RISKY_REASON;

/// 알림 메시지를 생성합니다: `"Known vulnerability: CVE-1, CVE-2"`.
pub fn notification_message(vulnerabilities: &[VulnerabilityId]) -> String {
    let ids = vulnerabilities
        .iter()
        .map(VulnerabilityId::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{RISKY_REASON}: {ids}")
}
