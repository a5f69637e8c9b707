//! 알림 이벤트
//!
//! [`NotificationEvent`]는 [`ChannelNotifier`](crate::ChannelNotifier)가
//! `tokio::mpsc` 채널로 내보내는 이벤트입니다.
//!
//! # 사용 예시
//!
//! ```
//! use vulnscan_core::{Language, Request, VulnerabilityId};
//! use vulnscan_scanner::NotificationEvent;
//!
//! let event = NotificationEvent::new(
//!     Request::new(Language::Java, "libX"),
//!     vec![VulnerabilityId::new("CVE-2023-12345")],
//! );
//! assert_eq!(event.message, "Known vulnerability: CVE-2023-12345");
//! ```

use std::fmt;
use std::time::SystemTime;

use vulnscan_core::types::{Request, VulnerabilityId};

use crate::notifier::notification_message;

/// 취약점 알림 이벤트
///
/// `Send + Sync + 'static` 바운드를 만족하여 `tokio::mpsc` 전송이 가능합니다.
#[derive(Debug, Clone)]
pub struct NotificationEvent {
    /// 이벤트 고유 ID
    pub id: String,
    /// 원본 스캔 요청
    pub request: Request,
    /// 발견된 취약점 식별자 (조회 결과 순서)
    pub vulnerabilities: Vec<VulnerabilityId>,
    /// 사람이 읽는 알림 메시지
    pub message: String,
    /// 이벤트 생성 시각
    pub created_at: SystemTime,
}

impl NotificationEvent {
    pub fn new(request: Request, vulnerabilities: Vec<VulnerabilityId>) -> Self {
        let message = notification_message(&vulnerabilities);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            request,
            vulnerabilities,
            message,
            created_at: SystemTime::now(),
        }
    }
}

impl fmt::Display for NotificationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NotificationEvent[{}] {}: {}", self.id, self.request, self.message)
    }
}
