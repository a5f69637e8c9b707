use tokio::sync::mpsc;

use vulnscan_core::error::NotificationError;
use vulnscan_core::pipeline::Notifier;
use vulnscan_core::types::{Request, VulnerabilityId};

use crate::event::NotificationEvent;

/// 바운디드 mpsc 채널로 [`NotificationEvent`]를 보내는 알림기
///
/// 버퍼가 가득 차면 공간이 생길 때까지 대기합니다. 수신측이 닫혀 있으면
/// `NotificationError::ChannelClosed`를 반환합니다.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::Sender<NotificationEvent>,
}

impl ChannelNotifier {
    /// 지정한 버퍼 크기의 채널을 만들고 알림기와 수신측을 반환합니다.
    ///
    /// # Panics
    ///
    /// `capacity`가 0이면 panic합니다. 설정 검증에서 0은 거부됩니다.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<NotificationEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// 기존 송신측으로 알림기를 생성합니다.
    pub fn from_sender(tx: mpsc::Sender<NotificationEvent>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    async fn notify(
        &self,
        request: &Request,
        vulnerabilities: &[VulnerabilityId],
    ) -> Result<(), NotificationError> {
        let event = NotificationEvent::new(request.clone(), vulnerabilities.to_vec());
        let event_id = event.id.clone();

        self.tx
            .send(event)
            .await
            .map_err(|e| NotificationError::ChannelClosed(e.to_string()))?;

        tracing::debug!(event_id = %event_id, library = request.name(), "notification event sent");
        Ok(())
    }
}
