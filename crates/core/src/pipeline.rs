//! 협력자 trait -- 스캐너 확장 포인트 정의
//!
//! 스캐너는 두 개의 외부 협력자에 의존합니다.
//!
//! - [`VulnerabilityLookup`]: (언어, 이름) → 취약점 식별자 목록
//! - [`Notifier`]: 취약점이 발견된 요청에 대한 알림 전송
//!
//! 두 trait 모두 `Send + Sync + 'static`이며, 반환 위치 `impl Future + Send`로
//! 비동기 메서드를 선언합니다. 구현체는 `async fn`으로 작성할 수 있습니다.
//!
//! `Arc<T>`에 대한 구현이 제공되므로 하나의 협력자 인스턴스를 여러 스캐너나
//! 동시 스캔이 공유할 수 있습니다.

use std::future::Future;
use std::sync::Arc;

use crate::error::{LookupError, NotificationError};
use crate::types::{Language, Request, VulnerabilityId};

/// 취약점 조회 협력자
pub trait VulnerabilityLookup: Send + Sync + 'static {
    /// 라이브러리의 알려진 취약점 식별자를 조회합니다.
    ///
    /// 알려진 취약점이 없으면 빈 목록을 반환합니다.
    ///
    /// # Errors
    ///
    /// 조회 서비스 장애나 DB 에러 시 `LookupError`를 반환합니다.
    fn analyze(
        &self,
        language: Language,
        name: &str,
    ) -> impl Future<Output = Result<Vec<VulnerabilityId>, LookupError>> + Send;
}

/// 알림 협력자
pub trait Notifier: Send + Sync + 'static {
    /// 요청과 (비어 있지 않은) 취약점 목록에 대한 알림을 전송합니다.
    ///
    /// # Errors
    ///
    /// 전송 실패 시 `NotificationError`를 반환합니다.
    fn notify(
        &self,
        request: &Request,
        vulnerabilities: &[VulnerabilityId],
    ) -> impl Future<Output = Result<(), NotificationError>> + Send;
}

impl<T: VulnerabilityLookup> VulnerabilityLookup for Arc<T> {
    fn analyze(
        &self,
        language: Language,
        name: &str,
    ) -> impl Future<Output = Result<Vec<VulnerabilityId>, LookupError>> + Send {
        (**self).analyze(language, name)
    }
}

impl<T: Notifier> Notifier for Arc<T> {
    fn notify(
        &self,
        request: &Request,
        vulnerabilities: &[VulnerabilityId],
    ) -> impl Future<Output = Result<(), NotificationError>> + Send {
        (**self).notify(request, vulnerabilities)
    }
}
