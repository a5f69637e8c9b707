//! 스캐너 오케스트레이터 -- 조회, 조건부 알림, 판정
//!
//! # 흐름
//!
//! ```text
//! Request --> VulnerabilityLookup::analyze
//!                     |
//!          +----------+----------+
//!          | 비어 있음            | 비어 있지 않음
//!          |                     v
//!          |              Notifier::notify (완료까지 대기)
//!          |                     |
//!          +----------+----------+
//!                     v
//!              VerdictEngine --> Response
//! ```
//!
//! 스캐너는 호출 간에 변경 가능한 상태를 갖지 않습니다. 같은 협력자 동작이면
//! 같은 응답이 나옵니다. 협력자 실패는 재시도나 변환 없이 `ScanError`로
//! 호출자에게 전파되며, 그 경우 응답은 만들어지지 않습니다.

use tracing::{Instrument, debug, info, info_span, warn};

use vulnscan_core::error::ScanError;
use vulnscan_core::metrics as m;
use vulnscan_core::pipeline::{Notifier, VulnerabilityLookup};
use vulnscan_core::types::{Request, Response, Verdict};

use crate::verdict::VerdictEngine;

/// 라이브러리 취약점 스캐너
///
/// `L`과 `N`은 각각 조회/알림 협력자입니다. 협력자를 여러 스캐너가 공유해야
/// 하면 `Arc<T>`를 넘기면 됩니다.
pub struct Scanner<L: VulnerabilityLookup, N: Notifier> {
    lookup: L,
    notifier: N,
    engine: VerdictEngine,
}

impl<L: VulnerabilityLookup, N: Notifier> Scanner<L, N> {
    /// 기본 판정 엔진으로 스캐너를 생성합니다.
    pub fn new(lookup: L, notifier: N) -> Self {
        Self::with_engine(lookup, notifier, VerdictEngine::new())
    }

    pub fn with_engine(lookup: L, notifier: N, engine: VerdictEngine) -> Self {
        Self {
            lookup,
            notifier,
            engine,
        }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// 요청 하나를 스캔합니다.
    ///
    /// 알림이 필요한 경우 알림이 완료된 뒤에야 응답이 만들어집니다.
    ///
    /// # Errors
    ///
    /// - `ScanError::Lookup`: 조회 실패 (알림은 호출되지 않음)
    /// - `ScanError::Notification`: 알림 실패
    pub async fn scan(&self, request: &Request) -> Result<Response, ScanError> {
        let span = info_span!(
            "scan",
            language = %request.language(),
            library = %request.name(),
        );

        let result = self.run(request).instrument(span).await;

        match &result {
            Ok(response) => {
                let verdict = match response.verdict() {
                    Verdict::Safe => "safe",
                    Verdict::Risky => "risky",
                };
                metrics::counter!(
                    m::SCANS_COMPLETED_TOTAL,
                    m::LABEL_VERDICT => verdict,
                    m::LABEL_LANGUAGE => request.language().db_file_stem()
                )
                .increment(1);
            }
            Err(e) => {
                warn!(
                    library = %request.name(),
                    stage = e.stage(),
                    error = %e,
                    "scan failed"
                );
                metrics::counter!(m::SCAN_FAILURES_TOTAL, m::LABEL_STAGE => e.stage())
                    .increment(1);
            }
        }

        result
    }

    async fn run(&self, request: &Request) -> Result<Response, ScanError> {
        let vulnerabilities = self
            .lookup
            .analyze(request.language(), request.name())
            .await?;

        debug!(count = vulnerabilities.len(), "lookup completed");
        let found = u64::try_from(vulnerabilities.len()).unwrap_or(u64::MAX);
        metrics::counter!(m::VULNERABILITIES_FOUND_TOTAL).increment(found);

        if !vulnerabilities.is_empty() {
            self.notifier.notify(request, &vulnerabilities).await?;
            metrics::counter!(m::NOTIFICATIONS_SENT_TOTAL).increment(1);
            debug!("notification sent");
        }

        let response = self.engine.evaluate(&vulnerabilities);
        info!(verdict = %response.verdict(), "scan completed");
        Ok(response)
    }
}
