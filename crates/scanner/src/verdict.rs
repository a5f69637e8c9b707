//! 판정 엔진 -- 취약점 목록을 Safe/Risky 응답으로 변환
//!
//! 사유 문자열은 판정 범주마다 고정되어 있으며, 개별 취약점 내용을
//! 포함하지 않습니다. 식별자는 알림 쪽에서만 전달됩니다.

use vulnscan_core::types::{Response, Verdict, VulnerabilityId};

/// Risky 판정 사유
pub const RISKY_REASON: &str = "Known vulnerability";

/// Safe 판정 사유
pub const SAFE_REASON: &str = "No known vulnerabilities";

/// 판정 엔진
///
/// 상태가 없는 순수 함수입니다. 목록이 비어 있지 않으면 Risky, 비어 있거나
/// 없으면 Safe입니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerdictEngine;

impl VerdictEngine {
    pub fn new() -> Self {
        Self
    }

    /// 취약점 목록에 대한 응답을 생성합니다.
    pub fn evaluate(&self, vulnerabilities: &[VulnerabilityId]) -> Response {
        if vulnerabilities.is_empty() {
            Response::new(Verdict::Safe, SAFE_REASON)
        } else {
            Response::new(Verdict::Risky, RISKY_REASON)
        }
    }

    /// 목록 자체가 없을 수 있는 경우의 [`evaluate`](Self::evaluate)입니다.
    ///
    /// `None`은 빈 목록과 같이 Safe로 판정됩니다.
    pub fn evaluate_optional(&self, vulnerabilities: Option<&[VulnerabilityId]>) -> Response {
        self.evaluate(vulnerabilities.unwrap_or_default())
    }
}
