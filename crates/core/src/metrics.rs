//! 메트릭 상수 및 설명 등록
//!
//! 모든 메트릭의 이름과 설명을 중앙에서 정의합니다.
//! 스캐너는 이 상수를 사용하여 `metrics::counter!()` 매크로를 호출합니다.
//! 레코더가 설치되지 않은 환경(CLI, 테스트)에서는 호출이 무시됩니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `vulnscan_`
//! - 접미어: `_total` (counter)

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// 판정 레이블 키 (safe, risky)
pub const LABEL_VERDICT: &str = "verdict";

/// 언어 레이블 키 (java, javascript, python, go, rust)
pub const LABEL_LANGUAGE: &str = "language";

/// 실패 단계 레이블 키 (lookup, notify)
pub const LABEL_STAGE: &str = "stage";

// ─── Scanner 메트릭 ────────────────────────────────────────────────

/// 완료된 스캔 수 (counter, label: verdict, language)
pub const SCANS_COMPLETED_TOTAL: &str = "vulnscan_scans_completed_total";

/// 실패한 스캔 수 (counter, label: stage)
pub const SCAN_FAILURES_TOTAL: &str = "vulnscan_scan_failures_total";

/// 전송된 알림 수 (counter)
pub const NOTIFICATIONS_SENT_TOTAL: &str = "vulnscan_notifications_sent_total";

/// 조회된 취약점 식별자 수 (counter)
pub const VULNERABILITIES_FOUND_TOTAL: &str = "vulnscan_vulnerabilities_found_total";

/// 모든 메트릭의 설명을 등록합니다.
///
/// 레코더 설치 직후 한 번 호출합니다. 레코더가 없으면 아무 일도 하지 않습니다.
pub fn describe_all() {
    metrics::describe_counter!(SCANS_COMPLETED_TOTAL, "Total number of completed scans");
    metrics::describe_counter!(SCAN_FAILURES_TOTAL, "Total number of failed scans");
    metrics::describe_counter!(NOTIFICATIONS_SENT_TOTAL, "Total number of notifications sent");
    metrics::describe_counter!(
        VULNERABILITIES_FOUND_TOTAL,
        "Total number of vulnerability identifiers returned by lookups"
    );
}
