//! 에러 타입 -- 도메인별 에러 정의
//!
//! 스캔 경로의 실패는 [`ScanError`] 하나로 모입니다.
//! 조회 실패([`LookupError`])와 알림 실패([`NotificationError`])는
//! 변환 없이 그대로 감싸져 호출자에게 전파됩니다.

/// Vulnscan 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum VulnscanError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 스캔 실행 에러
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// 잘못된 스캔 요청
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 스캔 실패
///
/// 스캔은 `Response`를 만들거나 전체가 실패하며, 부분 성공은 없습니다.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// 취약점 조회 협력자 실패
    #[error("vulnerability lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// 알림 협력자 실패
    #[error("notification failed: {0}")]
    Notification(#[from] NotificationError),
}

impl ScanError {
    /// 실패한 단계 이름 (`lookup`, `notify`)
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Lookup(_) => "lookup",
            Self::Notification(_) => "notify",
        }
    }
}

/// 취약점 조회 에러
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// 조회 서비스에 접근할 수 없음 (네트워크/서비스 장애)
    #[error("lookup service unavailable: {0}")]
    Unavailable(String),

    /// 취약점 데이터베이스 에러
    #[error("vulnerability database error: {0}")]
    Database(String),
}

/// 알림 전송 에러
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    /// 전송 실패
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// 수신 측 채널이 닫힘
    #[error("notification channel closed: {0}")]
    ChannelClosed(String),
}

/// 스캔 요청 구성 에러
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    /// 언어가 지정되지 않음
    #[error("language is required")]
    MissingLanguage,

    /// 라이브러리 이름이 비어 있음
    #[error("library name must not be empty")]
    EmptyName,
}
