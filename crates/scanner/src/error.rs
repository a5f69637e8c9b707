//! 스캐너 에러 타입
//!
//! [`ScannerError`]는 스캐너 구성 단계(설정 검증, 취약점 DB 로딩)에서 발생하는
//! 에러입니다. 스캔 실행 중의 실패는 core의 `ScanError`로 전파되며 여기서
//! 다루지 않습니다.
//!
//! `From<ScannerError> for VulnscanError` 구현을 통해 `?` 연산자로
//! 상위 에러 타입으로 전파됩니다.

use vulnscan_core::error::{ConfigError, LookupError, VulnscanError};

/// 스캐너 구성 에러
#[derive(Debug, thiserror::Error)]
pub enum ScannerError {
    /// 취약점 DB 로딩 실패
    #[error("vulnerability db load error: {path}: {reason}")]
    VulnDbLoad {
        /// DB 파일 경로
        path: String,
        /// 로딩 실패 사유
        reason: String,
    },

    /// 취약점 DB 파싱 실패
    #[error("vulnerability db parse error: {0}")]
    VulnDbParse(String),

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },

    /// 파일 I/O 에러
    #[error("io error: {path}: {source}")]
    Io {
        /// 관련 파일 경로
        path: String,
        /// 원본 I/O 에러
        source: std::io::Error,
    },
}

impl From<ScannerError> for VulnscanError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::Config { field, reason } => {
                VulnscanError::Config(ConfigError::InvalidValue { field, reason })
            }
            ScannerError::Io { source, .. } => VulnscanError::Io(source),
            other @ (ScannerError::VulnDbLoad { .. } | ScannerError::VulnDbParse(_)) => {
                VulnscanError::Scan(LookupError::Database(other.to_string()).into())
            }
        }
    }
}
