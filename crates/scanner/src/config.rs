//! 스캐너 설정
//!
//! [`ScannerConfig`]는 core의 [`VulnscanConfig`]에서 파생되며 문자열 필드를
//! 타입이 있는 값([`Severity`], [`NotifierKind`])으로 바꾸고, 스캐너 고유 제한
//! (`max_db_file_size`)을 추가합니다.
//!
//! # 사용 예시
//!
//! ```
//! use vulnscan_scanner::{NotifierKind, ScannerConfig};
//!
//! let config = ScannerConfig::builder()
//!     .vuln_db_path("/opt/vulnscan/db")
//!     .notifier(NotifierKind::Channel)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.channel_capacity, 64);
//! ```

use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use vulnscan_core::config::{MAX_CHANNEL_CAPACITY, VulnscanConfig};
use vulnscan_core::types::Severity;

use crate::error::ScannerError;
use crate::lookup::DEFAULT_MAX_DB_FILE_SIZE;

/// DB 파일 크기 상한 (100 MB)
const MAX_DB_FILE_SIZE_LIMIT: u64 = 100 * 1024 * 1024;

const MAX_PATH_LEN: usize = 4096;

/// 알림 협력자 종류
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    /// `tracing` 경고 이벤트로 알림
    #[default]
    Log,
    /// 바운디드 mpsc 채널로 알림 이벤트 전송
    Channel,
}

impl NotifierKind {
    /// 문자열에서 알림 종류를 파싱합니다 (대소문자 구분 없음).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "log" => Some(Self::Log),
            "channel" => Some(Self::Channel),
            _ => None,
        }
    }
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Log => write!(f, "log"),
            Self::Channel => write!(f, "channel"),
        }
    }
}

/// 스캐너 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// 로컬 취약점 DB 디렉토리
    pub vuln_db_path: String,
    /// 조회 결과에 포함할 최소 심각도
    pub min_severity: Severity,
    /// 알림 협력자 종류
    pub notifier: NotifierKind,
    /// 채널 알림 버퍼 크기
    pub channel_capacity: usize,

    // --- 스캐너 고유 확장 ---
    /// DB 파일 하나의 최대 크기 (바이트)
    pub max_db_file_size: u64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            vuln_db_path: "/var/lib/vulnscan/vuln-db".to_owned(),
            min_severity: Severity::Info,
            notifier: NotifierKind::Log,
            channel_capacity: 64,
            max_db_file_size: DEFAULT_MAX_DB_FILE_SIZE,
        }
    }
}

impl ScannerConfig {
    pub fn builder() -> ScannerConfigBuilder {
        ScannerConfigBuilder::new()
    }

    /// core 설정에서 스캐너 설정을 생성합니다.
    ///
    /// core 설정은 이미 검증되었다고 가정하며, 해석할 수 없는 값은 기본값으로
    /// 대체합니다. 확장 필드는 기본값을 사용합니다.
    pub fn from_core(core: &VulnscanConfig) -> Self {
        Self {
            vuln_db_path: core.lookup.vuln_db_path.clone(),
            min_severity: Severity::from_str_loose(&core.lookup.min_severity).unwrap_or_default(),
            notifier: NotifierKind::from_str_loose(&core.notifier.kind).unwrap_or_default(),
            channel_capacity: core.notifier.channel_capacity,
            ..Self::default()
        }
    }

    /// 설정 값의 유효성을 검증합니다.
    ///
    /// # 검증 규칙
    ///
    /// - `vuln_db_path`: 비어 있지 않고, `..` 컴포넌트가 없으며, 4096자 이하
    /// - `channel_capacity`: 1-65536
    /// - `max_db_file_size`: 1-104857600 (100MB)
    pub fn validate(&self) -> Result<(), ScannerError> {
        if self.vuln_db_path.is_empty() {
            return Err(ScannerError::Config {
                field: "vuln_db_path".to_owned(),
                reason: "must not be empty".to_owned(),
            });
        }

        if Path::new(&self.vuln_db_path)
            .components()
            .any(|c| c == Component::ParentDir)
        {
            return Err(ScannerError::Config {
                field: "vuln_db_path".to_owned(),
                reason: "vuln_db_path contains path traversal pattern '..'".to_owned(),
            });
        }

        if self.vuln_db_path.len() > MAX_PATH_LEN {
            return Err(ScannerError::Config {
                field: "vuln_db_path".to_owned(),
                reason: format!("vuln_db_path exceeds maximum length {MAX_PATH_LEN}"),
            });
        }

        if self.channel_capacity == 0 || self.channel_capacity > MAX_CHANNEL_CAPACITY {
            return Err(ScannerError::Config {
                field: "channel_capacity".to_owned(),
                reason: format!("must be 1-{MAX_CHANNEL_CAPACITY}"),
            });
        }

        if self.max_db_file_size == 0 || self.max_db_file_size > MAX_DB_FILE_SIZE_LIMIT {
            return Err(ScannerError::Config {
                field: "max_db_file_size".to_owned(),
                reason: format!("must be 1-{MAX_DB_FILE_SIZE_LIMIT}"),
            });
        }

        Ok(())
    }
}

/// [`ScannerConfig`] 빌더
///
/// `build()` 시점에 유효성을 검증합니다.
#[derive(Debug, Default)]
pub struct ScannerConfigBuilder {
    config: ScannerConfig,
}

impl ScannerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vuln_db_path(mut self, path: impl Into<String>) -> Self {
        self.config.vuln_db_path = path.into();
        self
    }

    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.config.min_severity = severity;
        self
    }

    pub fn notifier(mut self, kind: NotifierKind) -> Self {
        self.config.notifier = kind;
        self
    }

    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.config.channel_capacity = capacity;
        self
    }

    pub fn max_db_file_size(mut self, size: u64) -> Self {
        self.config.max_db_file_size = size;
        self
    }

    /// 설정을 검증하고 빌드합니다.
    ///
    /// # Errors
    ///
    /// 유효성 검증 실패 시 `ScannerError::Config` 반환
    pub fn build(self) -> Result<ScannerConfig, ScannerError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
