//! 설정 관리 -- vulnscan.toml 파싱 및 런타임 설정
//!
//! [`VulnscanConfig`]는 모든 섹션의 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`VULNSCAN_LOOKUP_VULN_DB_PATH=/data/db` 형식)
//! 3. 설정 파일 (`vulnscan.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), vulnscan_core::error::VulnscanError> {
//! use vulnscan_core::config::VulnscanConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = VulnscanConfig::load("vulnscan.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = VulnscanConfig::parse("[general]\nlog_level = \"debug\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, VulnscanError};

/// 알림 채널 용량 상한
pub const MAX_CHANNEL_CAPACITY: usize = 65_536;

/// 경로 길이 상한
const MAX_PATH_LEN: usize = 4096;

/// Vulnscan 통합 설정
///
/// `vulnscan.toml` 파일의 최상위 구조를 나타냅니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VulnscanConfig {
    /// 일반 설정 (로깅)
    #[serde(default)]
    pub general: GeneralConfig,
    /// 취약점 조회 설정
    #[serde(default)]
    pub lookup: LookupConfig,
    /// 알림 설정
    #[serde(default)]
    pub notifier: NotifierConfig,
}

impl VulnscanConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용한 뒤 검증합니다.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, VulnscanError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 파일이 없으면 기본값에서 시작하는 [`load`](Self::load) 변형입니다.
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self, VulnscanError> {
        let path = path.as_ref();
        let mut config = match Self::from_file(path).await {
            Ok(config) => config,
            Err(VulnscanError::Config(ConfigError::FileNotFound { .. })) => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
            Err(e) => return Err(e),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, VulnscanError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VulnscanError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                VulnscanError::Io(e)
            }
        })?;
        Self::parse(&content)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, VulnscanError> {
        toml::from_str(toml_str).map_err(|e| {
            VulnscanError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `VULNSCAN_{SECTION}_{FIELD}`
    pub fn apply_env_overrides(&mut self) {
        override_string(&mut self.general.log_level, "VULNSCAN_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "VULNSCAN_GENERAL_LOG_FORMAT");

        override_string(&mut self.lookup.vuln_db_path, "VULNSCAN_LOOKUP_VULN_DB_PATH");
        override_string(&mut self.lookup.min_severity, "VULNSCAN_LOOKUP_MIN_SEVERITY");

        override_string(&mut self.notifier.kind, "VULNSCAN_NOTIFIER_KIND");
        override_usize(
            &mut self.notifier.channel_capacity,
            "VULNSCAN_NOTIFIER_CHANNEL_CAPACITY",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), VulnscanError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(invalid(
                "general.log_level",
                format!("must be one of: {}", valid_levels.join(", ")),
            ));
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(invalid(
                "general.log_format",
                format!("must be one of: {}", valid_formats.join(", ")),
            ));
        }

        if self.lookup.vuln_db_path.is_empty() {
            return Err(invalid("lookup.vuln_db_path", "must not be empty".to_owned()));
        }

        if Path::new(&self.lookup.vuln_db_path)
            .components()
            .any(|c| c == std::path::Component::ParentDir)
        {
            return Err(invalid(
                "lookup.vuln_db_path",
                "contains path traversal pattern '..'".to_owned(),
            ));
        }

        if self.lookup.vuln_db_path.len() > MAX_PATH_LEN {
            return Err(invalid(
                "lookup.vuln_db_path",
                format!("exceeds maximum length {MAX_PATH_LEN}"),
            ));
        }

        let valid_severities = ["info", "low", "medium", "high", "critical"];
        if !valid_severities.contains(&self.lookup.min_severity.as_str()) {
            return Err(invalid(
                "lookup.min_severity",
                format!("must be one of: {}", valid_severities.join(", ")),
            ));
        }

        let valid_kinds = ["log", "channel"];
        if !valid_kinds.contains(&self.notifier.kind.as_str()) {
            return Err(invalid(
                "notifier.kind",
                format!("must be one of: {}", valid_kinds.join(", ")),
            ));
        }

        if self.notifier.channel_capacity == 0
            || self.notifier.channel_capacity > MAX_CHANNEL_CAPACITY
        {
            return Err(invalid(
                "notifier.channel_capacity",
                format!("must be 1-{MAX_CHANNEL_CAPACITY}"),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> VulnscanError {
    ConfigError::InvalidValue {
        field: field.to_owned(),
        reason,
    }
    .into()
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 취약점 조회 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// 로컬 취약점 DB 디렉토리
    pub vuln_db_path: String,
    /// 조회 결과에 포함할 최소 심각도
    pub min_severity: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            vuln_db_path: "/var/lib/vulnscan/vuln-db".to_owned(),
            min_severity: "info".to_owned(),
        }
    }
}

/// 알림 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// 알림 방식 (log, channel)
    pub kind: String,
    /// channel 방식의 버퍼 용량
    pub channel_capacity: usize,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            kind: "log".to_owned(),
            channel_capacity: 64,
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_usize(target: &mut usize, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<usize>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse usize from env var, ignoring"
            ),
        }
    }
}
