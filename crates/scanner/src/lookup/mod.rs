//! 취약점 조회 -- 로컬 DB 기반 [`VulnerabilityLookup`] 구현
//!
//! [`DbLookup`]은 [`VulnDb`]를 공유 소유(`Arc`)하므로 여러 스캐너가 같은 DB를
//! 복제 없이 사용할 수 있습니다.

pub mod db;

pub use db::{DEFAULT_MAX_DB_FILE_SIZE, MAX_VULN_DB_ENTRIES, VulnDb, VulnDbEntry};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use vulnscan_core::error::LookupError;
use vulnscan_core::pipeline::VulnerabilityLookup;
use vulnscan_core::types::{Language, Severity, VulnerabilityId};

use crate::config::ScannerConfig;
use crate::error::ScannerError;

/// 로컬 취약점 DB 조회기
///
/// `min_severity` 미만의 엔트리는 결과에서 제외됩니다.
#[derive(Debug, Clone)]
pub struct DbLookup {
    db: Arc<VulnDb>,
    min_severity: Severity,
}

impl DbLookup {
    pub fn new(db: Arc<VulnDb>, min_severity: Severity) -> Self {
        Self { db, min_severity }
    }

    /// 설정된 경로에서 DB를 로드해 조회기를 생성합니다.
    ///
    /// 디렉토리 확인을 포함한 파일 I/O는 `spawn_blocking`에서 수행됩니다.
    /// DB 디렉토리에 접근할 수 없으면 빈 DB로 대체하지 않고 실패합니다.
    ///
    /// # Errors
    ///
    /// - 디렉토리 없음, 디렉토리가 아님, 크기 초과: `ScannerError::VulnDbLoad`
    /// - 파일 읽기 실패: `ScannerError::Io`
    /// - JSON 파싱 실패: `ScannerError::VulnDbParse`
    pub async fn load(config: &ScannerConfig) -> Result<Self, ScannerError> {
        let path = PathBuf::from(&config.vuln_db_path);
        let max_file_size = config.max_db_file_size;

        let display = path.display().to_string();
        let db = tokio::task::spawn_blocking(move || {
            ensure_db_dir(&path)?;
            VulnDb::load_from_dir(&path, max_file_size)
        })
        .await
        .map_err(|e| ScannerError::VulnDbLoad {
            path: display,
            reason: format!("load task failed: {e}"),
        })??;

        tracing::info!(entries = db.entry_count(), "vulnerability database loaded");
        Ok(Self::new(Arc::new(db), config.min_severity))
    }

    pub fn db(&self) -> &Arc<VulnDb> {
        &self.db
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }
}

fn ensure_db_dir(path: &Path) -> Result<(), ScannerError> {
    let reason = match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => return Ok(()),
        Ok(_) => "not a directory".to_owned(),
        Err(e) => e.to_string(),
    };
    tracing::warn!(path = %path.display(), reason = %reason, "vulnerability database unavailable");
    Err(ScannerError::VulnDbLoad {
        path: path.display().to_string(),
        reason,
    })
}

impl VulnerabilityLookup for DbLookup {
    async fn analyze(
        &self,
        language: Language,
        name: &str,
    ) -> Result<Vec<VulnerabilityId>, LookupError> {
        let ids = self
            .db
            .lookup(name, language)
            .into_iter()
            .filter(|entry| entry.severity >= self.min_severity)
            .map(|entry| entry.id.clone())
            .collect::<Vec<_>>();

        tracing::debug!(
            library = name,
            language = %language,
            matches = ids.len(),
            "vulnerability db lookup"
        );
        Ok(ids)
    }
}
