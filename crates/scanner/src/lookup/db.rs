//! 취약점 데이터베이스 -- 로컬 JSON DB 로딩 및 조회
//!
//! [`VulnDb`]는 로컬 파일시스템의 JSON 파일에서 취약점 데이터를 로드합니다.
//!
//! # DB 디렉토리 구조
//!
//! ```text
//! /var/lib/vulnscan/vuln-db/
//!   java.json         # Java 라이브러리 취약점
//!   javascript.json   # JavaScript 라이브러리 취약점
//!   python.json
//!   go.json
//!   rust.json
//! ```
//!
//! # JSON 형식
//!
//! ```json
//! [
//!   {
//!     "id": "CVE-2023-12345",
//!     "package": "libX",
//!     "language": "Java",
//!     "severity": "High",
//!     "description": "Deserialization of untrusted data in...",
//!     "published": "2023-06-01"
//!   }
//! ]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use vulnscan_core::types::{Language, Severity, VulnerabilityId};

use crate::error::ScannerError;

/// 취약점 DB 파일 기본 최대 크기 (50 MB)
pub const DEFAULT_MAX_DB_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// 전체 취약점 DB 엔트리 최대 개수 (1,000,000개)
pub const MAX_VULN_DB_ENTRIES: usize = 1_000_000;

/// 취약점 DB 엔트리
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnDbEntry {
    /// 취약점 식별자 (예: CVE-2023-12345)
    pub id: VulnerabilityId,
    /// 라이브러리 언어
    pub language: Language,
    /// 영향받는 라이브러리 이름
    pub package: String,
    /// 심각도
    #[serde(default)]
    pub severity: Severity,
    /// 취약점 설명
    #[serde(default)]
    pub description: String,
    /// 공개 일자 (ISO 8601)
    #[serde(default)]
    pub published: String,
}

/// 취약점 데이터베이스
///
/// 로컬 JSON 파일에서 로드된 엔트리를 보유하며 `(package, language)` 쌍으로
/// 인덱싱됩니다. 패키지 이름은 대소문자를 구분해 정확히 일치해야 합니다.
#[derive(Debug, Default)]
pub struct VulnDb {
    entries: Vec<VulnDbEntry>,
    index: HashMap<(String, Language), Vec<usize>>,
}

impl VulnDb {
    /// 빈 데이터베이스를 생성합니다.
    pub fn empty() -> Self {
        Self::default()
    }

    fn build_index(entries: &[VulnDbEntry]) -> HashMap<(String, Language), Vec<usize>> {
        let mut index: HashMap<(String, Language), Vec<usize>> = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            index
                .entry((entry.package.clone(), entry.language))
                .or_default()
                .push(idx);
        }
        index
    }

    /// 엔트리 목록으로 데이터베이스를 생성합니다.
    pub fn from_entries(entries: Vec<VulnDbEntry>) -> Self {
        let index = Self::build_index(&entries);
        Self { entries, index }
    }

    /// JSON 문자열(`VulnDbEntry` 배열)에서 데이터베이스를 파싱합니다.
    pub fn from_json(json: &str) -> Result<Self, ScannerError> {
        let entries: Vec<VulnDbEntry> = serde_json::from_str(json).map_err(|e| {
            ScannerError::VulnDbParse(format!("failed to parse vuln db JSON: {e}"))
        })?;
        Ok(Self::from_entries(entries))
    }

    /// 디렉토리에서 모든 언어의 취약점 DB를 로드합니다.
    ///
    /// 각 파일은 `{language}.json` 형식이며, 존재하지 않는 파일은 건너뜁니다.
    /// 전체 엔트리는 [`MAX_VULN_DB_ENTRIES`]개로 제한됩니다.
    ///
    /// # Note
    ///
    /// 동기 I/O를 수행합니다. async 컨텍스트에서는 `tokio::task::spawn_blocking`으로
    /// 감싸서 호출하세요.
    pub fn load_from_dir(dir_path: &Path, max_file_size: u64) -> Result<Self, ScannerError> {
        Self::load_from_dir_with_limits(dir_path, max_file_size, MAX_VULN_DB_ENTRIES)
    }

    /// 크기 및 엔트리 제한을 지정해 디렉토리에서 DB를 로드합니다.
    ///
    /// 파일은 [`Language::ALL`] 순서로 읽습니다.
    ///
    /// # 제한
    ///
    /// - 파일당 최대 `max_file_size` 바이트 (초과 시 에러)
    /// - 전체 엔트리 최대 `max_entries`개 (초과분은 경고 후 버리고, 이후 파일은 읽지 않음)
    ///
    /// # Errors
    ///
    /// - 크기 초과: `ScannerError::VulnDbLoad`
    /// - 메타데이터/파일 읽기 실패: `ScannerError::Io`
    /// - JSON 파싱 실패: `ScannerError::VulnDbParse`
    pub fn load_from_dir_with_limits(
        dir_path: &Path,
        max_file_size: u64,
        max_entries: usize,
    ) -> Result<Self, ScannerError> {
        let mut all_entries = Vec::new();

        for language in Language::ALL {
            let file_path = dir_path.join(format!("{}.json", language.db_file_stem()));

            let metadata = match std::fs::metadata(&file_path) {
                Ok(m) => m,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(
                        path = %file_path.display(),
                        "vuln db file not found, skipping"
                    );
                    continue;
                }
                Err(source) => {
                    return Err(ScannerError::Io {
                        path: file_path.display().to_string(),
                        source,
                    });
                }
            };

            if metadata.len() > max_file_size {
                return Err(ScannerError::VulnDbLoad {
                    path: file_path.display().to_string(),
                    reason: format!(
                        "file size {} bytes exceeds maximum {} bytes",
                        metadata.len(),
                        max_file_size
                    ),
                });
            }

            let content =
                std::fs::read_to_string(&file_path).map_err(|source| ScannerError::Io {
                    path: file_path.display().to_string(),
                    source,
                })?;

            let entries: Vec<VulnDbEntry> = serde_json::from_str(&content).map_err(|e| {
                ScannerError::VulnDbParse(format!("failed to parse {}: {e}", file_path.display()))
            })?;

            if all_entries.len() + entries.len() > max_entries {
                tracing::warn!(
                    path = %file_path.display(),
                    current = all_entries.len(),
                    new = entries.len(),
                    max = max_entries,
                    "vulnerability database entry limit reached, truncating"
                );
                let remaining = max_entries.saturating_sub(all_entries.len());
                all_entries.extend(entries.into_iter().take(remaining));
                break;
            }

            tracing::info!(
                path = %file_path.display(),
                entries = entries.len(),
                "loaded vuln db file"
            );
            all_entries.extend(entries);
        }

        Ok(Self::from_entries(all_entries))
    }

    /// 라이브러리에 해당하는 엔트리를 DB 순서대로 반환합니다.
    pub fn lookup(&self, package: &str, language: Language) -> Vec<&VulnDbEntry> {
        self.index
            .get(&(package.to_owned(), language))
            .map(|indices| indices.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[VulnDbEntry] {
        &self.entries
    }
}
