//! 도메인 타입 -- 스캔 요청, 판정 결과, 취약점 식별자
//!
//! 모든 크레이트가 공유하는 데이터 구조를 정의합니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// 라이브러리 언어 (닫힌 집합)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Java (Maven/Gradle)
    Java,
    /// JavaScript/TypeScript (npm)
    JavaScript,
    /// Python (PyPI)
    Python,
    /// Go (modules)
    Go,
    /// Rust (crates.io)
    Rust,
}

impl Language {
    /// 지원하는 모든 언어
    pub const ALL: [Language; 5] = [
        Self::Java,
        Self::JavaScript,
        Self::Python,
        Self::Go,
        Self::Rust,
    ];

    /// 문자열에서 언어를 파싱합니다 (대소문자 구분 없음).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "java" | "jvm" | "maven" => Some(Self::Java),
            "javascript" | "js" | "node" | "npm" | "typescript" | "ts" => Some(Self::JavaScript),
            "python" | "py" | "pip" | "pypi" => Some(Self::Python),
            "go" | "golang" => Some(Self::Go),
            "rust" | "cargo" | "crate" | "crates" => Some(Self::Rust),
            _ => None,
        }
    }

    /// 취약점 DB 파일 이름 접두사 (예: `java` -> `java.json`)
    pub fn db_file_stem(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Go => "go",
            Self::Rust => "rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.db_file_stem())
    }
}

/// 취약점 식별자 (예: CVE 번호)
///
/// 내부 구조를 가정하지 않는 불투명 문자열입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VulnerabilityId(String);

impl VulnerabilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VulnerabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VulnerabilityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for VulnerabilityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// 스캔 요청
///
/// 스캔 호출마다 한 번 만들어지고 사용 후 버려지는 불변 값입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Request {
    language: Language,
    name: String,
}

impl Request {
    /// 언어와 라이브러리 이름으로 요청을 생성합니다.
    pub fn new(language: Language, name: impl Into<String>) -> Self {
        Self {
            language,
            name: name.into(),
        }
    }

    /// 빌더를 반환합니다.
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.language)
    }
}

/// [`Request`] 빌더
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    language: Option<Language>,
    name: Option<String>,
}

impl RequestBuilder {
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// 요청을 빌드합니다.
    ///
    /// # Errors
    ///
    /// - 언어 미지정: `RequestError::MissingLanguage`
    /// - 이름 누락 또는 공백: `RequestError::EmptyName`
    pub fn build(self) -> Result<Request, RequestError> {
        let language = self.language.ok_or(RequestError::MissingLanguage)?;
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(RequestError::EmptyName)?;
        Ok(Request { language, name })
    }
}

/// 스캔 판정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// 알려진 취약점 없음
    Safe,
    /// 알려진 취약점 있음
    Risky,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "Safe"),
            Self::Risky => write!(f, "Risky"),
        }
    }
}

/// 스캔 응답 (판정 + 사유)
///
/// 취약점 목록에서 결정적으로 유도되며, 생성 후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    verdict: Verdict,
    reason: String,
}

impl Response {
    pub fn new(verdict: Verdict, reason: impl Into<String>) -> Self {
        Self {
            verdict,
            reason: reason.into(),
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn is_risky(&self) -> bool {
        self.verdict == Verdict::Risky
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.verdict, self.reason)
    }
}

/// 심각도 레벨
///
/// `Ord` 구현으로 심각도 비교가 가능합니다 (`Info < Low < Medium < High < Critical`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    /// 정보성
    #[default]
    Info,
    /// 낮은 심각도
    Low,
    /// 중간 심각도
    Medium,
    /// 높은 심각도
    High,
    /// 치명적
    Critical,
}

impl Severity {
    /// 문자열에서 심각도를 파싱합니다 (대소문자 구분 없음).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "info" | "informational" => Some(Self::Info),
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" | "crit" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "Info"),
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}
