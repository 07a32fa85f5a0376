//! 통합 API 에러 응답 타입.
//!
//! 모든 엔드포인트가 실패 시 동일한 JSON 봉투를 반환합니다:
//!
//! ```json
//! {
//!   "success": false,
//!   "error": "Failed to save asset in backend",
//!   "details": "Network error: connection refused",
//!   "code": "RATE_LIMIT_EXCEEDED",
//!   "suggestions": ["..."]
//! }
//! ```
//!
//! `details` / `code` / `suggestions`는 선택 필드로, 없으면 직렬화에서
//! 생략됩니다. HTTP 상태 코드는 봉투가 아니라 응답이 전달합니다.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// rate-limit 응답에 포함되는 사용자 안내 (순서 고정).
pub const RATE_LIMIT_SUGGESTIONS: [&str; 3] = [
    "Wait a few minutes before requesting the ticker list again",
    "Upgrade your HG Brasil plan for a higher request quota",
    "Reduce the refresh frequency of the ticker list in the frontend",
];

/// rate-limit 에러 코드.
pub const RATE_LIMIT_CODE: &str = "RATE_LIMIT_EXCEEDED";

/// 통합 API 에러 봉투.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// 항상 `false`
    pub success: bool,
    /// 사람이 읽을 수 있는 에러 메시지
    pub error: String,
    /// 추가 에러 상세 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// 기계 판독용 에러 코드 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// 사용자 안내 목록 (선택적, 순서 유지)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl ErrorEnvelope {
    /// 기본 에러 생성.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
            code: None,
            suggestions: None,
        }
    }

    /// 상세 정보 포함 에러 생성.
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(error)
        }
    }

    /// rate-limit 에러 생성.
    ///
    /// `code`와 3개의 `suggestions`가 고정 순서로 채워집니다.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            code: Some(RATE_LIMIT_CODE.to_string()),
            suggestions: Some(
                RATE_LIMIT_SUGGESTIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            ..Self::new(message)
        }
    }
}

impl std::fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (axum::http::StatusCode, axum::Json<ErrorEnvelope>)>;
