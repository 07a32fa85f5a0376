//! 업스트림 클라이언트 에러 타입.

use thiserror::Error;

/// 백엔드 asset-sync 프록시 에러.
#[derive(Debug, Error)]
pub enum BackendError {
    /// 업스트림 에러 본문에서 추출한 메시지 (이미 포맷 완료)
    #[error("{0}")]
    Upstream(String),

    /// 업스트림 non-2xx 응답 (본문 미확인)
    #[error("Backend API returned {0}")]
    Status(u16),

    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    Network(String),

    /// 응답 본문 파싱 에러
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Parse(err.to_string())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

/// HG Brasil finance API 에러.
#[derive(Debug, Error)]
pub enum HgBrasilError {
    /// 요청 한도 초과 (HTTP 403 또는 본문 내 error 플래그)
    #[error("Rate limit exceeded: {message}")]
    RateLimited { message: String },

    /// 업스트림 HTTP 에러 (상태 코드는 호출자에게 그대로 전달)
    #[error("HG Brasil API error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// 업스트림 non-2xx + 파싱 불가 본문
    #[error("HG Brasil service unavailable")]
    Unavailable,

    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    Network(String),
}
