//! 백엔드 asset-sync 프록시 클라이언트.
//!
//! 로컬 백엔드 서비스의 asset-sync 오퍼레이션 4종을 래핑합니다:
//! save-asset, simulate, symbols, sync.
//!
//! 요청당 정확히 한 번의 업스트림 호출만 수행하며 재시도하지 않습니다.
//!
//! # 에러 계약
//!
//! save-asset만 업스트림 에러 본문을 파싱해 메시지를 추출합니다.
//! simulate / symbols / sync는 non-2xx 응답에서 본문을 읽지 않고
//! [`BackendError::Status`]를 반환합니다. 이 비대칭은 프론트엔드가
//! 의존하는 기존 계약이므로 통일하지 않습니다.

use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::BackendError;

/// 기본 백엔드 주소.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

// ============================================================================
// 설정
// ============================================================================

/// 백엔드 클라이언트 설정.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// 백엔드 기본 URL (경로 접미사 제외)
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl BackendConfig {
    /// 환경 변수에서 설정 로드.
    ///
    /// `BACKEND_API_URL`이 없으면 기본 로컬 주소를 사용합니다.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BACKEND_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            ..Self::default()
        }
    }
}

// ============================================================================
// 클라이언트
// ============================================================================

/// 백엔드 asset-sync 클라이언트.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// 새 클라이언트 생성.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Network(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// 백엔드 기본 URL 반환.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 자산 저장 요청 프록시.
    ///
    /// 호출자의 JSON 본문을 수정 없이 그대로 전달합니다.
    ///
    /// non-2xx 응답은 본문을 한 번 파싱합니다. `error` 필드가 있으면
    /// 그 값을 메시지로 사용하고, `details` 필드가 있으면
    /// `"{error} - {details}"` 형태로 합칩니다. 파싱 실패 시
    /// `"Backend API returned {status}"`로 폴백합니다.
    pub async fn save_asset(&self, body: Value) -> Result<Value, BackendError> {
        let url = format!("{}/api/v1/asset-sync/save-asset", self.base_url);

        debug!(url = %url, "백엔드 자산 저장 요청");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<Value>().await {
                Ok(error_body) => extract_error_message(&error_body)
                    .unwrap_or_else(|| format!("Backend API returned {}", status.as_u16())),
                Err(_) => format!("Backend API returned {}", status.as_u16()),
            };

            warn!(status = status.as_u16(), message = %message, "백엔드 자산 저장 실패");
            return Err(BackendError::Upstream(message));
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }

    /// 시뮬레이션 실행 프록시.
    pub async fn simulate(&self) -> Result<Value, BackendError> {
        self.request_opaque(Method::POST, "/api/v1/asset-sync/simulate")
            .await
    }

    /// 심볼 목록 조회 프록시.
    pub async fn symbols(&self) -> Result<Value, BackendError> {
        self.request_opaque(Method::GET, "/api/v1/asset-sync/symbols")
            .await
    }

    /// 자산 동기화 실행 프록시.
    pub async fn sync(&self) -> Result<Value, BackendError> {
        self.request_opaque(Method::POST, "/api/v1/asset-sync/sync")
            .await
    }

    /// 본문 없는 오퍼레이션 공통 요청.
    ///
    /// non-2xx 응답의 본문은 읽지 않는다 (기존 계약).
    async fn request_opaque(&self, method: Method, path: &str) -> Result<Value, BackendError> {
        let url = format!("{}{}", self.base_url, path);

        debug!(method = %method, url = %url, "백엔드 요청");

        let response = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %url, "백엔드 요청 실패");
            return Err(BackendError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}

/// 업스트림 에러 본문에서 메시지 추출.
///
/// `error` 필드가 없으면 `None` (호출자가 상태 코드 폴백을 적용).
fn extract_error_message(body: &Value) -> Option<String> {
    let error = body.get("error").and_then(Value::as_str)?;

    match body.get("details").and_then(Value::as_str) {
        Some(details) => Some(format!("{} - {}", error, details)),
        None => Some(error.to_string()),
    }
}

// ============================================================================
// 테스트
// ============================================================================
