//! HG Brasil finance API 클라이언트.
//!
//! 서버 보유 API 키로 ticker-list 엔드포인트를 호출합니다.
//!
//! HG Brasil은 에러를 두 채널로 신호합니다:
//! - out-of-band: HTTP 403 (키 한도 초과)
//! - in-band: HTTP 200 본문에 `error: true` 플래그
//!
//! 두 경우 모두 [`HgBrasilError::RateLimited`]로 정규화됩니다.
//! 키 한도 상태는 요청 간에 캐싱하지 않습니다.

use reqwest::Client;
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

use crate::error::HgBrasilError;

/// 기본 API 주소.
const DEFAULT_BASE_URL: &str = "https://api.hgbrasil.com/finance";

/// 본문에 message 필드가 없는 rate-limit 응답의 기본 메시지.
const DEFAULT_RATE_LIMIT_MESSAGE: &str = "HG Brasil API rate limit exceeded";

// ============================================================================
// 설정
// ============================================================================

/// HG Brasil 클라이언트 설정.
///
/// # 보안
/// - `Debug` 구현은 `api_key`를 마스킹합니다.
#[derive(Clone)]
pub struct HgBrasilConfig {
    /// API 키
    pub api_key: String,
    /// API 기본 URL
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl fmt::Debug for HgBrasilConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked_key = if self.api_key.len() > 8 {
            format!(
                "{}...{}",
                &self.api_key[..4],
                &self.api_key[self.api_key.len() - 4..]
            )
        } else {
            "***REDACTED***".to_string()
        };

        f.debug_struct("HgBrasilConfig")
            .field("api_key", &masked_key)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl HgBrasilConfig {
    /// 새 설정 생성.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// 환경 변수에서 설정 로드.
    ///
    /// `HG_BRASIL_API_KEY`가 없으면 `None`을 반환합니다. 키 부재는
    /// 설정 오류이며, 클라이언트 없이 기동한 게이트웨이는 ticker-list
    /// 요청에 업스트림 호출 없이 즉시 실패로 응답합니다.
    pub fn from_env() -> Option<Self> {
        std::env::var("HG_BRASIL_API_KEY").ok().map(Self::new)
    }
}

// ============================================================================
// 클라이언트
// ============================================================================

/// HG Brasil finance API 클라이언트.
#[derive(Debug, Clone)]
pub struct HgBrasilClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HgBrasilClient {
    /// 새 클라이언트 생성.
    pub fn new(config: HgBrasilConfig) -> Result<Self, HgBrasilError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HgBrasilError::Network(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }

    /// 티커 목록 조회.
    ///
    /// 업스트림 호출은 정확히 한 번이며 응답은 다음 순서로 분류됩니다:
    ///
    /// 1. non-2xx + 파싱 불가 본문 → [`HgBrasilError::Unavailable`]
    /// 2. HTTP 403 + 본문 `error == true` → [`HgBrasilError::RateLimited`]
    /// 3. 그 외 non-2xx → [`HgBrasilError::Upstream`] (상태 코드 그대로 전달)
    /// 4. 2xx + 본문 `error == true` → [`HgBrasilError::RateLimited`]
    /// 5. 그 외 → 본문 그대로 반환
    pub async fn ticker_list(&self) -> Result<Value, HgBrasilError> {
        let url = format!(
            "{}/ticker_list?format=json-cors&key={}",
            self.base_url, self.api_key
        );

        debug!("HG Brasil 티커 목록 요청");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HgBrasilError::Network(e.to_string()))?;

        let status = response.status();
        let parsed = response.json::<Value>().await;

        let body = match parsed {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                warn!(status = status.as_u16(), "HG Brasil 응답 파싱 불가 (non-2xx)");
                return Err(HgBrasilError::Unavailable);
            }
            Err(e) => return Err(HgBrasilError::Network(e.to_string())),
        };

        // HG Brasil은 엄격한 boolean true로만 에러를 신호한다
        let error_flagged = body.get("error").and_then(Value::as_bool).unwrap_or(false);

        if status.as_u16() == 403 && error_flagged {
            let message = rate_limit_message(&body);
            warn!(message = %message, "HG Brasil 요청 한도 초과 (HTTP 403)");
            return Err(HgBrasilError::RateLimited { message });
        }

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("HG Brasil API returned {}", status.as_u16()));

            warn!(status = status.as_u16(), message = %message, "HG Brasil API 에러");
            return Err(HgBrasilError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        if error_flagged {
            // HTTP 200이지만 본문이 실패를 신호하는 경우 (in-band)
            let message = rate_limit_message(&body);
            warn!(message = %message, "HG Brasil 요청 한도 초과 (in-band)");
            return Err(HgBrasilError::RateLimited { message });
        }

        Ok(body)
    }
}

/// rate-limit 응답 본문에서 메시지 추출.
fn rate_limit_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_RATE_LIMIT_MESSAGE.to_string())
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(server: &mockito::ServerGuard) -> HgBrasilClient {
        HgBrasilClient::new(HgBrasilConfig {
            api_key: "test-key".to_string(),
            base_url: server.url(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn ticker_list_mock(server: &mut mockito::ServerGuard) -> mockito::Mock {
        server.mock("GET", "/ticker_list").match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("format".into(), "json-cors".into()),
            mockito::Matcher::UrlEncoded("key".into(), "test-key".into()),
        ]))
    }

    #[tokio::test]
    async fn test_success_returns_body_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let mock = ticker_list_mock(&mut server)
            .with_status(200)
            .with_body(r#"{"results":{"PETR4":{"name":"Petrobras"}}}"#)
            .create_async()
            .await;

        let body = test_client(&server).ticker_list().await.unwrap();

        mock.assert_async().await;
        assert_eq!(body["results"]["PETR4"]["name"], "Petrobras");
    }

    #[tokio::test]
    async fn test_in_band_error_on_200_is_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        ticker_list_mock(&mut server)
            .with_status(200)
            .with_body(r#"{"error":true,"message":"limit"}"#)
            .create_async()
            .await;

        let err = test_client(&server).ticker_list().await.unwrap_err();

        match err {
            HgBrasilError::RateLimited { message } => assert_eq!(message, "limit"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_403_with_error_flag_is_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        ticker_list_mock(&mut server)
            .with_status(403)
            .with_body(r#"{"error":true}"#)
            .create_async()
            .await;

        let err = test_client(&server).ticker_list().await.unwrap_err();

        match err {
            HgBrasilError::RateLimited { message } => {
                assert_eq!(message, DEFAULT_RATE_LIMIT_MESSAGE)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_is_unavailable() {
        let mut server = mockito::Server::new_async().await;
        ticker_list_mock(&mut server)
            .with_status(500)
            .with_body("<html>Internal Server Error</html>")
            .create_async()
            .await;

        let err = test_client(&server).ticker_list().await.unwrap_err();

        assert!(matches!(err, HgBrasilError::Unavailable));
    }

    #[tokio::test]
    async fn test_other_http_error_passes_status_through() {
        let mut server = mockito::Server::new_async().await;
        ticker_list_mock(&mut server)
            .with_status(404)
            .with_body(r#"{"message":"endpoint not found"}"#)
            .create_async()
            .await;

        let err = test_client(&server).ticker_list().await.unwrap_err();

        match err {
            HgBrasilError::Upstream { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "endpoint not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_flag_must_be_strict_boolean() {
        let mut server = mockito::Server::new_async().await;
        // 문자열 "true"는 에러 신호가 아니다
        ticker_list_mock(&mut server)
            .with_status(200)
            .with_body(r#"{"error":"true","results":{}}"#)
            .create_async()
            .await;

        let body = test_client(&server).ticker_list().await.unwrap();

        assert_eq!(body["error"], "true");
    }

    #[tokio::test]
    async fn test_network_failure_maps_to_network_error() {
        let client = HgBrasilClient::new(HgBrasilConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 2,
        })
        .unwrap();

        let err = client.ticker_list().await.unwrap_err();

        assert!(matches!(err, HgBrasilError::Network(_)));
    }

    #[test]
    fn test_config_debug_masks_api_key() {
        let config = HgBrasilConfig::new("super-secret-key-1234");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret-key-1234"));
        assert!(debug.contains("supe...1234"));
    }

    #[test]
    fn test_config_from_env_absent_key() {
        // 다른 테스트와의 env 간섭을 피하기 위해 고유한 변수로는 검증 불가,
        // 키가 없을 때 None을 반환하는 계약만 확인한다
        std::env::remove_var("HG_BRASIL_API_KEY");
        assert!(HgBrasilConfig::from_env().is_none());
    }
}
