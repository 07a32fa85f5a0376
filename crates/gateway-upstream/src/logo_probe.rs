//! 로고 URL 도달 가능성 검사.
//!
//! HEAD 요청 한 번으로 URL이 살아 있는지 확인합니다.
//!
//! 약한 검사입니다: 전송 자체가 실패한 경우에만 `false`를 반환하며,
//! HTTP 4xx/5xx 응답도 `true`로 칩니다. 교차 출처 불투명 응답 환경의
//! 기존 호출자 기대와 맞추기 위한 계약이므로 상태 코드 검사로
//! 강화하지 않습니다.

use once_cell::sync::Lazy;
use reqwest::Client;
use tracing::debug;

/// 검사 전용 공유 클라이언트.
static PROBE_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// 로고 URL 도달 가능성 확인.
///
/// 전송 에러(연결 실패, DNS 실패, 타임아웃)에서만 `false`.
pub async fn validate_logo_url(url: &str) -> bool {
    match PROBE_CLIENT.head(url).send().await {
        Ok(_) => true,
        Err(e) => {
            debug!(url = %url, error = %e, "로고 URL 검사 실패");
            false
        }
    }
}
