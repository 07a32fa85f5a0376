//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! Arc로 래핑되어 Axum의 State extractor를 통해 핸들러에 주입됩니다.
//! 요청 간 가변 공유 상태는 없습니다. 클라이언트는 읽기 전용이며
//! 내부 연결 풀만 재사용합니다.

use std::sync::Arc;

use gateway_upstream::{BackendClient, HgBrasilClient};

/// 애플리케이션 공유 상태.
#[derive(Clone)]
pub struct AppState {
    /// 백엔드 asset-sync 클라이언트 (항상 설정됨)
    pub backend: Arc<BackendClient>,

    /// HG Brasil 클라이언트.
    ///
    /// `HG_BRASIL_API_KEY`가 없으면 `None`이며, ticker-list 요청은
    /// 업스트림 호출 없이 즉시 설정 오류로 응답합니다.
    pub hg_brasil: Option<Arc<HgBrasilClient>>,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(backend: BackendClient, hg_brasil: Option<HgBrasilClient>) -> Self {
        Self {
            backend: Arc::new(backend),
            hg_brasil: hg_brasil.map(Arc::new),
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 서버 업타임(초) 반환.
    pub fn uptime_secs(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds()
    }
}

/// 테스트용 AppState 생성.
///
/// 기본 로컬 백엔드 주소를 가리키며 HG Brasil 클라이언트는 없습니다.
pub fn create_test_state() -> AppState {
    use gateway_upstream::BackendConfig;

    let backend =
        BackendClient::new(BackendConfig::default()).expect("failed to build test backend client");

    AppState::new(backend, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_state() {
        let state = create_test_state();

        assert!(state.hg_brasil.is_none());
        assert!(!state.version.is_empty());
        assert!(state.uptime_secs() >= 0);
    }
}
