//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/asset-sync` - 백엔드 asset-sync 프록시
//! - `/api/hg-brasil` - HG Brasil finance API 프록시
//! - `/api/logos` - 심볼 로고 해석

pub mod asset_sync;
pub mod health;
pub mod hg_brasil;
pub mod logos;

pub use asset_sync::asset_sync_router;
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use hg_brasil::hg_brasil_router;
pub use logos::{logos_router, LogoResponse};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .nest("/api/asset-sync", asset_sync_router())
        .nest("/api/hg-brasil", hg_brasil_router())
        .nest("/api/logos", logos_router())
}
