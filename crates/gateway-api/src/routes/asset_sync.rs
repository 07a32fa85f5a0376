//! 백엔드 asset-sync 프록시 endpoint.
//!
//! # 엔드포인트
//!
//! - `POST /api/asset-sync/save-asset` - 자산 저장 (본문 그대로 전달)
//! - `POST /api/asset-sync/simulate` - 시뮬레이션 실행
//! - `GET /api/asset-sync/symbols` - 심볼 목록 조회
//! - `POST /api/asset-sync/sync` - 자산 동기화
//!
//! # 에러 계약
//!
//! 네 핸들러 모두 업스트림 실패를 HTTP 500으로 응답합니다. 업스트림의
//! 원래 상태 코드는 전달하지 않습니다 (ticker-list 핸들러와 다른,
//! 프론트엔드가 의존하는 기존 계약).

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

use gateway_upstream::BackendError;

use crate::error::{ApiResult, ErrorEnvelope};
use crate::state::AppState;

/// 자산 저장 프록시.
///
/// POST /api/asset-sync/save-asset
///
/// 호출자의 JSON 본문을 수정 없이 백엔드로 전달합니다. 업스트림 에러
/// 본문에서 추출된 메시지는 봉투의 `error` 필드로 그대로 노출됩니다.
pub async fn save_asset(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    match state.backend.save_asset(body).await {
        Ok(data) => Ok(Json(data)),
        Err(BackendError::Upstream(message)) => {
            error!(message = %message, "자산 저장 실패 (업스트림 에러)");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope::new(message)),
            ))
        }
        Err(err) => {
            error!(error = %err, "자산 저장 실패");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope::with_details(
                    "Failed to save asset in backend",
                    err.to_string(),
                )),
            ))
        }
    }
}

/// 시뮬레이션 실행 프록시.
///
/// POST /api/asset-sync/simulate
pub async fn simulate(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    state.backend.simulate().await.map(Json).map_err(|err| {
        error!(error = %err, "시뮬레이션 실행 실패");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorEnvelope::with_details(
                "Failed to run simulation in backend",
                err.to_string(),
            )),
        )
    })
}

/// 심볼 목록 조회 프록시.
///
/// GET /api/asset-sync/symbols
pub async fn symbols(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    state.backend.symbols().await.map(Json).map_err(|err| {
        error!(error = %err, "심볼 목록 조회 실패");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorEnvelope::with_details(
                "Failed to fetch symbols from backend",
                err.to_string(),
            )),
        )
    })
}

/// 자산 동기화 실행 프록시.
///
/// POST /api/asset-sync/sync
pub async fn sync(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    state.backend.sync().await.map(Json).map_err(|err| {
        error!(error = %err, "자산 동기화 실패");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorEnvelope::with_details(
                "Failed to sync assets in backend",
                err.to_string(),
            )),
        )
    })
}

/// asset-sync 라우터 생성.
pub fn asset_sync_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/save-asset", post(save_asset))
        .route("/simulate", post(simulate))
        .route("/symbols", get(symbols))
        .route("/sync", post(sync))
}

// ==================== 테스트 ====================
