//! HG Brasil 프록시 endpoint.
//!
//! # 엔드포인트
//!
//! - `GET /api/hg-brasil/ticker-list` - 티커 목록 조회
//!
//! asset-sync 핸들러와 달리 업스트림의 HTTP 상태 코드를 그대로
//! 전달하며, rate-limit은 업스트림이 어떤 채널로 신호했든 HTTP 429로
//! 정규화됩니다.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

use gateway_upstream::HgBrasilError;

use crate::error::{ApiResult, ErrorEnvelope};
use crate::state::AppState;

/// 티커 목록 조회.
///
/// GET /api/hg-brasil/ticker-list
///
/// API 키가 설정되지 않은 경우 업스트림 호출 없이 즉시 500으로
/// 응답합니다. rate-limit(업스트림 403 또는 200 + in-band 에러 플래그)은
/// 429와 사용자 안내 목록으로 정규화됩니다.
#[utoipa::path(
    get,
    path = "/api/hg-brasil/ticker-list",
    tag = "hg-brasil",
    responses(
        (status = 200, description = "업스트림 JSON 그대로 반환"),
        (status = 429, description = "요청 한도 초과", body = ErrorEnvelope),
        (status = 500, description = "설정 오류 또는 업스트림 장애", body = ErrorEnvelope)
    )
)]
pub async fn ticker_list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let Some(client) = &state.hg_brasil else {
        warn!("HG_BRASIL_API_KEY 미설정 상태에서 티커 목록 요청");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorEnvelope::new("HG Brasil API key not configured")),
        ));
    };

    match client.ticker_list().await {
        Ok(body) => Ok(Json(body)),
        Err(HgBrasilError::RateLimited { message }) => {
            warn!(message = %message, "HG Brasil 요청 한도 초과");
            Err((
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorEnvelope::rate_limited(message)),
            ))
        }
        Err(HgBrasilError::Upstream { status, message }) => {
            error!(status, message = %message, "HG Brasil API 에러");
            Err((
                // 업스트림 상태 코드를 그대로 전달한다
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(ErrorEnvelope::new(message)),
            ))
        }
        Err(HgBrasilError::Unavailable) => {
            error!("HG Brasil 서비스 응답 불가");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope::new("HG Brasil service unavailable")),
            ))
        }
        Err(err @ HgBrasilError::Network(_)) => {
            error!(error = %err, "HG Brasil 요청 실패");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope::with_details(
                    "Failed to fetch ticker list",
                    err.to_string(),
                )),
            ))
        }
    }
}

/// HG Brasil 라우터 생성.
pub fn hg_brasil_router() -> Router<Arc<AppState>> {
    Router::new().route("/ticker-list", get(ticker_list))
}

// ==================== 테스트 ====================
