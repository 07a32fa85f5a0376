//! 심볼 로고 해석 endpoint.
//!
//! # 엔드포인트
//!
//! - `GET /api/logos/{symbol}` - 로고 디스크립터 조회
//!
//! 해석은 순수 테이블 조회이므로 실패하지 않습니다. `validate=true`
//! 쿼리를 주면 해석된 URL에 HEAD 검사를 한 번 수행해 `reachable`
//! 플래그를 추가합니다 (업스트림 호출이 생기는 유일한 경로).

use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

use gateway_core::{resolve, AssetType, LogoDescriptor};
use gateway_upstream::validate_logo_url;

use crate::state::AppState;

/// 로고 조회 쿼리.
#[derive(Debug, Deserialize)]
pub struct LogoQuery {
    /// 자산 유형 ("currency" | "commodity" | "index", 그 외는 stock)
    #[serde(default)]
    pub asset_type: Option<String>,
    /// 해석된 URL의 도달 가능성 검사 여부
    #[serde(default)]
    pub validate: Option<bool>,
}

/// 로고 조회 응답.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoResponse {
    /// 해석된 로고 디스크립터
    #[serde(flatten)]
    pub descriptor: LogoDescriptor,
    /// URL 도달 가능성 (validate=true일 때만 포함)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reachable: Option<bool>,
}

/// 심볼 로고 해석.
///
/// GET /api/logos/{symbol}?asset_type=currency&validate=true
///
/// 항상 200으로 디스크립터를 반환합니다. 미지의 심볼은 섹터 분류 또는
/// 자산 유형 폴백으로 해석됩니다.
#[utoipa::path(
    get,
    path = "/api/logos/{symbol}",
    tag = "logos",
    params(
        ("symbol" = String, Path, description = "티커 심볼"),
        ("asset_type" = Option<String>, Query, description = "자산 유형 (기본: stock)"),
        ("validate" = Option<bool>, Query, description = "URL 도달 가능성 검사")
    ),
    responses(
        (status = 200, description = "해석된 로고", body = LogoResponse)
    )
)]
pub async fn get_logo(
    Path(symbol): Path<String>,
    Query(query): Query<LogoQuery>,
) -> Json<LogoResponse> {
    let asset_type = AssetType::parse(query.asset_type.as_deref().unwrap_or(""));
    let descriptor = resolve(&symbol, asset_type);

    debug!(
        symbol = %symbol,
        asset_type = ?asset_type,
        source = ?descriptor.source,
        "로고 해석"
    );

    let reachable = if query.validate.unwrap_or(false) {
        Some(validate_logo_url(&descriptor.url).await)
    } else {
        None
    };

    Json(LogoResponse {
        descriptor,
        reachable,
    })
}

/// 로고 라우터 생성.
pub fn logos_router() -> Router<Arc<AppState>> {
    Router::new().route("/{symbol}", get(get_logo))
}

// ==================== 테스트 ====================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        use crate::state::create_test_state;

        Router::new()
            .nest("/api/logos", logos_router())
            .with_state(Arc::new(create_test_state()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_known_symbol_returns_catalog_entry() {
        let (status, body) = get_json("/api/logos/PETR4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], "/logos/petrobras.svg");
        assert_eq!(body["source"], "public");
        assert!(body.get("reachable").is_none());
    }

    #[tokio::test]
    async fn test_fii_symbol_resolves_to_sector_descriptor() {
        let (status, body) = get_json("/api/logos/HGLG11").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "sector");
        assert_eq!(body["description"], "HGLG11");
    }

    #[tokio::test]
    async fn test_unknown_symbol_with_currency_type() {
        let (status, body) = get_json("/api/logos/XXX?asset_type=currency").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["description"], "Moeda");
        assert!(body["fallbackColor"].as_str().unwrap().starts_with('#'));
    }

    #[tokio::test]
    async fn test_unrecognized_asset_type_falls_back_to_stock() {
        let (_, body) = get_json("/api/logos/XXX?asset_type=INDEX").await;

        // 대문자 변형은 인식되지 않고 stock 폴백을 탄다
        assert_eq!(body["description"], "Ação");
    }
}
