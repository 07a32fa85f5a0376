//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ErrorEnvelope;
use crate::routes::{ComponentHealth, ComponentStatus, HealthResponse, LogoResponse};
use gateway_core::{AssetType, LogoDescriptor, LogoSource};

/// Portfolio Gateway API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Gateway API",
        version = "0.1.0",
        description = r#"
# 포트폴리오 게이트웨이 REST API

투자 포트폴리오 프론트엔드를 위한 프록시/조회 게이트웨이입니다.

## 주요 기능

- **asset-sync 프록시**: 자산 저장, 시뮬레이션, 심볼 조회, 동기화를 로컬 백엔드로 전달
- **HG Brasil 프록시**: 서버 보유 API 키로 티커 목록 조회, rate-limit 정규화 (429)
- **로고 해석**: 심볼 → 로고 디스크립터 (카탈로그 / 섹터 분류 / 유형 폴백)
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(
            name = "Portfolio Gateway Team",
            url = "https://github.com/user/portfolio-gateway"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "asset-sync", description = "asset-sync - 백엔드 프록시"),
        (name = "hg-brasil", description = "HG Brasil - 외부 finance API 프록시"),
        (name = "logos", description = "로고 - 심볼 로고 해석")
    ),
    components(
        schemas(
            // ===== Health =====
            HealthResponse,
            ComponentHealth,
            ComponentStatus,

            // ===== Common =====
            ErrorEnvelope,

            // ===== Logos =====
            LogoResponse,
            LogoDescriptor,
            LogoSource,
            AssetType,
        )
    ),
    paths(
        crate::routes::health::health_check,
        crate::routes::health::health_ready,
        crate::routes::hg_brasil::ticker_list,
        crate::routes::logos::get_logo,
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
///
/// - `/swagger-ui` - Swagger UI 대화형 문서
/// - `/api-docs/openapi.json` - OpenAPI JSON 스펙
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_valid() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&spec).unwrap();

        assert!(json.contains("Portfolio Gateway API"));
        assert!(json.contains("/health"));
        assert!(json.contains("/health/ready"));
        assert!(json.contains("/api/hg-brasil/ticker-list"));
        assert!(json.contains("/api/logos/{symbol}"));
    }

    #[test]
    fn test_openapi_contains_schemas() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string(&spec).unwrap();

        assert!(json.contains("ErrorEnvelope"));
        assert!(json.contains("HealthResponse"));
        assert!(json.contains("LogoDescriptor"));
    }

    #[test]
    fn test_swagger_ui_router_creates() {
        let _router: Router<()> = swagger_ui_router();
    }
}
