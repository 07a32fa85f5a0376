//! gateway-api
//!
//! 포트폴리오 게이트웨이의 REST API 서버.
//!
//! # 제공 엔드포인트
//!
//! - `/api/asset-sync/*` - 백엔드 asset-sync 프록시
//! - `/api/hg-brasil/ticker-list` - HG Brasil 티커 목록 프록시
//! - `/api/logos/{symbol}` - 심볼 로고 해석
//! - `/health`, `/health/ready` - 헬스 체크
//! - `/swagger-ui` - API 문서

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
