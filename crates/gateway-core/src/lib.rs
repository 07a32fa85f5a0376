//! gateway-core
//!
//! 포트폴리오 게이트웨이의 핵심 도메인 타입과 로고 해석 로직.
//!
//! # 모듈 구성
//!
//! - [`logo`]: 심볼 → 로고 디스크립터 해석 (정적 카탈로그 + 섹터 분류 폴백)
//!
//! 이 크레이트는 네트워크 I/O를 포함하지 않습니다. 모든 조회 테이블은
//! 프로세스 시작 시 한 번 초기화되며 이후 읽기 전용이므로 동시 접근에
//! 안전합니다.

pub mod logo;

pub use logo::{resolve, AssetType, LogoDescriptor, LogoSource, Sector};
