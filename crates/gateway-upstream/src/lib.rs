//! gateway-upstream
//!
//! 게이트웨이의 아웃바운드 HTTP 클라이언트 모음.
//!
//! - [`backend`]: 로컬 백엔드 asset-sync 프록시 클라이언트
//! - [`hg_brasil`]: HG Brasil finance API 클라이언트 (ticker-list)
//! - [`logo_probe`]: 로고 URL 도달 가능성 검사
//!
//! 모든 클라이언트는 요청당 정확히 한 번의 업스트림 호출만 수행합니다.
//! 재시도, 백오프, 캐싱은 없습니다.

pub mod backend;
pub mod error;
pub mod hg_brasil;
pub mod logo_probe;

pub use backend::{BackendClient, BackendConfig};
pub use error::{BackendError, HgBrasilError};
pub use hg_brasil::{HgBrasilClient, HgBrasilConfig};
pub use logo_probe::validate_logo_url;
