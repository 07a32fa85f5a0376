//! 심볼 → 로고 디스크립터 해석.
//!
//! 우선순위는 세 단계입니다:
//!
//! 1. 카탈로그 직접 매칭: [`catalog::SYMBOL_LOGOS`]에 심볼이 있으면 그대로 반환
//! 2. 섹터 분류 폴백: [`sector::classify`]로 섹터를 찾아 일반 아이콘 배정
//! 3. 자산 유형 폴백: `DEFAULT_*` 센티널 엔트리 반환
//!
//! [`resolve`]는 전함수(total function)입니다. 어떤 입력에도 실패하지 않고
//! 항상 디스크립터를 반환합니다.

pub mod catalog;
pub mod sector;

use serde::{Deserialize, Serialize};

pub use sector::Sector;

// ==================== 타입 ====================

/// 로고 출처 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub enum LogoSource {
    /// 게이트웨이가 서빙하는 정적 자산 (`/logos/`)
    Public,
    /// Icons8 CDN 아이콘
    Icons8,
    /// 섹터 분류 폴백
    Sector,
}

/// 로고 디스크립터.
///
/// Frontend의 AssetLogo 타입과 매칭됩니다. 조회마다 새로 생성되며
/// 변경되거나 저장되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct LogoDescriptor {
    /// 로고 이미지 URL
    pub url: String,
    /// 이미지 로드 실패 시 사용할 배경 색상 (hex)
    pub fallback_color: String,
    /// 사람이 읽을 수 있는 설명
    pub description: String,
    /// 로고 출처
    pub source: LogoSource,
}

/// 자산 유형.
///
/// 문자열에서 파싱되며, 인식되지 않는 입력(빈 문자열 포함)은 모두
/// `Stock`으로 처리됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub enum AssetType {
    #[default]
    Stock,
    Currency,
    Commodity,
    Index,
}

impl AssetType {
    /// 문자열에서 자산 유형 파싱.
    ///
    /// 소문자 리터럴만 매칭합니다. 대소문자 변형을 포함한 그 외의 모든
    /// 입력은 `Stock`입니다.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "currency" => AssetType::Currency,
            "commodity" => AssetType::Commodity,
            "index" => AssetType::Index,
            _ => AssetType::Stock,
        }
    }

    /// 유형별 폴백 센티널 키 반환.
    fn sentinel_key(&self) -> &'static str {
        match self {
            AssetType::Stock => "DEFAULT_STOCK",
            AssetType::Currency => "DEFAULT_CURRENCY",
            AssetType::Commodity => "DEFAULT_COMMODITY",
            AssetType::Index => "DEFAULT_INDEX",
        }
    }
}

// ==================== 해석 ====================

/// 심볼과 자산 유형으로 로고 디스크립터 해석.
///
/// 실패하지 않습니다. 카탈로그 → 섹터 → 유형 폴백 순서로 항상
/// 디스크립터를 반환합니다.
pub fn resolve(symbol: &str, asset_type: AssetType) -> LogoDescriptor {
    // 1. 카탈로그 직접 매칭 (대소문자 구분, 저장된 정규형 기준)
    if let Some(descriptor) = catalog::lookup(symbol) {
        return descriptor.clone();
    }

    // 2. 섹터 분류 폴백
    if let Some(found) = sector::classify(symbol) {
        if let Some(icon_url) = found.icon_url() {
            return LogoDescriptor {
                url: icon_url.to_string(),
                fallback_color: found.fallback_color().to_string(),
                description: symbol.to_string(),
                source: LogoSource::Sector,
            };
        }
    }

    // 3. 자산 유형 폴백
    catalog::SYMBOL_LOGOS[asset_type.sentinel_key()].clone()
}
