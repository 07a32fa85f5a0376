//! 섹터 분류 규칙 및 섹터별 아이콘/색상 테이블.
//!
//! 카탈로그에 없는 심볼을 섹터 단위로 분류하여 일반 아이콘을 배정합니다.
//! 분류는 고정된 순서의 first-match 스캔입니다:
//! 은행 → 석유 → 유틸리티 → 광업 → 소매 → 테크 → 제조 → 통신 →
//! 헬스케어 → 식품 → 건설 → 부동산(FII).
//!
//! 부동산(FII) 규칙만 이중 조건입니다: 심볼이 `"11"`로 끝나고 **동시에**
//! FII 허용 목록에 있어야 합니다. 접미사만으로는 분류되지 않습니다
//! (SANB11, TAEE11 같은 Unit 종목과의 충돌 방지).

use serde::{Deserialize, Serialize};

/// 섹터 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub enum Sector {
    Bank,
    Oil,
    Utilities,
    Mining,
    Retail,
    Tech,
    Manufacturing,
    Telecom,
    Healthcare,
    Food,
    Construction,
    RealEstate,
}

// ==================== 섹터별 심볼 집합 ====================
// 집합 간 중복 금지. 중복 심볼은 평가 순서상 먼저 오는 섹터로 분류된다.

const BANK_SYMBOLS: &[&str] = &[
    "ITUB3", "BBDC3", "BPAC11", "BPAN4", "ABCB4", "BRSR6", "PINE4",
];

const OIL_SYMBOLS: &[&str] = &["RECV3", "RRRP3", "UGPA3", "VBBR3", "CSAN3", "RPMG3"];

const UTILITIES_SYMBOLS: &[&str] = &[
    "ELET6", "CPLE6", "EGIE3", "TAEE11", "ENGI11", "SBSP3", "CPFE3", "NEOE3", "AURE3",
];

const MINING_SYMBOLS: &[&str] = &["CMIN3", "USIM5", "AURA33", "CBAV3"];

const RETAIL_SYMBOLS: &[&str] = &[
    "AMER3", "PETZ3", "ARZZ3", "SOMA3", "ASAI3", "PCAR3", "CEAB3",
];

const TECH_SYMBOLS: &[&str] = &["TOTS3", "LWSA3", "POSI3", "INTB3", "CASH3", "NGRD3"];

const MANUFACTURING_SYMBOLS: &[&str] = &[
    "KLBN11", "RANI3", "TUPY3", "ROMI3", "KEPL3", "FRAS3", "MYPK3",
];

const TELECOM_SYMBOLS: &[&str] = &["OIBR3", "DESK3", "FIQE3", "TELB4"];

const HEALTHCARE_SYMBOLS: &[&str] = &["FLRY3", "QUAL3", "ONCO3", "DASA3", "MATD3"];

const FOOD_SYMBOLS: &[&str] = &["BRFS3", "MRFG3", "BEEF3", "SMTO3", "CAML3", "MDIA3"];

const CONSTRUCTION_SYMBOLS: &[&str] = &["CYRE3", "EZTC3", "MRVE3", "TEND3", "DIRR3", "CURY3"];

/// FII(부동산 투자 펀드) 허용 목록.
///
/// `"11"` 접미사를 가진 심볼 중 여기에 등록된 것만 부동산으로 분류된다.
const FII_SYMBOLS: &[&str] = &[
    "HGLG11", "KNRI11", "MXRF11", "XPML11", "XPLG11", "VISC11", "HGRE11", "BCFF11", "HGBS11",
    "BTLG11", "KNCR11", "VILG11",
];

/// 섹터 분류 규칙 (평가 순서 고정).
///
/// 부동산(FII)은 접미사 조건이 추가로 필요하므로 이 목록에 포함하지 않고
/// [`classify`]에서 마지막에 별도로 평가한다.
const SECTOR_RULES: &[(Sector, &[&str])] = &[
    (Sector::Bank, BANK_SYMBOLS),
    (Sector::Oil, OIL_SYMBOLS),
    (Sector::Utilities, UTILITIES_SYMBOLS),
    (Sector::Mining, MINING_SYMBOLS),
    (Sector::Retail, RETAIL_SYMBOLS),
    (Sector::Tech, TECH_SYMBOLS),
    (Sector::Manufacturing, MANUFACTURING_SYMBOLS),
    (Sector::Telecom, TELECOM_SYMBOLS),
    (Sector::Healthcare, HEALTHCARE_SYMBOLS),
    (Sector::Food, FOOD_SYMBOLS),
    (Sector::Construction, CONSTRUCTION_SYMBOLS),
];

// ==================== 섹터 아이콘/색상 ====================

/// 섹터 → 일반 아이콘 URL.
const SECTOR_ICONS: &[(Sector, &str)] = &[
    (Sector::Bank, "https://img.icons8.com/color/96/bank-building.png"),
    (Sector::Oil, "https://img.icons8.com/color/96/oil-pump.png"),
    (Sector::Utilities, "https://img.icons8.com/color/96/lightning-bolt.png"),
    (Sector::Mining, "https://img.icons8.com/color/96/mine-cart.png"),
    (Sector::Retail, "https://img.icons8.com/color/96/shopping-cart.png"),
    (Sector::Tech, "https://img.icons8.com/color/96/laptop.png"),
    (Sector::Manufacturing, "https://img.icons8.com/color/96/factory.png"),
    (Sector::Telecom, "https://img.icons8.com/color/96/cell-tower.png"),
    (Sector::Healthcare, "https://img.icons8.com/color/96/heart-health.png"),
    (Sector::Food, "https://img.icons8.com/color/96/restaurant.png"),
    (Sector::Construction, "https://img.icons8.com/color/96/crane.png"),
    (Sector::RealEstate, "https://img.icons8.com/color/96/city-buildings.png"),
];

/// 섹터 → 폴백 색상. 등록되지 않은 섹터는 [`DEFAULT_SECTOR_COLOR`].
const SECTOR_COLORS: &[(Sector, &str)] = &[
    (Sector::Bank, "#1A5276"),
    (Sector::Oil, "#145A32"),
    (Sector::Utilities, "#B7950B"),
    (Sector::Mining, "#6E2C00"),
    (Sector::Retail, "#884EA0"),
    (Sector::Tech, "#2471A3"),
    (Sector::Manufacturing, "#566573"),
    (Sector::Healthcare, "#C0392B"),
    (Sector::Food, "#D35400"),
    (Sector::RealEstate, "#117A65"),
];

/// 색상 테이블에 엔트리가 없을 때의 기본 색상.
pub const DEFAULT_SECTOR_COLOR: &str = "#0066CC";

impl Sector {
    /// 섹터 일반 아이콘 URL 반환.
    pub fn icon_url(&self) -> Option<&'static str> {
        SECTOR_ICONS
            .iter()
            .find(|(sector, _)| sector == self)
            .map(|(_, url)| *url)
    }

    /// 섹터 폴백 색상 반환.
    pub fn fallback_color(&self) -> &'static str {
        SECTOR_COLORS
            .iter()
            .find(|(sector, _)| sector == self)
            .map(|(_, color)| *color)
            .unwrap_or(DEFAULT_SECTOR_COLOR)
    }
}

/// 심볼을 섹터로 분류.
///
/// 대소문자 무관 (비교 전에 심볼을 대문자로 정규화).
/// 어느 규칙에도 해당하지 않으면 `None`.
pub fn classify(symbol: &str) -> Option<Sector> {
    let normalized = symbol.to_uppercase();

    for (sector, members) in SECTOR_RULES {
        if members.contains(&normalized.as_str()) {
            return Some(*sector);
        }
    }

    // FII: "11" 접미사와 허용 목록 둘 다 필요
    if normalized.ends_with("11") && FII_SYMBOLS.contains(&normalized.as_str()) {
        return Some(Sector::RealEstate);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_sectors() {
        assert_eq!(classify("ITUB3"), Some(Sector::Bank));
        assert_eq!(classify("RECV3"), Some(Sector::Oil));
        assert_eq!(classify("TOTS3"), Some(Sector::Tech));
        assert_eq!(classify("BRFS3"), Some(Sector::Food));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("itub3"), Some(Sector::Bank));
        assert_eq!(classify("hglg11"), Some(Sector::RealEstate));
    }

    #[test]
    fn test_fii_requires_both_suffix_and_allowlist() {
        // 허용 목록에 있는 FII
        assert_eq!(classify("HGLG11"), Some(Sector::RealEstate));
        // "11"로 끝나지만 허용 목록에 없음 → 부동산 아님
        assert_eq!(classify("ZZZZ11"), None);
        // Unit 종목은 접미사가 "11"이어도 먼저 매칭되는 섹터로 분류됨
        assert_eq!(classify("BPAC11"), Some(Sector::Bank));
        assert_eq!(classify("TAEE11"), Some(Sector::Utilities));
    }

    #[test]
    fn test_classify_unknown_returns_none() {
        assert_eq!(classify("UNKNOWN"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_membership_sets_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for (_, members) in SECTOR_RULES {
            for symbol in *members {
                assert!(seen.insert(*symbol), "symbol in two sectors: {}", symbol);
            }
        }
        for symbol in FII_SYMBOLS {
            assert!(seen.insert(*symbol), "symbol in two sectors: {}", symbol);
        }
    }

    #[test]
    fn test_every_sector_has_icon() {
        for (sector, _) in SECTOR_RULES {
            assert!(sector.icon_url().is_some());
        }
        assert!(Sector::RealEstate.icon_url().is_some());
    }

    #[test]
    fn test_unlisted_sector_color_falls_back_to_default() {
        assert_eq!(Sector::Telecom.fallback_color(), DEFAULT_SECTOR_COLOR);
        assert_eq!(Sector::Construction.fallback_color(), DEFAULT_SECTOR_COLOR);
        assert_eq!(Sector::Bank.fallback_color(), "#1A5276");
    }
}
