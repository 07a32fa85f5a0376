//! 로고 해석 통합 테스트.
//!
//! 카탈로그 → 섹터 → 자산 유형 폴백의 전체 우선순위 체인을
//! 공개 API만으로 검증합니다.

use gateway_core::{resolve, AssetType, LogoSource};

#[test]
fn catalog_entries_win_over_sector_membership() {
    // SANB11은 카탈로그와 은행 섹터 어느 쪽으로도 해석 가능한 심볼이지만
    // 카탈로그가 항상 우선한다
    let descriptor = resolve("SANB11", AssetType::Stock);

    assert_eq!(descriptor.url, "/logos/santander.svg");
    assert_eq!(descriptor.source, LogoSource::Public);
}

#[test]
fn catalog_entries_win_regardless_of_asset_type() {
    for asset_type in [
        AssetType::Stock,
        AssetType::Currency,
        AssetType::Commodity,
        AssetType::Index,
    ] {
        let descriptor = resolve("VALE3", asset_type);
        assert_eq!(descriptor.url, "/logos/vale.svg");
    }
}

#[test]
fn sector_fallback_produces_sector_source() {
    let descriptor = resolve("MRVE3", AssetType::Stock);

    assert_eq!(descriptor.source, LogoSource::Sector);
    assert_eq!(descriptor.description, "MRVE3");
    assert!(descriptor.url.starts_with("https://img.icons8.com/"));
}

#[test]
fn fii_allowlist_gates_realestate_classification() {
    let listed = resolve("KNRI11", AssetType::Stock);
    assert_eq!(listed.source, LogoSource::Sector);

    // 접미사만 맞는 심볼은 유형 폴백으로 떨어진다
    let unlisted = resolve("FAKE11", AssetType::Stock);
    assert_eq!(unlisted, resolve("", AssetType::Stock));
}

#[test]
fn unknown_symbols_fall_back_by_asset_type() {
    let currency = resolve("???", AssetType::parse("currency"));
    let stock = resolve("???", AssetType::parse("anything-else"));

    assert_eq!(currency.description, "Moeda");
    assert_eq!(stock.description, "Ação");
    assert_ne!(currency.url, stock.url);
}
