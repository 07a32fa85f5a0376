//! 심볼별 로고 카탈로그.
//!
//! B3 주요 종목의 로고를 심볼 키로 조회하는 정적 테이블입니다.
//! 프로세스 시작 시 한 번 초기화되며 이후 읽기 전용입니다.
//!
//! `DEFAULT_STOCK` / `DEFAULT_CURRENCY` / `DEFAULT_COMMODITY` / `DEFAULT_INDEX`
//! 키는 자산 유형별 폴백 센티널로 사용됩니다.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{LogoDescriptor, LogoSource};

/// 카탈로그 엔트리 정의 (심볼, 로고 URL, 폴백 색상, 설명, 소스).
///
/// `Public` 소스는 게이트웨이가 직접 서빙하는 `/logos/` 정적 자산,
/// `Icons8`은 외부 아이콘 CDN입니다.
const CATALOG_ENTRIES: &[(&str, &str, &str, &str, LogoSource)] = &[
    // ===== 석유/가스 =====
    ("PETR3", "/logos/petrobras.svg", "#008542", "Petrobras ON", LogoSource::Public),
    ("PETR4", "/logos/petrobras.svg", "#008542", "Petrobras PN", LogoSource::Public),
    ("PRIO3", "/logos/prio.svg", "#1B3B6F", "PetroRio ON", LogoSource::Public),
    // ===== 광업/철강 =====
    ("VALE3", "/logos/vale.svg", "#007E7A", "Vale ON", LogoSource::Public),
    ("CSNA3", "/logos/csn.svg", "#003DA5", "CSN ON", LogoSource::Public),
    ("GGBR4", "/logos/gerdau.svg", "#00437B", "Gerdau PN", LogoSource::Public),
    // ===== 은행/금융 =====
    ("ITUB4", "/logos/itau.svg", "#EC7000", "Itaú Unibanco PN", LogoSource::Public),
    ("BBDC4", "/logos/bradesco.svg", "#CC092F", "Bradesco PN", LogoSource::Public),
    ("BBAS3", "/logos/banco-do-brasil.svg", "#F9DD16", "Banco do Brasil ON", LogoSource::Public),
    ("SANB11", "/logos/santander.svg", "#EC0000", "Santander Brasil Unit", LogoSource::Public),
    ("B3SA3", "/logos/b3.svg", "#00A09B", "B3 ON", LogoSource::Public),
    ("ITSA4", "/logos/itausa.svg", "#00529B", "Itaúsa PN", LogoSource::Public),
    // ===== 소비재/음료 =====
    ("ABEV3", "/logos/ambev.svg", "#F5E003", "Ambev ON", LogoSource::Public),
    ("JBSS3", "/logos/jbs.svg", "#E30613", "JBS ON", LogoSource::Public),
    // ===== 소매 =====
    ("MGLU3", "/logos/magalu.svg", "#0086FF", "Magazine Luiza ON", LogoSource::Public),
    ("LREN3", "/logos/renner.svg", "#C8102E", "Lojas Renner ON", LogoSource::Public),
    // ===== 산업재 =====
    ("WEGE3", "/logos/weg.svg", "#00579D", "WEG ON", LogoSource::Public),
    ("EMBR3", "/logos/embraer.svg", "#002776", "Embraer ON", LogoSource::Public),
    ("SUZB3", "/logos/suzano.svg", "#00583D", "Suzano ON", LogoSource::Public),
    // ===== 전력/유틸리티 =====
    ("ELET3", "/logos/eletrobras.svg", "#00955F", "Eletrobras ON", LogoSource::Public),
    ("CMIG4", "/logos/cemig.svg", "#00703C", "Cemig PN", LogoSource::Public),
    // ===== 통신 =====
    ("VIVT3", "/logos/vivo.svg", "#660099", "Telefônica Brasil ON", LogoSource::Public),
    ("TIMS3", "/logos/tim.svg", "#004691", "TIM ON", LogoSource::Public),
    // ===== 헬스케어 =====
    ("RDOR3", "/logos/rede-dor.svg", "#00A3E0", "Rede D'Or ON", LogoSource::Public),
    ("HAPV3", "/logos/hapvida.svg", "#0054A6", "Hapvida ON", LogoSource::Public),
    // ===== ETF =====
    (
        "BOVA11",
        "https://img.icons8.com/color/96/combo-chart.png",
        "#1E3A8A",
        "iShares Ibovespa ETF",
        LogoSource::Icons8,
    ),
    (
        "IVVB11",
        "https://img.icons8.com/color/96/combo-chart.png",
        "#1E3A8A",
        "iShares S&P 500 ETF",
        LogoSource::Icons8,
    ),
    // ===== 통화 =====
    (
        "USD",
        "https://img.icons8.com/color/96/us-dollar-circled.png",
        "#2E7D32",
        "Dólar americano",
        LogoSource::Icons8,
    ),
    (
        "EUR",
        "https://img.icons8.com/color/96/euro-pound-exchange.png",
        "#1565C0",
        "Euro",
        LogoSource::Icons8,
    ),
    (
        "BTC",
        "https://img.icons8.com/color/96/bitcoin.png",
        "#F7931A",
        "Bitcoin",
        LogoSource::Icons8,
    ),
    // ===== 자산 유형별 폴백 센티널 =====
    (
        "DEFAULT_STOCK",
        "https://img.icons8.com/color/96/line-chart.png",
        "#0066CC",
        "Ação",
        LogoSource::Icons8,
    ),
    (
        "DEFAULT_CURRENCY",
        "https://img.icons8.com/color/96/currency-exchange.png",
        "#2E7D32",
        "Moeda",
        LogoSource::Icons8,
    ),
    (
        "DEFAULT_COMMODITY",
        "https://img.icons8.com/color/96/gold-bars.png",
        "#B8860B",
        "Commodity",
        LogoSource::Icons8,
    ),
    (
        "DEFAULT_INDEX",
        "https://img.icons8.com/color/96/combo-chart.png",
        "#1E3A8A",
        "Índice",
        LogoSource::Icons8,
    ),
];

/// 심볼 → 로고 디스크립터 테이블.
pub static SYMBOL_LOGOS: Lazy<HashMap<&'static str, LogoDescriptor>> = Lazy::new(|| {
    CATALOG_ENTRIES
        .iter()
        .map(|(symbol, url, color, description, source)| {
            (
                *symbol,
                LogoDescriptor {
                    url: (*url).to_string(),
                    fallback_color: (*color).to_string(),
                    description: (*description).to_string(),
                    source: *source,
                },
            )
        })
        .collect()
});

/// 카탈로그에서 심볼 조회 (대소문자 구분, 정규형 심볼 기준).
pub fn lookup(symbol: &str) -> Option<&'static LogoDescriptor> {
    SYMBOL_LOGOS.get(symbol)
}
