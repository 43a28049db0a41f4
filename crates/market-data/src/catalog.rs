use crate::error::MarketDataError;
use crate::quotes;
use crate::MarketData;
use async_trait::async_trait;
use core_types::{Asset, AssetClass, MarketTrend, Quote};
use rust_decimal_macros::dec;

/// A provider backed by a fixed in-process dataset.
///
/// This is the implementation behind the demo deployment: the catalog,
/// trend list, and quote pool are seeded at construction time and never
/// change. A live provider would implement the same `MarketData` contract.
pub struct InMemoryMarketData {
    assets: Vec<Asset>,
    trends: Vec<MarketTrend>,
    quotes: Vec<Quote>,
}

impl InMemoryMarketData {
    /// Builds the provider with the standard seed dataset.
    pub fn new() -> Self {
        Self {
            assets: seed_assets(),
            trends: seed_trends(),
            quotes: quotes::seed_quotes(),
        }
    }

}

impl Default for InMemoryMarketData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketData for InMemoryMarketData {
    async fn all_assets(&self) -> Result<Vec<Asset>, MarketDataError> {
        Ok(self.assets.clone())
    }

    async fn market_trends(&self) -> Result<Vec<MarketTrend>, MarketDataError> {
        Ok(self.trends.clone())
    }

    async fn random_quote(&self) -> Result<Quote, MarketDataError> {
        quotes::pick_random(&self.quotes)
    }
}

/// The seeded instrument catalog: an ESG-leaning mix of stocks, ETFs,
/// crypto, and bonds. Publication order is not ranked; ranking happens in
/// the analytics crate.
fn seed_assets() -> Vec<Asset> {
    vec![
        Asset {
            symbol: "NEE".to_string(),
            name: "NextEra Energy".to_string(),
            asset_class: AssetClass::Stock,
            current_price: dec!(74.52),
            price_change_24h: dec!(0.84),
            esg_score: dec!(86.3),
            roi_1y: dec!(11.2),
        },
        Asset {
            symbol: "ENPH".to_string(),
            name: "Enphase Energy".to_string(),
            asset_class: AssetClass::Stock,
            current_price: dec!(112.40),
            price_change_24h: dec!(-1.62),
            esg_score: dec!(74.8),
            roi_1y: dec!(18.9),
        },
        Asset {
            symbol: "VWCE".to_string(),
            name: "Vanguard FTSE All-World".to_string(),
            asset_class: AssetClass::Etf,
            current_price: dec!(118.77),
            price_change_24h: dec!(0.31),
            esg_score: dec!(68.1),
            roi_1y: dec!(14.6),
        },
        Asset {
            symbol: "ICLN".to_string(),
            name: "iShares Global Clean Energy".to_string(),
            asset_class: AssetClass::Etf,
            current_price: dec!(15.93),
            price_change_24h: dec!(1.27),
            esg_score: dec!(91.5),
            roi_1y: dec!(9.4),
        },
        Asset {
            symbol: "MSFT".to_string(),
            name: "Microsoft".to_string(),
            asset_class: AssetClass::Stock,
            current_price: dec!(428.15),
            price_change_24h: dec!(0.58),
            esg_score: dec!(82.9),
            roi_1y: dec!(24.3),
        },
        Asset {
            symbol: "TSLA".to_string(),
            name: "Tesla".to_string(),
            asset_class: AssetClass::Stock,
            current_price: dec!(243.60),
            price_change_24h: dec!(-2.15),
            esg_score: dec!(60.2),
            roi_1y: dec!(7.8),
        },
        Asset {
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            asset_class: AssetClass::Crypto,
            current_price: dec!(67450.00),
            price_change_24h: dec!(3.42),
            esg_score: dec!(31.7),
            roi_1y: dec!(52.1),
        },
        Asset {
            symbol: "ETH".to_string(),
            name: "Ethereum".to_string(),
            asset_class: AssetClass::Crypto,
            current_price: dec!(3215.80),
            price_change_24h: dec!(2.08),
            esg_score: dec!(55.4),
            roi_1y: dec!(38.7),
        },
        Asset {
            symbol: "VSTA".to_string(),
            name: "Vesta Wind Systems".to_string(),
            asset_class: AssetClass::Stock,
            current_price: dec!(21.34),
            price_change_24h: dec!(0.00),
            esg_score: dec!(88.6),
            roi_1y: dec!(5.9),
        },
        Asset {
            symbol: "GRNB".to_string(),
            name: "VanEck Green Bond".to_string(),
            asset_class: AssetClass::Bond,
            current_price: dec!(24.61),
            price_change_24h: dec!(-0.12),
            esg_score: dec!(93.2),
            roi_1y: dec!(3.1),
        },
        Asset {
            symbol: "ESGV".to_string(),
            name: "Vanguard ESG US Stock".to_string(),
            asset_class: AssetClass::Etf,
            current_price: dec!(96.48),
            price_change_24h: dec!(0.47),
            esg_score: dec!(79.0),
            roi_1y: dec!(19.8),
        },
        Asset {
            symbol: "FSLR".to_string(),
            name: "First Solar".to_string(),
            asset_class: AssetClass::Stock,
            current_price: dec!(188.22),
            price_change_24h: dec!(1.91),
            esg_score: dec!(84.1),
            roi_1y: dec!(28.5),
        },
    ]
}

fn seed_trends() -> Vec<MarketTrend> {
    vec![
        MarketTrend {
            title: "Clean energy capex accelerates".to_string(),
            description: "Utility-scale solar and storage build-outs keep beating forecasts \
                          as grid operators race to meet data-center demand."
                .to_string(),
            impact: "Positive for renewable energy".to_string(),
            confidence: 82,
        },
        MarketTrend {
            title: "Rate cuts priced in for Q4".to_string(),
            description: "Futures markets now imply two cuts before year end, lifting \
                          long-duration growth names."
                .to_string(),
            impact: "Positive for equities broadly".to_string(),
            confidence: 67,
        },
        MarketTrend {
            title: "EU tightens disclosure rules".to_string(),
            description: "Stricter CSRD reporting raises compliance costs for mid-cap \
                          issuers with weak ESG data pipelines."
                .to_string(),
            impact: "Negative for laggard mid-caps".to_string(),
            confidence: 74,
        },
        MarketTrend {
            title: "Crypto volatility returns".to_string(),
            description: "ETF flows swing week to week; expect wide ranges rather than \
                          a clear direction."
                .to_string(),
            impact: "Mixed".to_string(),
            confidence: 58,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn catalog_symbols_are_unique() {
        let assets = seed_assets();
        let mut symbols: Vec<&str> = assets.iter().map(|a| a.symbol.as_str()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), assets.len());
    }

    #[test]
    fn catalog_figures_are_in_range() {
        let assets = seed_assets();
        assert!(assets.len() >= 10);
        for asset in &assets {
            assert!(asset.current_price >= Decimal::ZERO, "{}", asset.symbol);
            assert!(
                asset.esg_score >= Decimal::ZERO && asset.esg_score <= Decimal::from(100),
                "{}",
                asset.symbol
            );
        }
    }

    #[test]
    fn trend_confidence_is_a_percentage() {
        for trend in seed_trends() {
            assert!(trend.confidence <= 100, "{}", trend.title);
        }
    }

    #[tokio::test]
    async fn provider_serves_the_seed_data() {
        let provider = InMemoryMarketData::new();
        assert_eq!(provider.all_assets().await.unwrap().len(), seed_assets().len());
        assert!(provider.market_trends().await.unwrap().len() >= 3);
        provider.random_quote().await.unwrap();
    }
}
