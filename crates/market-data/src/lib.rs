use crate::error::MarketDataError;
use async_trait::async_trait;
use core_types::{Asset, MarketTrend, Quote};

pub mod catalog;
pub mod error;
pub mod quotes;

// --- Public API ---
pub use catalog::InMemoryMarketData;

/// The generic, abstract interface for a market-data provider.
/// This trait is the contract that the web layer uses, allowing the
/// underlying implementation (seeded or live) to be swapped out.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Fetches the full asset catalog, in the order the source publishes it.
    async fn all_assets(&self) -> Result<Vec<Asset>, MarketDataError>;

    /// Fetches the current market trend narratives, most significant first.
    async fn market_trends(&self) -> Result<Vec<MarketTrend>, MarketDataError>;

    /// Draws one quote uniformly from the quote pool.
    async fn random_quote(&self) -> Result<Quote, MarketDataError>;
}
