use crate::enums::AssetClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A snapshot of one tradable instrument as published by the market-data
/// provider.
///
/// Assets are immutable value records for the duration of a single page
/// render; `symbol` is assumed unique within one fetched set but this is
/// not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Ticker symbol (e.g. "NEE").
    pub symbol: String,
    /// Human-readable display name.
    pub name: String,
    /// Instrument category.
    pub asset_class: AssetClass,
    /// Last traded price in USD. Non-negative.
    pub current_price: Decimal,
    /// Signed 24-hour price change, in percent.
    pub price_change_24h: Decimal,
    /// Environmental/social/governance rating, 0-100.
    pub esg_score: Decimal,
    /// Signed one-year return on investment, in percent. Ranking key for
    /// the top-assets grid.
    pub roi_1y: Decimal,
}

/// A market trend narrative shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrend {
    pub title: String,
    pub description: String,
    /// Free-text impact label (e.g. "Positive for renewable energy").
    /// Presentation scans it for "positive"/"negative" to pick a color.
    pub impact: String,
    /// Provider confidence in the trend, 0-100.
    pub confidence: u8,
}

/// An investing quote shown in the quote card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// The signed-in user as resolved from the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

impl UserProfile {
    /// The greeting name: the first whitespace-separated token of
    /// `full_name`, or the full string if it has no spaces.
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name_takes_leading_token() {
        let user = UserProfile {
            id: Uuid::nil(),
            full_name: "Amara Okafor".to_string(),
            email: "amara@example.com".to_string(),
        };
        assert_eq!(user.first_name(), "Amara");
    }

    #[test]
    fn first_name_falls_back_to_full_string() {
        let user = UserProfile {
            id: Uuid::nil(),
            full_name: "Cher".to_string(),
            email: "cher@example.com".to_string(),
        };
        assert_eq!(user.first_name(), "Cher");
    }
}
