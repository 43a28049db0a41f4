use crate::session::ViewState;
use analytics::{partition_rows, select_top_assets, AnalyticsError};
use configuration::settings::{Config, Theme};
use core_types::{Asset, MarketTrend, Quote};
use rust_decimal::Decimal;

/// Everything the dashboard page shows, computed once per request.
///
/// The renderer only interpolates this into markup; every presentation
/// decision (ranking, partition, colors, number formatting) is made here.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub view_state: ViewState,
    pub quote: Quote,
    pub trends: Vec<TrendCard>,
    pub primary_assets: Vec<AssetCard>,
    pub secondary_assets: Vec<AssetCard>,
}

/// One market trend card.
#[derive(Debug, Clone)]
pub struct TrendCard {
    pub title: String,
    pub description: String,
    pub impact: String,
    pub confidence: u8,
    pub impact_color: String,
}

/// One asset card in the top-assets grid, fully formatted.
#[derive(Debug, Clone)]
pub struct AssetCard {
    pub symbol: String,
    pub name: String,
    pub class_label: &'static str,
    pub price: String,
    pub change_24h: String,
    pub change_color: String,
    pub esg: String,
}

/// The placeholder metrics row shown to signed-in users.
#[derive(Debug, Clone)]
pub struct MetricsPanel {
    pub esg_impact: &'static str,
    pub portfolio_value: &'static str,
    pub performance: &'static str,
}

impl MetricsPanel {
    /// The figures the product ships while portfolio accounting is stubbed.
    pub fn placeholder() -> Self {
        Self {
            esg_impact: "High",
            portfolio_value: "$24,680",
            performance: "+12.4%",
        }
    }
}

impl DashboardView {
    /// Assembles the page model from already-fetched collaborator data.
    pub fn assemble(
        view_state: ViewState,
        quote: Quote,
        trends: Vec<MarketTrend>,
        assets: Vec<Asset>,
        config: &Config,
    ) -> Result<Self, AnalyticsError> {
        let theme = &config.theme;

        let trends = trends
            .into_iter()
            .take(config.display.market_trends)
            .map(|t| TrendCard::from_trend(t, theme))
            .collect();

        let top = select_top_assets(assets, config.display.top_assets)?;
        let rows = partition_rows(top, config.display.top_assets);

        Ok(Self {
            view_state,
            quote,
            trends,
            primary_assets: rows
                .primary
                .into_iter()
                .map(|a| AssetCard::from_asset(a, theme))
                .collect(),
            secondary_assets: rows
                .secondary
                .into_iter()
                .map(|a| AssetCard::from_asset(a, theme))
                .collect(),
        })
    }
}

impl TrendCard {
    fn from_trend(trend: MarketTrend, theme: &Theme) -> Self {
        let impact_color = impact_color(&trend.impact, theme).to_string();
        Self {
            title: trend.title,
            description: trend.description,
            impact: trend.impact,
            confidence: trend.confidence,
            impact_color,
        }
    }
}

impl AssetCard {
    fn from_asset(asset: Asset, theme: &Theme) -> Self {
        Self {
            change_color: price_trend_color(asset.price_change_24h, theme).to_string(),
            symbol: asset.symbol,
            name: asset.name,
            class_label: asset.asset_class.label(),
            price: format!("${:.2}", asset.current_price),
            change_24h: format!("{:.2}%", asset.price_change_24h),
            esg: format!("{:.1}/100", asset.esg_score),
        }
    }
}

/// Color for a 24h price figure. Strictly positive changes render in the
/// positive color; zero and negative changes render in the negative color.
pub fn price_trend_color(change_24h: Decimal, theme: &Theme) -> &str {
    if change_24h > Decimal::ZERO {
        &theme.positive
    } else {
        &theme.negative
    }
}

/// Color for a trend's impact label: "positive" anywhere in the label wins,
/// then "negative", otherwise the accent color.
pub fn impact_color<'a>(impact: &str, theme: &'a Theme) -> &'a str {
    let impact = impact.to_lowercase();
    if impact.contains("positive") {
        &theme.positive
    } else if impact.contains("negative") {
        &theme.negative
    } else {
        &theme.accent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::demo_profile;
    use core_types::AssetClass;
    use rust_decimal_macros::dec;

    fn asset(symbol: &str, roi_1y: Decimal, change_24h: Decimal) -> Asset {
        Asset {
            symbol: symbol.to_string(),
            name: format!("{symbol} Inc"),
            asset_class: AssetClass::Stock,
            current_price: dec!(10.00),
            price_change_24h: change_24h,
            esg_score: dec!(50.0),
            roi_1y,
        }
    }

    fn quote() -> Quote {
        Quote {
            text: "Buy land, they are not making it anymore.".to_string(),
            author: "Mark Twain".to_string(),
        }
    }

    #[test]
    fn zero_change_renders_in_the_negative_color() {
        let theme = Theme::default();
        assert_eq!(price_trend_color(dec!(0), &theme), theme.negative);
        assert_eq!(price_trend_color(dec!(-1.5), &theme), theme.negative);
    }

    #[test]
    fn any_positive_change_renders_in_the_positive_color() {
        let theme = Theme::default();
        assert_eq!(price_trend_color(dec!(0.01), &theme), theme.positive);
    }

    #[test]
    fn impact_labels_map_to_palette_colors() {
        let theme = Theme::default();
        assert_eq!(impact_color("Positive for solar", &theme), theme.positive);
        assert_eq!(impact_color("Broadly NEGATIVE", &theme), theme.negative);
        assert_eq!(impact_color("Mixed", &theme), theme.accent);
    }

    #[test]
    fn asset_cards_format_money_and_esg() {
        let theme = Theme::default();
        let card = AssetCard::from_asset(
            Asset {
                current_price: dec!(74.5),
                esg_score: dec!(86),
                price_change_24h: dec!(0.8),
                ..asset("NEE", dec!(11.2), dec!(0.8))
            },
            &theme,
        );
        assert_eq!(card.price, "$74.50");
        assert_eq!(card.change_24h, "0.80%");
        assert_eq!(card.esg, "86.0/100");
        assert_eq!(card.class_label, "Stock");
    }

    #[test]
    fn assemble_partitions_the_grid_and_truncates_trends() {
        let config = Config::default();
        let assets: Vec<Asset> = (0..12)
            .map(|i| asset(&format!("S{i}"), Decimal::from(i), dec!(1)))
            .collect();
        let trends: Vec<MarketTrend> = (0..5)
            .map(|i| MarketTrend {
                title: format!("Trend {i}"),
                description: String::new(),
                impact: "Mixed".to_string(),
                confidence: 50,
            })
            .collect();

        let view = DashboardView::assemble(
            ViewState::Anonymous,
            quote(),
            trends,
            assets,
            &config,
        )
        .unwrap();

        assert_eq!(view.trends.len(), config.display.market_trends);
        assert_eq!(view.primary_assets.len(), 4);
        assert_eq!(view.secondary_assets.len(), 4);
        // Highest roi first: S11 leads the primary row.
        assert_eq!(view.primary_assets[0].symbol, "S11");
    }

    #[test]
    fn assemble_carries_the_view_state_through() {
        let config = Config::default();
        let view = DashboardView::assemble(
            ViewState::Authenticated(demo_profile()),
            quote(),
            Vec::new(),
            Vec::new(),
            &config,
        )
        .unwrap();
        assert!(view.view_state.is_authenticated());
        assert!(view.primary_assets.is_empty());
    }
}
