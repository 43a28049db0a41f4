use crate::error::AnalyticsError;
use core_types::Asset;
use std::cmp::Ordering;

/// The two display rows of the "Top Performing Assets" grid, in reading
/// order. `primary` holds the first ceil(n/2) ranked assets, `secondary`
/// the remainder; concatenated they reproduce the ranked list exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRows {
    pub primary: Vec<Asset>,
    pub secondary: Vec<Asset>,
}

/// Ranks assets by one-year return and keeps the best `n`.
///
/// The sort is descending and stable: assets with equal `roi_1y` keep their
/// relative order from the input. That tie-break is a deliberate policy, not
/// an accident of the sort implementation.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidArgument` when `n` is zero. An empty
/// input is not an error; it simply yields an empty ranking.
pub fn select_top_assets(assets: Vec<Asset>, n: usize) -> Result<Vec<Asset>, AnalyticsError> {
    if n == 0 {
        return Err(AnalyticsError::InvalidArgument(
            "top-asset count must be at least 1".to_string(),
        ));
    }

    let mut ranked = assets;
    // `sort_by` is stable, which is what preserves input order across ties.
    ranked.sort_by(|a, b| b.roi_1y.partial_cmp(&a.roi_1y).unwrap_or(Ordering::Equal));
    ranked.truncate(n);

    Ok(ranked)
}

/// Splits a ranked top-`n` list into the two card rows the grid renders.
///
/// The first ceil(n/2) slots belong to the primary row. When the ranking
/// returned fewer than `n` assets, the primary row fills first and the
/// secondary row is short or empty.
pub fn partition_rows(top: Vec<Asset>, n: usize) -> DisplayRows {
    let cut = n.div_ceil(2).min(top.len());
    let mut primary = top;
    let secondary = primary.split_off(cut);
    DisplayRows { primary, secondary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::AssetClass;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn asset(symbol: &str, roi_1y: Decimal) -> Asset {
        Asset {
            symbol: symbol.to_string(),
            name: format!("{symbol} Holdings"),
            asset_class: AssetClass::Stock,
            current_price: dec!(100.00),
            price_change_24h: dec!(0.50),
            esg_score: dec!(70.0),
            roi_1y,
        }
    }

    fn symbols(assets: &[Asset]) -> Vec<&str> {
        assets.iter().map(|a| a.symbol.as_str()).collect()
    }

    #[test]
    fn output_length_is_min_of_n_and_input() {
        let assets = vec![
            asset("A", dec!(5)),
            asset("B", dec!(2)),
            asset("C", dec!(9)),
        ];
        assert_eq!(select_top_assets(assets.clone(), 2).unwrap().len(), 2);
        assert_eq!(select_top_assets(assets.clone(), 3).unwrap().len(), 3);
        assert_eq!(select_top_assets(assets, 10).unwrap().len(), 3);
    }

    #[test]
    fn ranking_is_descending_by_roi() {
        let assets = vec![
            asset("LOW", dec!(-3.2)),
            asset("HIGH", dec!(41.7)),
            asset("MID", dec!(12.0)),
        ];
        let top = select_top_assets(assets, 3).unwrap();
        assert_eq!(symbols(&top), vec!["HIGH", "MID", "LOW"]);
        for pair in top.windows(2) {
            assert!(pair[0].roi_1y >= pair[1].roi_1y);
        }
    }

    #[test]
    fn ties_keep_input_order() {
        // B and C tie on roi_1y; B came first in the input and must stay first.
        let assets = vec![
            asset("A", dec!(5)),
            asset("B", dec!(10)),
            asset("C", dec!(10)),
            asset("D", dec!(1)),
        ];
        let top = select_top_assets(assets, 3).unwrap();
        assert_eq!(symbols(&top), vec!["B", "C", "A"]);
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        let top = select_top_assets(Vec::new(), 8).unwrap();
        assert!(top.is_empty());
    }

    #[test]
    fn zero_n_is_an_invalid_argument() {
        let assets = vec![asset("A", dec!(5))];
        assert!(matches!(
            select_top_assets(assets, 0),
            Err(AnalyticsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn full_grid_splits_four_and_four() {
        let assets: Vec<Asset> = (0..8)
            .map(|i| asset(&format!("S{i}"), Decimal::from(100 - i)))
            .collect();
        let top = select_top_assets(assets, 8).unwrap();
        let rows = partition_rows(top.clone(), 8);
        assert_eq!(rows.primary.len(), 4);
        assert_eq!(rows.secondary.len(), 4);

        let mut rejoined = rows.primary.clone();
        rejoined.extend(rows.secondary.clone());
        assert_eq!(rejoined, top);
    }

    #[test]
    fn short_ranking_fills_primary_row_first() {
        let assets = vec![
            asset("A", dec!(3)),
            asset("B", dec!(2)),
            asset("C", dec!(1)),
        ];
        let top = select_top_assets(assets, 8).unwrap();
        let rows = partition_rows(top, 8);
        assert_eq!(symbols(&rows.primary), vec!["A", "B", "C"]);
        assert!(rows.secondary.is_empty());
    }

    #[test]
    fn odd_n_puts_the_extra_card_in_the_primary_row() {
        let assets: Vec<Asset> = (0..5)
            .map(|i| asset(&format!("S{i}"), Decimal::from(50 - i)))
            .collect();
        let rows = partition_rows(assets, 5);
        assert_eq!(rows.primary.len(), 3);
        assert_eq!(rows.secondary.len(), 2);
    }
}
