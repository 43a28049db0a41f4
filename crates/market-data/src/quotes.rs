use crate::error::MarketDataError;
use core_types::Quote;
use rand::seq::SliceRandom;

/// The quote pool shown in the dashboard's quote card.
pub fn seed_quotes() -> Vec<Quote> {
    [
        (
            "The best time to plant a tree was twenty years ago. The second best time is now.",
            "Chinese proverb",
        ),
        (
            "Someone's sitting in the shade today because someone planted a tree a long time ago.",
            "Warren Buffett",
        ),
        (
            "Price is what you pay. Value is what you get.",
            "Warren Buffett",
        ),
        (
            "We do not inherit the earth from our ancestors; we borrow it from our children.",
            "Native American proverb",
        ),
        (
            "The stock market is a device for transferring money from the impatient to the patient.",
            "Warren Buffett",
        ),
        (
            "Compound interest is the eighth wonder of the world.",
            "Attributed to Albert Einstein",
        ),
        (
            "In the short run the market is a voting machine, but in the long run it is a weighing machine.",
            "Benjamin Graham",
        ),
    ]
    .into_iter()
    .map(|(text, author)| Quote {
        text: text.to_string(),
        author: author.to_string(),
    })
    .collect()
}

/// Draws one quote uniformly from `pool`.
pub fn pick_random(pool: &[Quote]) -> Result<Quote, MarketDataError> {
    pool.choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| MarketDataError::EmptyDataset("quote pool".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picked_quote_is_a_pool_member() {
        let pool = seed_quotes();
        let quote = pick_random(&pool).unwrap();
        assert!(pool.contains(&quote));
    }

    #[test]
    fn empty_pool_is_an_error() {
        assert!(matches!(
            pick_random(&[]),
            Err(MarketDataError::EmptyDataset(_))
        ));
    }
}
