use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a tradable instrument, serialized as the plain label
/// shown on asset cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClass {
    Stock,
    #[serde(rename = "ETF")]
    Etf,
    Crypto,
    Bond,
}

impl AssetClass {
    /// Returns the display label for this class.
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Stock => "Stock",
            AssetClass::Etf => "ETF",
            AssetClass::Crypto => "Crypto",
            AssetClass::Bond => "Bond",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
