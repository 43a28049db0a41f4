use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("The provider has no data for {0}")]
    EmptyDataset(String),

    #[error("The provider returned malformed data: {0}")]
    InvalidData(String),
}
