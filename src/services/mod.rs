//! External collaborators: market data providers and symbol handling

pub mod market_data;
pub mod ticker;
pub mod yahoo;

pub use market_data::{MarketDataProvider, ProviderError};
pub use ticker::normalize_ticker;
