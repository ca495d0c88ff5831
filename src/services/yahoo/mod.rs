//! Yahoo Finance backed market data

pub mod client;
pub mod provider;
pub mod response;

pub use client::YahooClient;
pub use provider::YahooMarketDataProvider;
