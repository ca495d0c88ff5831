//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod pivots;

pub use indicators::{BollingerBandsIndicator, IndicatorReport, MacdIndicator, TickerReport, Trend};
pub use market::{
    closing_prices, Bar, BarsRequest, Frequency, Interval, NewsItem, OptionChain, OptionContract,
    PeerRecommendation, QuoteSummary, ScreenerQuote, ScreenerResult, StatementKind,
    StatementPeriod,
};
pub use pivots::{PivotClassification, PivotLevel, PivotPosition, PivotReport, PivotSet};
