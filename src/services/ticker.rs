//! Ticker symbol normalization

/// US symbols of four or more letters that must not be routed to Borsa Istanbul.
pub const COMMON_US_TICKERS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "TSLA", "NVDA", "AMD", "INTC", "NFLX", "DIS", "PYPL",
    "SHOP", "UBER", "ABNB", "COIN", "RBLX", "SNAP",
];

pub const BIST_SUFFIX: &str = ".IS";

/// Uppercase a user-supplied ticker and infer its exchange suffix
///
/// - symbols that already carry a suffix (`GARAN.IS`, `BRK.B`) are kept
/// - well-known US symbols are kept
/// - anything else of four or more characters is treated as a BIST listing
/// - one to three characters are US symbols
pub fn normalize_ticker(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();

    if upper.contains('.') || COMMON_US_TICKERS.contains(&upper.as_str()) {
        return upper;
    }

    if upper.chars().count() >= 4 {
        return format!("{}{}", upper, BIST_SUFFIX);
    }

    upper
}
