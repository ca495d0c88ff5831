//! Unit tests for vendor-agnostic market models

use serde_json::json;
use tickerlens::models::market::{
    closing_prices, raw_number, Bar, Interval, QuoteSummary, StatementKind,
};

use crate::stub_provider::day;

#[test]
fn test_closing_prices_drop_gaps() {
    let mut gap = Bar::new(day(1));
    gap.close = None;
    let mut bad = Bar::new(day(2));
    bad.close = Some(f64::NAN);

    let bars = vec![
        Bar::new(day(0)).with_ohlc(1.0, 1.0, 1.0, 10.0),
        gap,
        bad,
        Bar::new(day(3)).with_ohlc(1.0, 1.0, 1.0, 11.0),
    ];
    assert_eq!(closing_prices(&bars), vec![10.0, 11.0]);
}

#[test]
fn test_interval_parsing() {
    assert_eq!("1wk".parse::<Interval>().unwrap(), Interval::OneWeek);
    assert_eq!("90m".parse::<Interval>().unwrap().to_string(), "90m");
    assert!("2h".parse::<Interval>().is_err());
    assert_eq!(Interval::default(), Interval::OneDay);
}

#[test]
fn test_quote_summary_accessors() {
    let modules = json!({
        "summaryDetail": {
            "trailingPE": { "raw": 28.5, "fmt": "28.50" },
            "marketCap": 3.0e12,
            "beta": null
        },
        "summaryProfile": { "sector": "Technology" },
        "fundOwnership": { "ownershipList": [{ "organization": "Fund A" }] },
        "price": null
    });
    let summary = QuoteSummary::new(modules.as_object().unwrap().clone());

    assert_eq!(summary.number("summaryDetail", &["trailingPE"]), Some(28.5));
    assert_eq!(summary.number("summaryDetail", &["marketCap"]), Some(3.0e12));
    assert_eq!(summary.number("summaryDetail", &["beta"]), None);
    assert_eq!(summary.text("summaryProfile", &["sector"]).as_deref(), Some("Technology"));
    assert_eq!(summary.list("fundOwnership", &["ownershipList"]).len(), 1);
    assert!(summary.list("institutionOwnership", &["ownershipList"]).is_empty());
    assert!(summary.module("price").is_none());
}

#[test]
fn test_raw_number_shapes() {
    assert_eq!(raw_number(&json!(4)), Some(4.0));
    assert_eq!(raw_number(&json!({ "raw": 1.5 })), Some(1.5));
    assert_eq!(raw_number(&json!("1.5")), None);
}

#[test]
fn test_statement_headers_match_fields() {
    for kind in [StatementKind::Income, StatementKind::Balance, StatementKind::Cashflow] {
        assert_eq!(kind.header().len(), kind.fields().len() + 1);
        assert_eq!(kind.header()[0], "Date");
    }
}
