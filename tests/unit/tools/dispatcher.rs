//! Unit tests for tool dispatch against a stub provider

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{json, Value};
use tickerlens::models::market::{
    Bar, NewsItem, OptionChain, OptionContract, PeerRecommendation, ScreenerQuote,
    ScreenerResult, StatementPeriod,
};
use tickerlens::tools::{list_tools, ToolDispatcher, ToolName};

use crate::stub_provider::{day, daily_bars, rising, StubProvider};

fn dispatcher(provider: StubProvider) -> ToolDispatcher {
    ToolDispatcher::new(Arc::new(provider), 50)
}

async fn call_json(dispatcher: &ToolDispatcher, name: &str, args: Value) -> Value {
    let output = dispatcher.call(name, args).await;
    assert!(!output.is_error, "{} failed: {}", name, output.first_text());
    serde_json::from_str(output.first_text()).unwrap()
}

fn company_summary(price: f64, pe: f64, market_cap: f64) -> Value {
    json!({
        "price": { "shortName": "Apple Inc.", "regularMarketPrice": { "raw": price } },
        "summaryDetail": {
            "trailingPE": { "raw": pe },
            "forwardPE": { "raw": 25.123 },
            "marketCap": { "raw": market_cap },
            "beta": { "raw": 1.2857 },
            "fiftyTwoWeekHigh": { "raw": 199.62 },
            "fiftyTwoWeekLow": { "raw": 164.08 },
            "dividendYield": { "raw": 0.0051 },
            "regularMarketChangePercent": { "raw": 1.23456 }
        },
        "defaultKeyStatistics": {
            "trailingEps": { "raw": 6.42 },
            "priceToBook": { "raw": 45.678 },
            "pegRatio": { "raw": 2.5 }
        },
        "summaryProfile": {
            "sector": "Technology",
            "industry": "Consumer Electronics",
            "website": "https://www.apple.com",
            "longBusinessSummary": "x".repeat(300)
        }
    })
}

#[test]
fn test_catalogue_lists_every_tool() {
    let tools = list_tools();
    assert_eq!(tools.len(), 13);
    let names: Vec<&str> = tools.iter().map(|tool| tool.name.as_str()).collect();
    assert!(names.contains(&"batch_technical_analysis"));
    assert!(names.contains(&"get_pivot_points"));

    let json = serde_json::to_value(&tools[0]).unwrap();
    assert_eq!(json["inputSchema"]["type"], "object");
    for tool in ToolName::ALL {
        assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
    }
}

#[tokio::test]
async fn test_unknown_tool_is_error_output() {
    let output = dispatcher(StubProvider::new())
        .call("get_weather", json!({}))
        .await;
    assert!(output.is_error);
    assert_eq!(output.first_text(), "Error: Unknown tool: get_weather");

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["isError"], true);
    assert_eq!(json["content"][0]["type"], "text");
}

#[tokio::test]
async fn test_missing_arguments_are_error_output() {
    let output = dispatcher(StubProvider::new())
        .call("get_company_info", Value::Null)
        .await;
    assert!(output.is_error);
    assert!(output.first_text().starts_with("Error: Invalid arguments:"));
}

#[tokio::test]
async fn test_provider_failure_is_error_output() {
    let output = dispatcher(StubProvider::new())
        .call("get_company_info", json!({ "ticker": "AAPL" }))
        .await;
    assert!(output.is_error);
    assert_eq!(output.first_text(), "Error: not found: AAPL");
}

#[tokio::test]
async fn test_market_data_rows() {
    let dispatcher = dispatcher(StubProvider::new().with_closes("AAPL", &[10.123, 11.0]));
    let rows = call_json(
        &dispatcher,
        "get_market_data",
        json!({ "ticker": "aapl", "period": "5d" }),
    )
    .await;

    assert_eq!(rows[0], json!(["D", "O", "H", "L", "C", "V", "AC"]));
    assert_eq!(
        rows[1],
        json!(["2024-01-01T14:30:00.000Z", 10.12, 11.12, 9.12, 10.12, 1000, 10.12])
    );
    assert_eq!(rows.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_market_data_validates_interval_and_empty_history() {
    let dispatcher = dispatcher(StubProvider::new().with_bars("AAPL", Vec::new()));

    let bad = dispatcher
        .call("get_market_data", json!({ "ticker": "AAPL", "interval": "7m" }))
        .await;
    assert!(bad.is_error);
    assert!(bad.first_text().contains("unsupported interval"));

    let empty = dispatcher
        .call("get_market_data", json!({ "ticker": "AAPL" }))
        .await;
    assert_eq!(empty.first_text(), "No data found");
}

#[tokio::test]
async fn test_financials_most_recent_first() {
    let period = |n: i64, revenue: f64| StatementPeriod {
        date: day(n),
        values: BTreeMap::from([
            ("totalRevenue".to_string(), revenue),
            ("netIncome".to_string(), revenue / 4.0),
        ]),
    };
    let provider = StubProvider::new().with_statements(vec![period(0, 100.0), period(365, 120.0)]);
    let rows = call_json(
        &dispatcher(provider),
        "get_financials",
        json!({ "ticker": "AAPL", "type": "income", "frequency": "quarterly" }),
    )
    .await;

    assert_eq!(rows[0], json!(["Date", "Rev", "GrPrf", "NetInc", "OpExp"]));
    assert_eq!(rows[1][1], 120.0);
    assert_eq!(rows[1][2], Value::Null);
    assert_eq!(rows[1][3], 30.0);
    assert_eq!(rows[2][1], 100.0);
}

#[tokio::test]
async fn test_company_info_payload() {
    let provider = StubProvider::new().with_summary("AAPL", company_summary(189.5, 29.876, 2.9e12));
    let info = call_json(&dispatcher(provider), "get_company_info", json!({ "ticker": "AAPL" })).await;

    assert_eq!(info["name"], "Apple Inc.");
    assert_eq!(info["sec"], "Technology");
    assert_eq!(info["pe"], 29.88);
    assert_eq!(info["fPe"], 25.12);
    assert_eq!(info["beta"], 1.29);
    assert_eq!(info["divY"], 0.01);
    assert_eq!(info["mc"], 2.9e12);
    let desc = info["desc"].as_str().unwrap();
    assert_eq!(desc.len(), 203);
    assert!(desc.ends_with("..."));
}

#[tokio::test]
async fn test_holders_payload() {
    let provider = StubProvider::new().with_summary(
        "AAPL",
        json!({
            "majorHoldersBreakdown": {
                "insidersPercentHeld": { "raw": 0.0712 },
                "institutionsPercentHeld": { "raw": 0.61456 }
            },
            "institutionOwnership": {
                "ownershipList": (0..7).map(|i| json!({
                    "organization": format!("Inst {}", i),
                    "pctHeld": { "raw": 0.0123 },
                    "position": { "raw": 1000 + i }
                })).collect::<Vec<_>>()
            }
        }),
    );
    let holders = call_json(&dispatcher(provider), "get_holders", json!({ "ticker": "AAPL" })).await;

    assert_eq!(holders["major"], json!([["Insiders", 0.07], ["Inst", 0.61]]));
    assert_eq!(holders["inst"].as_array().unwrap().len(), 5);
    assert_eq!(holders["inst"][0], json!(["Inst 0", 0.01, 1000.0]));
    assert_eq!(holders["fund"], json!([]));
}

#[tokio::test]
async fn test_extra_data_variants() {
    let provider = StubProvider::new()
        .with_news(vec![NewsItem {
            title: "Earnings beat".to_string(),
            link: "https://example.com/a".to_string(),
            provider_publish_time: Some(1_704_067_200),
        }])
        .with_option_chain(OptionChain {
            expiration_date: Some(day(30)),
            calls: (0..8)
                .map(|i| OptionContract {
                    strike: 100.0 + i as f64,
                    last_price: Some(1.234),
                    volume: Some(10),
                })
                .collect(),
            puts: Vec::new(),
        })
        .with_summary(
            "AAPL",
            json!({
                "calendarEvents": { "exDividendDate": { "raw": 1704067200 } },
                "recommendationTrend": { "trend": [{ "period": "0m", "strongBuy": 10 }] },
                "financialData": { "targetMeanPrice": { "raw": 210.5 } }
            }),
        );
    let dispatcher = dispatcher(provider);

    let news = call_json(&dispatcher, "get_extra_data", json!({ "ticker": "AAPL", "type": "news" })).await;
    assert_eq!(
        news,
        json!([["Earnings beat", "https://example.com/a", "2024-01-01T00:00:00.000Z"]])
    );

    let options = call_json(&dispatcher, "get_extra_data", json!({ "ticker": "AAPL", "type": "options" })).await;
    assert_eq!(options["calls"].as_array().unwrap().len(), 5);
    assert_eq!(options["calls"][0], json!([100.0, 1.234, 10]));
    assert_eq!(options["exp"], "2024-01-31T14:30:00.000Z");

    let events = call_json(&dispatcher, "get_extra_data", json!({ "ticker": "AAPL", "type": "events" })).await;
    assert_eq!(events["exDividendDate"]["raw"], 1704067200);

    let recs = call_json(
        &dispatcher,
        "get_extra_data",
        json!({ "ticker": "AAPL", "type": "recommendations" }),
    )
    .await;
    assert_eq!(recs["rec"]["strongBuy"], 10);
    assert_eq!(recs["target"]["mean"], 210.5);

    let unknown = dispatcher
        .call("get_extra_data", json!({ "ticker": "AAPL", "type": "splits" }))
        .await;
    assert!(!unknown.is_error);
    assert_eq!(unknown.first_text(), "Unknown type");
}

#[tokio::test]
async fn test_technical_analysis_report_and_short_history() {
    let provider = StubProvider::new()
        .with_closes("AAPL", &[100.0; 25])
        .with_closes("THYAO.IS", &[100.0; 19]);
    let dispatcher = dispatcher(provider);

    let report = call_json(&dispatcher, "get_technical_analysis", json!({ "ticker": "AAPL" })).await;
    assert_eq!(report["sma_20"], 100.0);
    assert_eq!(report["rsi_14"], 100.0);
    assert_eq!(report["trend"], "neutral");
    assert!(report.get("sma_50").is_none());

    let short = dispatcher
        .call("get_technical_analysis", json!({ "ticker": "thyao", "period": "1mo" }))
        .await;
    assert!(!short.is_error);
    assert_eq!(short.first_text(), "Insufficient data for technical analysis");
}

#[tokio::test]
async fn test_pivot_points_use_previous_session() {
    let bars = vec![
        Bar::new(day(0)).with_ohlc(95.0, 96.0, 94.0, 95.0),
        Bar::new(day(1)).with_ohlc(100.0, 110.0, 90.0, 100.0),
        Bar::new(day(2)).with_ohlc(104.0, 106.0, 103.0, 105.0),
    ];
    let dispatcher = dispatcher(StubProvider::new().with_bars("AAPL", bars));

    let pivots = call_json(&dispatcher, "get_pivot_points", json!({ "ticker": "AAPL" })).await;
    assert_eq!(pivots["pp"], 100.0);
    assert_eq!(pivots["r1"], 110.0);
    assert_eq!(pivots["s3"], 70.0);
    assert_eq!(pivots["current_price"], 105.0);
    assert_eq!(pivots["position"], "above_pivot");
    assert_eq!(pivots["nearest_resistance"], "R1");
    assert_eq!(pivots["nearest_support"], "S1");
    assert_eq!(pivots["reference_date"], "2024-01-02");
}

#[tokio::test]
async fn test_pivot_current_price_is_rounded() {
    let bars = vec![
        Bar::new(day(1)).with_ohlc(100.0, 110.0, 90.0, 100.0),
        Bar::new(day(2)).with_ohlc(104.0, 106.0, 103.0, 105.456789),
    ];
    let dispatcher = dispatcher(StubProvider::new().with_bars("AAPL", bars));

    let pivots = call_json(&dispatcher, "get_pivot_points", json!({ "ticker": "AAPL" })).await;
    assert_eq!(pivots["current_price"], 105.46);
    assert_eq!(pivots["position"], "above_pivot");
}

#[tokio::test]
async fn test_pivot_points_need_two_complete_bars() {
    let mut partial = Bar::new(day(1));
    partial.close = Some(101.0);
    let bars = vec![daily_bars(&[100.0]).remove(0), partial];
    let output = dispatcher(StubProvider::new().with_bars("AAPL", bars))
        .call("get_pivot_points", json!({ "ticker": "AAPL" }))
        .await;
    assert_eq!(output.first_text(), "Insufficient data for pivot points");
}

#[tokio::test]
async fn test_batch_company_info_price_fallback() {
    let mut no_detail_price = company_summary(0.0, 10.0, 1e9);
    no_detail_price["summaryDetail"]["regularMarketPrice"] = json!({ "raw": 0.0 });
    no_detail_price["price"]["regularMarketPrice"] = json!({ "raw": 42.424 });

    let provider = StubProvider::new()
        .with_summary("AAPL", company_summary(189.5, 29.876, 2.9e12))
        .with_summary("MSFT", no_detail_price);
    let payload = call_json(
        &dispatcher(provider),
        "batch_company_info",
        json!({ "tickers": ["AAPL", "MSFT", "ZZZZ"] }),
    )
    .await;

    assert_eq!(payload["total"], 3);
    assert_eq!(payload["successful"], 2);
    assert_eq!(payload["failed"], 1);
    assert_eq!(payload["data"][0]["price"], 189.5);
    assert_eq!(payload["data"][0]["change"], 1.23);
    assert_eq!(payload["data"][1]["ticker"], "MSFT");
    assert_eq!(payload["data"][1]["price"], 42.42);
}

#[tokio::test]
async fn test_filter_stocks_criteria() {
    let provider = StubProvider::new()
        .with_summary("AAPL", company_summary(189.5, 29.0, 2.9e12))
        .with_summary("AMD", company_summary(120.0, 45.0, 2.0e11))
        .with_summary("IBM", company_summary(150.0, 18.0, 1.4e11));
    let payload = call_json(
        &dispatcher(provider),
        "filter_stocks",
        json!({
            "tickers": ["AAPL", "AMD", "IBM", "XYZ"],
            "criteria": { "max_pe": 30, "min_mc": 150 }
        }),
    )
    .await;

    assert_eq!(payload["total_checked"], 3);
    assert_eq!(payload["matches"], 1);
    assert_eq!(payload["results"][0]["symbol"], "AAPL");
}

#[tokio::test]
async fn test_screener_caps_count() {
    let quotes = (0..60)
        .map(|i| ScreenerQuote {
            symbol: format!("S{}", i),
            regular_market_price: Some(10.0 + i as f64),
            ..ScreenerQuote::default()
        })
        .collect();
    let provider = StubProvider::new().with_screener(ScreenerResult {
        id: "most_actives".to_string(),
        title: Some("Most Actives".to_string()),
        quotes,
    });
    let dispatcher = dispatcher(provider);

    let payload = call_json(
        &dispatcher,
        "get_screener",
        json!({ "scrId": "most_actives", "count": 500 }),
    )
    .await;
    assert_eq!(payload["count"], 50);
    assert_eq!(payload["title"], "Most Actives");
    assert_eq!(payload["quotes"][1]["price"], 11.0);

    let defaults = call_json(&dispatcher, "get_screener", json!({})).await;
    assert_eq!(defaults["count"], 10);
}

#[tokio::test]
async fn test_peers_payload() {
    let provider = StubProvider::new().with_peers(vec![PeerRecommendation {
        symbol: "MSFT".to_string(),
        score: 0.29,
    }]);
    let payload = call_json(&dispatcher(provider), "get_peers", json!({ "ticker": "aapl" })).await;
    assert_eq!(payload, json!({ "ticker": "AAPL", "peers": [{ "symbol": "MSFT", "score": 0.29 }] }));
}

#[tokio::test]
async fn test_peer_scores_are_rounded() {
    let provider = StubProvider::new().with_peers(vec![PeerRecommendation {
        symbol: "MSFT".to_string(),
        score: 0.291234,
    }]);
    let payload = call_json(&dispatcher(provider), "get_peers", json!({ "ticker": "AAPL" })).await;
    assert_eq!(payload["peers"][0]["score"], 0.29);
}

#[tokio::test]
async fn test_earnings_payload() {
    let provider = StubProvider::new().with_summary(
        "AAPL",
        json!({
            "calendarEvents": {
                "earnings": {
                    "earningsDate": [{ "raw": 1714680000 }],
                    "earningsAverage": { "raw": 1.504 },
                    "revenueAverage": { "raw": 90.0e9 }
                }
            },
            "earnings": { "earningsChart": { "quarterly": [] } }
        }),
    );
    let payload = call_json(&dispatcher(provider), "get_earnings", json!({ "ticker": "AAPL" })).await;
    assert_eq!(payload["earnings_avg"], 1.5);
    assert_eq!(payload["revenue_avg"], 90.0e9);
    assert_eq!(payload["earnings_chart"], json!({ "quarterly": [] }));
    assert_eq!(payload["financials_chart"], Value::Null);
}
