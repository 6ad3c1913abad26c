mod common;

use analysis_core::{AnalysisError, Recommendation, build_report};
use chrono::{TimeZone, Utc};
use common::{daily_series, overbought_uptrend};
use market_data::models::{market::Market, timeframe::Timeframe};

fn as_of() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn percent_change_is_exact() {
    let series = daily_series(&[100.0, 105.0]);
    let report = build_report("TEST", Market::Us, &series, Timeframe::daily(), as_of()).unwrap();

    assert_eq!(report.change_percent, 5.0);
    assert_eq!(report.current_price, 105.0);
    assert_eq!(report.volume, 1010);
    assert_eq!(report.timestamp, as_of());
    // Two rising closes: the only vote cast is the MACD family's buy.
    assert_eq!(report.recommendation, Recommendation::Buy);
}

#[test]
fn empty_series_is_a_hard_failure() {
    let series = daily_series(&[]);
    let err = build_report("TEST", Market::Us, &series, Timeframe::daily(), as_of()).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptySeries));
}

#[test]
fn single_bar_cannot_produce_a_percent_change() {
    let series = daily_series(&[100.0]);
    let err = build_report("TEST", Market::Us, &series, Timeframe::daily(), as_of()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::InsufficientData { needed: 2, got: 1 }
    ));
}

#[test]
fn zero_previous_close_faults_instead_of_returning_infinity() {
    let series = daily_series(&[0.0, 10.0]);
    let err = build_report("TEST", Market::Us, &series, Timeframe::daily(), as_of()).unwrap_err();
    assert!(matches!(err, AnalysisError::UndefinedArithmetic(_)));
}

#[test]
fn intraday_resampling_request_faults() {
    let series = daily_series(&[100.0, 101.0, 102.0]);
    let err = build_report(
        "TEST",
        Market::Us,
        &series,
        Timeframe::minutes(5).unwrap(),
        as_of(),
    )
    .unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedTimeframe { .. }));
}

#[test]
fn overbought_uptrend_is_never_a_buy() {
    let series = overbought_uptrend();
    let report = build_report("TEST", Market::Us, &series, Timeframe::daily(), as_of()).unwrap();

    // Fourteen straight gains pin the RSI to its limit.
    assert_eq!(report.indicators.rsi, Some(100.0));
    assert!(report.indicators.sma_50.unwrap() < report.current_price);
    assert!(report.indicators.sma_50.unwrap() > report.indicators.sma_200.unwrap());
    // Momentum is fading: line still positive, histogram already negative,
    // so the MACD family abstains and the RSI sell ties the SMA buy.
    assert!(report.indicators.macd.macd.unwrap() > 0.0);
    assert!(report.indicators.macd.histogram.unwrap() < 0.0);
    assert_ne!(report.recommendation, Recommendation::Buy);
    assert_eq!(report.recommendation, Recommendation::Hold);
    assert!(report.analysis_summary.contains("overbought"));
}

#[test]
fn weekly_report_aggregates_before_analyzing() {
    // 15 consecutive calendar days starting Monday 2023-01-02 span 3 weeks.
    let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
    let series = daily_series(&closes);
    let report = build_report("TEST", Market::Us, &series, Timeframe::weekly(), as_of()).unwrap();

    assert_eq!(report.chart_data.dates.len(), 3);
    assert_eq!(report.chart_data.dates[0], "2023-01-02");
    assert_eq!(report.chart_data.dates[1], "2023-01-09");
    assert_eq!(report.chart_data.timeframe, Timeframe::weekly());
    assert_eq!(report.chart_data.rsi.len(), 3);
    // Week closes: Sunday bars at indices 6 and 13, final Monday bar at 14.
    assert_eq!(report.chart_data.prices, vec![106.0, 113.0, 114.0]);
}

#[test]
fn absent_indicator_fields_serialize_as_null() {
    let series = daily_series(&[100.0, 101.0, 102.0]);
    let report = build_report("TEST", Market::Us, &series, Timeframe::daily(), as_of()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["indicators"]["sma_50"].is_null());
    assert!(json["indicators"]["sma_200"].is_null());
    assert!(json["indicators"]["rsi"].is_null());
    assert!(json["indicators"]["macd"]["macd"].is_number());
    assert_eq!(json["market"], "US");
    assert_eq!(json["chart_data"]["timeframe"], "daily");
    assert_eq!(json["recommendation"], "buy");
    for value in json["chart_data"]["rsi"].as_array().unwrap() {
        assert!(value.is_number());
    }
}
