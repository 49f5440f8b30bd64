use chrono::NaiveDate;
use kandil_core::{KandilError, OhlcvBar, compute};
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
}

fn bar(n: u32, open: &str, high: &str, low: &str, close: &str, volume: u64) -> OhlcvBar {
    OhlcvBar::new(day(n), d(open), d(high), d(low), d(close), volume)
}

/// The worked three-bar example: closes [100, 102, 101], returns
/// [2.00, -0.98], volatility ~1.49.
#[test]
fn three_bar_window_matches_reference_values() {
    let bars = vec![
        bar(1, "100", "101", "99", "100", 1_000),
        bar(2, "101", "103", "101", "102", 2_000),
        bar(3, "102", "102", "100", "101", 1_500),
    ];
    let m = compute(&bars).unwrap();

    assert_eq!(m.current_price, d("101"));
    assert_eq!(m.price_change, d("1.00"));
    assert_eq!(m.price_change_percent, Some(d("1.00")));
    assert_eq!(m.window_high, d("103"));
    assert_eq!(m.window_low, d("99"));
    assert_eq!(m.average_volume, 1_500);
    assert_eq!(m.volatility_percent, d("1.49"));
    assert!(m.is_positive);
}

#[test]
fn empty_series_is_an_explicit_error() {
    assert_eq!(compute(&[]), Err(KandilError::EmptySeries));
}

#[test]
fn single_bar_uses_defined_fallbacks_not_nan() {
    let bars = vec![bar(1, "50", "55", "48", "52", 7_777)];
    let m = compute(&bars).unwrap();

    assert_eq!(m.current_price, d("52"));
    assert_eq!(m.price_change, Decimal::ZERO);
    assert_eq!(m.price_change_percent, Some(Decimal::ZERO));
    assert_eq!(m.window_high, d("55"));
    assert_eq!(m.window_low, d("48"));
    assert_eq!(m.average_volume, 7_777);
    assert_eq!(m.volatility_percent, Decimal::ZERO);
    assert!(m.is_positive);
}

#[test]
fn zero_baseline_yields_percent_sentinel() {
    let bars = vec![
        bar(1, "0", "0", "0", "0", 100),
        bar(2, "10", "12", "9", "11", 200),
    ];
    let m = compute(&bars).unwrap();

    assert_eq!(m.price_change, d("11"));
    assert_eq!(m.price_change_percent, None);
    assert!(m.is_positive);
}

#[test]
fn constant_closes_have_zero_change_and_zero_volatility() {
    let bars: Vec<OhlcvBar> = (1..=5)
        .map(|n| bar(n, "20", "21", "19", "20", 1_000 * u64::from(n)))
        .collect();
    let m = compute(&bars).unwrap();

    assert_eq!(m.price_change, Decimal::ZERO);
    assert_eq!(m.price_change_percent, Some(Decimal::ZERO));
    assert_eq!(m.volatility_percent, Decimal::ZERO);
    assert!(m.is_positive);
}

#[test]
fn losing_window_is_not_positive() {
    let bars = vec![
        bar(1, "100", "101", "99", "100", 1_000),
        bar(2, "100", "100", "90", "95", 1_000),
    ];
    let m = compute(&bars).unwrap();

    assert_eq!(m.price_change, d("-5"));
    assert_eq!(m.price_change_percent, Some(d("-5.00")));
    assert!(!m.is_positive);
}

#[test]
fn average_volume_rounds_half_up() {
    // mean of [1, 2] is 1.5 -> rounds to 2
    let bars = vec![
        bar(1, "10", "10", "10", "10", 1),
        bar(2, "10", "10", "10", "10", 2),
    ];
    assert_eq!(compute(&bars).unwrap().average_volume, 2);

    // mean of [1, 1, 2] is 1.33.. -> rounds to 1
    let bars = vec![
        bar(1, "10", "10", "10", "10", 1),
        bar(2, "10", "10", "10", "10", 1),
        bar(3, "10", "10", "10", "10", 2),
    ];
    assert_eq!(compute(&bars).unwrap().average_volume, 1);
}

#[test]
fn unsorted_input_is_normalized_before_picking_endpoints() {
    // Latest date carries close 101, earliest carries 100, regardless of
    // the order the batch arrived in.
    let bars = vec![
        bar(3, "102", "102", "100", "101", 1_500),
        bar(1, "100", "101", "99", "100", 1_000),
        bar(2, "101", "103", "101", "102", 2_000),
    ];
    let m = compute(&bars).unwrap();
    assert_eq!(m.current_price, d("101"));
    assert_eq!(m.price_change, d("1"));
}

#[test]
fn metrics_serialize_with_camel_case_keys_and_null_sentinel() {
    let bars = vec![
        bar(1, "0", "0", "0", "0", 100),
        bar(2, "10", "12", "9", "11", 200),
    ];
    let m = compute(&bars).unwrap();
    let json = serde_json::to_value(&m).unwrap();

    assert!(json.get("currentPrice").is_some());
    assert!(json.get("priceChange").is_some());
    assert!(json.get("windowHigh").is_some());
    assert!(json.get("windowLow").is_some());
    assert!(json.get("averageVolume").is_some());
    assert!(json.get("volatilityPercent").is_some());
    assert!(json.get("isPositive").is_some());
    assert!(json["priceChangePercent"].is_null());
}
