use kandil_types::{CATALOGED_WINDOWS, ChartKind, OhlcvBar, range_labels};

#[test]
fn every_cataloged_window_has_its_own_labels() {
    let expected = [
        (7, "1W", "1 Week"),
        (30, "1M", "1 Month"),
        (90, "3M", "3 Months"),
        (180, "6M", "6 Months"),
        (365, "1Y", "1 Year"),
        (730, "2Y", "2 Years"),
        (1095, "3Y", "3 Years"),
        (1825, "5Y", "5 Years"),
    ];
    assert_eq!(CATALOGED_WINDOWS.len(), expected.len());
    for (days, short, long) in expected {
        assert!(CATALOGED_WINDOWS.contains(&days));
        let labels = range_labels(days);
        assert_eq!(labels.short, short);
        assert_eq!(labels.long, long);
    }
}

#[test]
fn uncataloged_windows_fall_back_to_the_month_entry() {
    for days in [0, 1, 14, 29, 31, 364, 10_000] {
        let labels = range_labels(days);
        assert_eq!(labels.short, "1M");
        assert_eq!(labels.long, "1 Month");
    }
}

#[test]
fn chart_kind_labels_match_the_display_contract() {
    assert_eq!(ChartKind::Line.label(), "Line Chart");
    assert_eq!(ChartKind::Area.label(), "Area Chart");
    assert_eq!(ChartKind::Bar.label(), "Bar Chart");
    assert_eq!(ChartKind::Candlestick.label(), "Candlestick Chart");
}

#[test]
fn chart_kind_parses_leniently_and_defaults_to_line() {
    assert_eq!(ChartKind::from_name("line"), ChartKind::Line);
    assert_eq!(ChartKind::from_name("area"), ChartKind::Area);
    assert_eq!(ChartKind::from_name("bar"), ChartKind::Bar);
    assert_eq!(ChartKind::from_name("candlestick"), ChartKind::Candlestick);
    assert_eq!(ChartKind::from_name("heikin-ashi"), ChartKind::Line);
    assert_eq!(ChartKind::default(), ChartKind::Line);
}

#[test]
fn chart_kind_uses_lowercase_wire_names() {
    assert_eq!(serde_json::to_string(&ChartKind::Candlestick).unwrap(), "\"candlestick\"");
    let kind: ChartKind = serde_json::from_str("\"area\"").unwrap();
    assert_eq!(kind, ChartKind::Area);
}

#[test]
fn bars_round_trip_through_json() {
    let json = r#"{
        "date": "2024-03-01",
        "open": "100.25",
        "high": "101.5",
        "low": "99.75",
        "close": "101.0",
        "volume": 1500000
    }"#;
    let bar: OhlcvBar = serde_json::from_str(json).unwrap();
    assert_eq!(bar.volume, 1_500_000);
    let back = serde_json::to_string(&bar).unwrap();
    let again: OhlcvBar = serde_json::from_str(&back).unwrap();
    assert_eq!(bar, again);
}
