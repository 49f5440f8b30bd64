use chrono::NaiveDate;
use kandil_core::OhlcvBar;
use rust_decimal::Decimal;

pub fn by_symbol(s: &str) -> Option<Vec<OhlcvBar>> {
    match s {
        "AAPL" => Some(build(vec![
            ("2023-01-02", "140", "142", "139", "141", 10_000_000),
            ("2023-01-03", "141", "143", "140", "142", 11_000_000),
            ("2023-01-04", "142", "144", "140", "141", 9_500_000),
        ])),
        "MSFT" => Some(build(vec![
            ("2023-01-02", "240", "245", "238", "244", 9_000_000),
            ("2023-01-03", "244", "246", "243", "245", 9_500_000),
            ("2023-01-04", "245", "247", "242", "243", 8_800_000),
        ])),
        "GOOGL" => Some(build(vec![
            ("2023-01-02", "100", "110", "95", "105", 5_000_000),
            ("2023-01-03", "105", "112", "102", "110", 5_500_000),
            ("2023-01-04", "110", "113", "106", "108", 5_200_000),
        ])),
        "TSLA" => Some(build(vec![
            ("2023-01-02", "300", "310", "295", "305", 8_000_000),
            ("2023-01-03", "305", "315", "300", "312", 8_500_000),
            ("2023-01-04", "312", "318", "308", "310", 8_200_000),
        ])),
        _ => None,
    }
}

fn build(rows: Vec<(&str, &str, &str, &str, &str, u64)>) -> Vec<OhlcvBar> {
    rows.into_iter()
        .map(|(date, o, h, l, c, v)| OhlcvBar {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            open: Decimal::from_str_exact(o).unwrap(),
            high: Decimal::from_str_exact(h).unwrap(),
            low: Decimal::from_str_exact(l).unwrap(),
            close: Decimal::from_str_exact(c).unwrap(),
            volume: v,
        })
        .collect()
}
