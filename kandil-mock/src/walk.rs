//! Seeded random-walk history generator.
//!
//! Reproduces the shape of the original backend's mock feed: a per-symbol
//! base price, a Gaussian walk whose volatility and cadence depend on the
//! requested window, OHLC noise around each close, and a volume model tied
//! to the size of the day's move. The walk is seeded from `(symbol, days)`,
//! so the same request always yields the same series.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{Duration, Utc};
use kandil_core::{KandilError, OhlcvBar};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::{Decimal, RoundingStrategy};

struct Tier {
    points: u32,
    volatility: f64,
    weekly: bool,
}

/// Cadence and volatility per requested window, as tiered in the original
/// feed: daily bars up to a year, weekly bars beyond, with weekly series
/// capped at their natural point counts.
const fn tier(days: u32) -> Tier {
    match days {
        0..=7 => Tier {
            points: days,
            volatility: 0.02,
            weekly: false,
        },
        8..=30 => Tier {
            points: days,
            volatility: 0.015,
            weekly: false,
        },
        31..=90 => Tier {
            points: days,
            volatility: 0.012,
            weekly: false,
        },
        91..=180 => Tier {
            points: days,
            volatility: 0.011,
            weekly: false,
        },
        181..=365 => Tier {
            points: days,
            volatility: 0.01,
            weekly: false,
        },
        366..=730 => Tier {
            points: min(days / 7, 104),
            volatility: 0.025,
            weekly: true,
        },
        731..=1095 => Tier {
            points: min(days / 7, 156),
            volatility: 0.03,
            weekly: true,
        },
        _ => Tier {
            points: min(days / 7, 260),
            volatility: 0.035,
            weekly: true,
        },
    }
}

const fn min(a: u32, b: u32) -> u32 {
    if a < b { a } else { b }
}

fn base_price(symbol: &str) -> f64 {
    match symbol {
        "AAPL" | "JPM" => 150.0,
        "MSFT" | "META" => 300.0,
        "GOOGL" => 2800.0,
        "AMZN" => 3300.0,
        "TSLA" => 800.0,
        "NVDA" => 400.0,
        "NFLX" => 500.0,
        "JNJ" => 170.0,
        "V" => 250.0,
        "PG" => 140.0,
        _ => 100.0,
    }
}

fn seed(symbol: &str, days: u32) -> u64 {
    let mut hasher = DefaultHasher::new();
    symbol.hash(&mut hasher);
    days.hash(&mut hasher);
    hasher.finish()
}

/// Standard normal via the 12-uniform sum; bounded in [-6, 6], which keeps
/// intra-bar noise factors strictly positive.
fn gauss(rng: &mut StdRng) -> f64 {
    (0..12).map(|_| rng.random::<f64>()).sum::<f64>() - 6.0
}

fn dec2(v: f64) -> Result<Decimal, KandilError> {
    Decimal::from_f64_retain(v)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| KandilError::data(format!("non-finite generated price: {v}")))
}

/// Generate a deterministic OHLCV walk for `symbol` over a `days` window.
///
/// Daily cadence up to 365 days, weekly beyond; the series ends at today's
/// date and is returned in ascending date order. Prices are floored at 10%
/// of the symbol's base price and rounded to 2 decimal places; windows
/// longer than a year carry a slight upward drift.
///
/// # Errors
/// Returns [`KandilError::Data`] if a generated price was non-finite,
/// which indicates a bug in the generator parameters.
pub fn generate_history(symbol: &str, days: u32) -> Result<Vec<OhlcvBar>, KandilError> {
    let Tier {
        points,
        volatility,
        weekly,
    } = tier(days);
    let mut rng = StdRng::seed_from_u64(seed(symbol, days));

    let base = base_price(symbol);
    let mut price = base;
    let end = Utc::now().date_naive();
    let intrabar = volatility * if weekly { 0.3 } else { 0.5 };

    let mut out = Vec::with_capacity(points as usize);
    for i in 0..points {
        let back = i64::from(points - i);
        let date = if weekly {
            end - Duration::weeks(back)
        } else {
            end - Duration::days(back)
        };

        let mut change = gauss(&mut rng) * volatility;
        if days > 365 {
            // slight upward drift for multi-year windows
            change += 0.0005;
        }
        price = (price * (1.0 + change)).max(base * 0.1);

        let open = price * (1.0 + gauss(&mut rng) * intrabar);
        let high = open.max(price) * (1.0 + (gauss(&mut rng) * intrabar).abs());
        let low = open.min(price) * (1.0 - (gauss(&mut rng) * intrabar).abs());

        let volume_multiplier: f64 = rng.random_range(0.5..2.0);
        let volume = (1_000_000.0 * volume_multiplier * (1.0 + change.abs() * 10.0)) as u64;

        out.push(OhlcvBar {
            date,
            open: dec2(open)?,
            high: dec2(high)?,
            low: dec2(low)?,
            close: dec2(price)?,
            volume,
        });
    }
    Ok(out)
}
