use serde::Serialize;

use crate::models::Asset;

pub const CURRENCIES: [&str; 6] = ["USD", "BRL", "EUR", "GBP", "JPY", "INR"];

#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub rate: f64,
    pub result: f64,
}

/// Units of `code` per 1 USD. BRL and EUR come from the live simulated
/// pairs (USDBRL quotes BRL per USD directly; EURUSD quotes USD per EUR,
/// hence the inversion); the remaining currencies are fixed mock rates.
fn usd_rate(assets: &[Asset], code: &str) -> Option<f64> {
    let pair = |symbol: &str| assets.iter().find(|a| a.symbol == symbol).map(|a| a.price);

    match code {
        "USD" => Some(1.0),
        "BRL" => Some(pair("USDBRL").unwrap_or(5.12)),
        "EUR" => Some(1.0 / pair("EURUSD").unwrap_or(1.08)),
        "GBP" => Some(0.79),
        "JPY" => Some(156.40),
        "INR" => Some(83.30),
        _ => None,
    }
}

/// Cross-rate conversion through USD. Unknown currency codes degrade to a
/// rate of 1 rather than erroring.
pub fn convert(assets: &[Asset], amount: f64, from: &str, to: &str) -> Conversion {
    let from = from.to_uppercase();
    let to = to.to_uppercase();

    let rate = match (usd_rate(assets, &from), usd_rate(assets, &to)) {
        (Some(f), Some(t)) => t / f,
        _ => 1.0,
    };

    Conversion {
        amount,
        from,
        to,
        rate,
        result: amount * rate,
    }
}
