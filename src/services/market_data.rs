use crate::models::{Asset, AssetType};

fn asset(
    symbol: &str,
    name: &str,
    kind: AssetType,
    price: f64,
    change_24h: f64,
    volume_24h: &str,
    description: &str,
    delay: &str,
) -> Asset {
    Asset {
        symbol: symbol.to_string(),
        name: name.to_string(),
        kind,
        price,
        change_24h,
        volume_24h: volume_24h.to_string(),
        description: description.to_string(),
        delay: delay.to_string(),
    }
}

/// Fixed session universe: 11 instruments across 5 categories. Symbols are
/// unique and act as the join key for alerts; membership never changes at
/// runtime.
pub fn seed_assets() -> Vec<Asset> {
    vec![
        asset(
            "BTCUSD",
            "Bitcoin",
            AssetType::Crypto,
            64250.80,
            2.45,
            "35B",
            "The largest cryptocurrency, highly volatile and popular for day trading.",
            "Real-time",
        ),
        asset(
            "ETHUSD",
            "Ethereum",
            AssetType::Crypto,
            3450.20,
            1.80,
            "18B",
            "Smart-contract platform and second largest crypto by market cap.",
            "Real-time",
        ),
        asset(
            "SOLUSD",
            "Solana",
            AssetType::Crypto,
            145.60,
            -3.20,
            "5B",
            "High-throughput blockchain with strong intraday volatility.",
            "Real-time",
        ),
        asset(
            "XAUUSD",
            "Gold / USD",
            AssetType::Commodity,
            2350.40,
            0.75,
            "150B",
            "Global safe-haven asset, traded for hedging and speculation.",
            "Real-time",
        ),
        asset(
            "WTI_OIL",
            "Crude Oil WTI",
            AssetType::Commodity,
            78.45,
            -1.25,
            "45B",
            "Crude oil, sensitive to geopolitical tension and inventory data.",
            "Real-time",
        ),
        asset(
            "SPY",
            "SPDR S&P 500 ETF",
            AssetType::Fund,
            512.45,
            0.85,
            "80B",
            "Tracks the S&P 500 index with extreme liquidity.",
            "Real-time",
        ),
        asset(
            "QQQ",
            "Invesco QQQ Trust",
            AssetType::Fund,
            435.20,
            1.15,
            "65B",
            "Tech-heavy NASDAQ-100 tracker, a favorite for scalping.",
            "Real-time",
        ),
        asset(
            "IVVB11",
            "iShares S&P 500 (B3)",
            AssetType::Fund,
            285.40,
            0.95,
            "1.2B",
            "Brazilian index fund mirroring the S&P 500.",
            "15 min",
        ),
        asset(
            "USDBRL",
            "USD / BRL",
            AssetType::Currency,
            5.12,
            0.25,
            "1.2T",
            "Dollar against the Brazilian real, the main local parity.",
            "Real-time",
        ),
        asset(
            "EURUSD",
            "EUR / USD",
            AssetType::Currency,
            1.08,
            -0.15,
            "2.5T",
            "The most traded currency pair in the world.",
            "Real-time",
        ),
        asset(
            "IBOV",
            "Ibovespa",
            AssetType::Index,
            128450.0,
            1.15,
            "25B",
            "Flagship equity index of the Brazilian B3 exchange.",
            "15 min",
        ),
    ]
}
