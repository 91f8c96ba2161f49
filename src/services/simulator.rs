use rand::Rng;

use crate::models::{Asset, AssetType};

/// Per-tick multiplicative volatility. Two tiers only: crypto moves more,
/// everything else shares the calmer regime.
pub const CRYPTO_VOLATILITY: f64 = 0.008;
pub const DEFAULT_VOLATILITY: f64 = 0.003;

/// Max absolute per-tick drift of `change_24h`, in percentage points.
pub const CHANGE_DELTA: f64 = 0.03;

pub fn volatility_for(kind: AssetType) -> f64 {
    if kind == AssetType::Crypto {
        CRYPTO_VOLATILITY
    } else {
        DEFAULT_VOLATILITY
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Advance every asset by one simulation step.
///
/// Price follows a pure multiplicative random walk: the factor is drawn
/// uniformly from `[1 - v, 1 + v]`, so the result stays strictly positive
/// and never moves more than `v` relative to the previous price. There is
/// no drift term and no mean reversion.
///
/// `change_24h` takes an independent additive step in `[-0.03, +0.03]`,
/// rounded to 2 decimals. The walk is intentionally unclamped; over a long
/// session it can wander outside any realistic range.
pub fn apply_tick<R: Rng>(assets: &mut [Asset], rng: &mut R) {
    for asset in assets.iter_mut() {
        let volatility = volatility_for(asset.kind);
        let fluctuation = rng.gen_range(1.0 - volatility..=1.0 + volatility);

        asset.price *= fluctuation;
        asset.change_24h = round2(asset.change_24h + rng.gen_range(-CHANGE_DELTA..=CHANGE_DELTA));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::market_data::seed_assets;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn prices_stay_positive_and_within_volatility_band() {
        let mut assets = seed_assets();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let before: Vec<f64> = assets.iter().map(|a| a.price).collect();
            apply_tick(&mut assets, &mut rng);

            for (asset, old) in assets.iter().zip(&before) {
                assert!(asset.price > 0.0, "{} went non-positive", asset.symbol);

                let ratio = asset.price / old;
                let bound = volatility_for(asset.kind);
                assert!(
                    (ratio - 1.0).abs() <= bound + 1e-12,
                    "{} moved {} against bound {}",
                    asset.symbol,
                    (ratio - 1.0).abs(),
                    bound
                );
            }
        }
    }

    #[test]
    fn crypto_uses_the_wider_band() {
        assert_eq!(volatility_for(AssetType::Crypto), 0.008);
        for kind in [
            AssetType::Fund,
            AssetType::Commodity,
            AssetType::Currency,
            AssetType::Index,
        ] {
            assert_eq!(volatility_for(kind), 0.003);
        }
    }

    #[test]
    fn change_24h_steps_are_bounded_and_two_decimal() {
        let mut assets = seed_assets();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let before: Vec<f64> = assets.iter().map(|a| a.change_24h).collect();
            apply_tick(&mut assets, &mut rng);

            for (asset, old) in assets.iter().zip(&before) {
                let delta = (asset.change_24h - old).abs();
                assert!(delta <= CHANGE_DELTA + 1e-9, "delta {delta} out of range");

                let scaled = asset.change_24h * 100.0;
                assert!(
                    (scaled - scaled.round()).abs() < 1e-9,
                    "{} not rounded to 2 decimals: {}",
                    asset.symbol,
                    asset.change_24h
                );
            }
        }
    }

    #[test]
    fn static_fields_are_never_touched() {
        let mut assets = seed_assets();
        let reference = assets.clone();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            apply_tick(&mut assets, &mut rng);
        }

        for (a, r) in assets.iter().zip(&reference) {
            assert_eq!(a.symbol, r.symbol);
            assert_eq!(a.name, r.name);
            assert_eq!(a.kind, r.kind);
            assert_eq!(a.volume_24h, r.volume_24h);
            assert_eq!(a.description, r.description);
            assert_eq!(a.delay, r.delay);
        }
    }
}
