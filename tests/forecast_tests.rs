use price_sleuth::model::price_point::is_strictly_increasing;
use price_sleuth::model::{PricePoint, MS_PER_HOUR};
use price_sleuth::simulation::{generate_forecast, generate_history, DEFAULT_HORIZON_HOURS};
use price_sleuth::{AppError, AssetCatalog};
use rand::rngs::StdRng;
use rand::SeedableRng;

const NOW: i64 = 1_700_000_000_000;

#[test]
fn forecast_continues_from_anchor() {
    let catalog = AssetCatalog::builtin();
    let mut rng = StdRng::seed_from_u64(11);
    let history = generate_history(catalog.profile("ethereum"), 720, NOW, &mut rng);
    let anchor = *history.last().unwrap();

    let forecast =
        generate_forecast(&history, catalog.profile("ethereum"), DEFAULT_HORIZON_HOURS, &mut rng)
            .unwrap();

    assert_eq!(forecast.len(), 168);
    assert_eq!(forecast[0].timestamp, anchor.timestamp + MS_PER_HOUR);
    assert_eq!(forecast[167].timestamp, anchor.timestamp + 168 * MS_PER_HOUR);
    assert!(forecast.iter().all(|p| p.is_forecast));
    assert!(is_strictly_increasing(&forecast));
}

#[test]
fn forecast_prices_stay_within_drift_and_noise_band() {
    let catalog = AssetCatalog::builtin();
    let profile = catalog.profile("bitcoin");
    let history = [PricePoint::historical(NOW, 1_000.0)];
    let mut rng = StdRng::seed_from_u64(5);
    let forecast = generate_forecast(&history, profile, 168, &mut rng).unwrap();

    for (i, p) in forecast.iter().enumerate() {
        let center = 1_000.0 * profile.drift_at(i + 1);
        assert!(p.price >= center * 0.98 - 1e-9);
        assert!(p.price < center * 1.02 + 1e-9);
    }
}

#[test]
fn downward_assets_drift_below_anchor_over_long_horizons() {
    let catalog = AssetCatalog::builtin();
    let history = [PricePoint::historical(NOW, 100.0)];
    let mut rng = StdRng::seed_from_u64(8);
    let forecast = generate_forecast(&history, catalog.profile("ripple"), 2_000, &mut rng).unwrap();
    // 0.9995^2000 ~ 0.37, far outside the +/-2% noise.
    assert!(forecast.last().unwrap().price < 50.0);
}

#[test]
fn empty_history_is_rejected() {
    let catalog = AssetCatalog::builtin();
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate_forecast(&[], catalog.profile("bitcoin"), 168, &mut rng).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn zero_horizon_yields_no_points() {
    let catalog = AssetCatalog::builtin();
    let history = [PricePoint::historical(NOW, 1.0)];
    let mut rng = StdRng::seed_from_u64(0);
    let forecast = generate_forecast(&history, catalog.profile("cardano"), 0, &mut rng).unwrap();
    assert!(forecast.is_empty());
}
