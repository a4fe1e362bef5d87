use price_sleuth::config::{Config, SimulationConfig};
use price_sleuth::model::MS_PER_HOUR;
use price_sleuth::simulation::TIMEFRAME_LABELS;
use price_sleuth::{AppError, AssetCatalog, AssetProfile, DriftDirection, PriceService};
use rand::rngs::StdRng;
use rand::SeedableRng;

const NOW: i64 = 1_700_000_000_000;

#[test]
fn prediction_table_chains_history_forecast_and_buckets() {
    let mut service = PriceService::seeded(21);
    let table = service.prediction_table("bitcoin", NOW).unwrap();

    assert_eq!(table.asset_id, "bitcoin");
    assert_eq!(table.history.len(), 720);
    assert_eq!(table.forecast.len(), 168);
    assert_eq!(
        table.forecast[0].timestamp,
        table.history.last().unwrap().timestamp + MS_PER_HOUR
    );
    assert!((table.last_known_price - table.history[719].price).abs() < f64::EPSILON);

    let labels: Vec<&str> = table.buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, TIMEFRAME_LABELS.to_vec());
    assert!(table.buckets[0].mean_price > 0.0);
    assert!(table.buckets[1].mean_price > 0.0);
    // A one-week horizon never reaches the 29-day cutoff.
    assert_eq!(table.buckets[2].mean_price, 0.0);
    assert_eq!(table.buckets[2].percent_change, 0.0);
}

#[test]
fn month_horizon_fills_every_bucket() {
    let config = Config::from_toml_str("[simulation]\nhorizon_hours = 720\nseed = 4").unwrap();
    let mut service = PriceService::from_config(&config).unwrap();
    let table = service.prediction_table("solana", NOW).unwrap();
    assert_eq!(table.forecast.len(), 720);
    assert!(table.buckets.iter().all(|b| b.mean_price > 0.0));
    // Upward drift compounds to ~1.4x over 29+ days.
    assert!(table.buckets[2].percent_change > 0.0);
}

#[test]
fn same_seed_gives_identical_tables() {
    let a = PriceService::seeded(9).prediction_table("cardano", NOW).unwrap();
    let b = PriceService::seeded(9).prediction_table("cardano", NOW).unwrap();
    assert_eq!(a.history, b.history);
    assert_eq!(a.forecast, b.forecast);
    assert_eq!(a.buckets, b.buckets);
}

#[test]
fn config_overrides_reach_the_generator() {
    let config = Config::from_toml_str(
        r#"
[simulation]
seed = 1

[[assets]]
id = "dogecoin"
base_price = 1000.0
drift = "up"
"#,
    )
    .unwrap();
    let mut service = PriceService::from_config(&config).unwrap();
    let history = service.generate_history_at("dogecoin", 24, NOW);
    assert!(history.iter().all(|p| p.price > 850.0 && p.price < 1150.0));
}

#[test]
fn generate_history_uses_configured_window() {
    let simulation = SimulationConfig {
        history_hours: 48,
        horizon_hours: 12,
        seed: None,
    };
    let mut service =
        PriceService::new(AssetCatalog::builtin(), simulation, StdRng::seed_from_u64(2));
    let history = service.generate_history("ethereum");
    assert_eq!(history.len(), 48);
    let forecast = service.generate_forecast(&history, "ethereum").unwrap();
    assert_eq!(forecast.len(), 12);
}

#[test]
fn forecast_on_empty_history_fails() {
    let mut service = PriceService::seeded(0);
    let err = service.generate_forecast(&[], "bitcoin").unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn injected_catalog_profiles_drive_generation() {
    let catalog = AssetCatalog::builtin()
        .with_overrides(&[AssetProfile::new("tether", 1.0, DriftDirection::Down)])
        .unwrap();
    let mut service =
        PriceService::new(catalog, SimulationConfig::default(), StdRng::seed_from_u64(3));
    assert!(service.catalog().is_known("tether"));
    let history = service.generate_history_at("tether", 10, NOW);
    assert!(history.iter().all(|p| p.price > 0.85 && p.price < 1.15));
}

#[test]
fn from_config_rejects_invalid_asset_overrides() {
    let mut config = Config::default();
    config
        .assets
        .push(AssetProfile::new("bitcoin", -5.0, DriftDirection::Up));
    let err = PriceService::from_config(&config).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn prediction_table_serializes_to_json() {
    let mut service = PriceService::seeded(5);
    let table = service.prediction_table("ripple", NOW).unwrap();
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["assetId"], "ripple");
    assert_eq!(json["buckets"].as_array().unwrap().len(), 3);
    assert_eq!(json["buckets"][0]["label"], "24 Hours");
    assert!(json["buckets"][0].get("meanPrice").is_some());
    assert_eq!(json["forecast"][0]["isForecast"], true);
}
