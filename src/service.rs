use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::asset_catalog::AssetCatalog;
use crate::config::{Config, SimulationConfig};
use crate::error::Result;
use crate::model::{ForecastBucket, PricePoint};
use crate::simulation::{aggregate, generate_forecast, generate_history};

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// History, forecast and the derived prediction rows for one asset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionTable {
    pub asset_id: String,
    pub generated_at_ms: i64,
    pub last_known_price: f64,
    pub history: Vec<PricePoint>,
    pub forecast: Vec<PricePoint>,
    pub buckets: [ForecastBucket; 3],
}

/// Asset-id facade over the generators. Owns the random source.
#[derive(Debug, Clone)]
pub struct PriceService<R = StdRng> {
    catalog: AssetCatalog,
    simulation: SimulationConfig,
    rng: R,
}

impl PriceService<StdRng> {
    /// Seeded from `simulation.seed` when set, otherwise from OS entropy.
    pub fn from_config(config: &Config) -> Result<Self> {
        let rng = match config.simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let catalog = AssetCatalog::builtin().with_overrides(&config.assets)?;
        Ok(Self::new(catalog, config.simulation.clone(), rng))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(
            AssetCatalog::builtin(),
            SimulationConfig::default(),
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> PriceService<R> {
    pub fn new(catalog: AssetCatalog, simulation: SimulationConfig, rng: R) -> Self {
        Self {
            catalog,
            simulation,
            rng,
        }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// Configured lookback ending at the current wall-clock hour.
    pub fn generate_history(&mut self, asset_id: &str) -> Vec<PricePoint> {
        let hours = self.simulation.history_hours;
        self.generate_history_at(asset_id, hours, now_ms())
    }

    pub fn generate_history_at(
        &mut self,
        asset_id: &str,
        hours: usize,
        now_ms: i64,
    ) -> Vec<PricePoint> {
        if !self.catalog.is_known(asset_id) {
            tracing::debug!(asset = %asset_id, "Unknown asset, using fallback profile");
        }
        let profile = self.catalog.profile(asset_id);
        let points = generate_history(profile, hours, now_ms, &mut self.rng);
        tracing::debug!(asset = %asset_id, points = points.len(), "Generated price history");
        points
    }

    pub fn generate_forecast(
        &mut self,
        history: &[PricePoint],
        asset_id: &str,
    ) -> Result<Vec<PricePoint>> {
        let horizon = self.simulation.horizon_hours;
        self.generate_forecast_with_horizon(history, asset_id, horizon)
    }

    pub fn generate_forecast_with_horizon(
        &mut self,
        history: &[PricePoint],
        asset_id: &str,
        horizon_hours: usize,
    ) -> Result<Vec<PricePoint>> {
        let profile = self.catalog.profile(asset_id);
        let forecast = generate_forecast(history, profile, horizon_hours, &mut self.rng)?;
        tracing::debug!(
            asset = %asset_id,
            horizon = horizon_hours,
            drift = ?profile.drift_direction,
            "Generated forecast"
        );
        Ok(forecast)
    }

    /// History, forecast and buckets in one pass. Percent changes are
    /// relative to the final historical price.
    pub fn prediction_table(&mut self, asset_id: &str, now_ms: i64) -> Result<PredictionTable> {
        let hours = self.simulation.history_hours;
        let history = self.generate_history_at(asset_id, hours, now_ms);
        let forecast = self.generate_forecast(&history, asset_id)?;
        let last_known_price = history.last().map(|p| p.price).unwrap_or(0.0);
        let buckets = aggregate(&forecast, last_known_price, now_ms);
        tracing::info!(
            asset = %asset_id,
            last_known_price,
            day_mean = buckets[0].mean_price,
            "Prediction table ready"
        );
        Ok(PredictionTable {
            asset_id: asset_id.to_string(),
            generated_at_ms: now_ms,
            last_known_price,
            history,
            forecast,
            buckets,
        })
    }
}
