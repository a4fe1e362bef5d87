use serde::{Deserialize, Serialize};

pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// A single hourly price sample. Forecast points carry `is_forecast = true`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub timestamp: i64,
    pub price: f64,
    #[serde(default)]
    pub is_forecast: bool,
}

impl PricePoint {
    pub fn historical(timestamp: i64, price: f64) -> Self {
        Self {
            timestamp,
            price,
            is_forecast: false,
        }
    }

    pub fn forecast(timestamp: i64, price: f64) -> Self {
        Self {
            timestamp,
            price,
            is_forecast: true,
        }
    }
}

/// True when timestamps are strictly increasing across the slice.
pub fn is_strictly_increasing(points: &[PricePoint]) -> bool {
    points.windows(2).all(|w| w[0].timestamp < w[1].timestamp)
}
