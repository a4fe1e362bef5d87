use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const UP_DRIFT_PER_HOUR: f64 = 1.0005;
pub const DOWN_DRIFT_PER_HOUR: f64 = 0.9995;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftDirection {
    Up,
    Down,
}

impl DriftDirection {
    /// Multiplicative drift applied once per forecast hour.
    pub fn hourly_factor(self) -> f64 {
        match self {
            DriftDirection::Up => UP_DRIFT_PER_HOUR,
            DriftDirection::Down => DOWN_DRIFT_PER_HOUR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetProfile {
    pub id: String,
    pub base_price: f64,
    #[serde(rename = "drift")]
    pub drift_direction: DriftDirection,
}

impl AssetProfile {
    pub fn new(id: &str, base_price: f64, drift_direction: DriftDirection) -> Self {
        Self {
            id: id.to_string(),
            base_price,
            drift_direction,
        }
    }

    /// Non-empty id and a finite, positive base price.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "asset profile has an empty id".to_string(),
            ));
        }
        if !(self.base_price > 0.0 && self.base_price.is_finite()) {
            return Err(AppError::InvalidInput(format!(
                "asset '{}' base_price must be a positive number, got {}",
                self.id, self.base_price
            )));
        }
        Ok(())
    }

    /// `drift^step`, compounding from the anchor.
    pub fn drift_at(&self, step: usize) -> f64 {
        self.drift_direction.hourly_factor().powf(step as f64)
    }
}

/// Market listing row shown on the dashboard's asset cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetListing {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    #[serde(rename = "change24h")]
    pub change_24h: f64,
    pub market_cap: f64,
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
    pub icon_url: String,
}

impl AssetListing {
    pub fn is_gaining(&self) -> bool {
        self.change_24h >= 0.0
    }
}
