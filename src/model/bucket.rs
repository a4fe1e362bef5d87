use serde::{Deserialize, Serialize};

/// One row of the prediction table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastBucket {
    pub label: String,
    pub mean_price: f64,
    pub percent_change: f64,
}

impl ForecastBucket {
    pub fn empty(label: &str) -> Self {
        Self {
            label: label.to_string(),
            mean_price: 0.0,
            percent_change: 0.0,
        }
    }
}
