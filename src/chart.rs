use anyhow::{bail, Result};

use crate::config::parse_interval_ms;
use crate::model::{PricePoint, MS_PER_HOUR};

/// History shown ahead of the forecast in the prediction view.
pub const PREDICTION_LEAD_HOURS: usize = 7 * 24;

const DOMAIN_PADDING: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartRange {
    /// Last N hourly points of history.
    Trailing(usize),
    /// Last week of history followed by the whole forecast.
    Prediction,
}

impl Default for ChartRange {
    fn default() -> Self {
        ChartRange::Trailing(7 * 24)
    }
}

impl ChartRange {
    pub const ONE_DAY: ChartRange = ChartRange::Trailing(24);
    pub const SEVEN_DAYS: ChartRange = ChartRange::Trailing(7 * 24);
    pub const THIRTY_DAYS: ChartRange = ChartRange::Trailing(30 * 24);

    /// Accepts "prediction" or any whole-hour interval such as "1d", "7d", "30d", "12h".
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("prediction") {
            return Ok(ChartRange::Prediction);
        }
        let ms = parse_interval_ms(s)?;
        let hour = MS_PER_HOUR as u64;
        if ms % hour != 0 {
            bail!("chart range '{}' must be a whole number of hours", s);
        }
        Ok(ChartRange::Trailing((ms / hour) as usize))
    }

    pub fn label(&self) -> String {
        match self {
            ChartRange::Prediction => "Prediction".to_string(),
            ChartRange::Trailing(h) if h % 24 == 0 => format!("{}D", h / 24),
            ChartRange::Trailing(h) => format!("{}H", h),
        }
    }
}

/// Points plotted for `range`.
pub fn chart_window(
    history: &[PricePoint],
    forecast: &[PricePoint],
    range: ChartRange,
) -> Vec<PricePoint> {
    match range {
        ChartRange::Trailing(hours) => tail(history, hours).to_vec(),
        ChartRange::Prediction => {
            let mut out = tail(history, PREDICTION_LEAD_HOURS).to_vec();
            out.extend_from_slice(forecast);
            out
        }
    }
}

fn tail(points: &[PricePoint], n: usize) -> &[PricePoint] {
    &points[points.len().saturating_sub(n)..]
}

/// Last price above first price. Needs at least two points.
pub fn is_uptrend(points: &[PricePoint]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => last.price > first.price,
        _ => false,
    }
}

/// Y-axis range with 1% headroom on both sides.
pub fn price_domain(points: &[PricePoint]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let min = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max = points
        .iter()
        .map(|p| p.price)
        .fold(f64::NEG_INFINITY, f64::max);
    Some((min * (1.0 - DOMAIN_PADDING), max * (1.0 + DOMAIN_PADDING)))
}
