use rand::Rng;

use crate::model::{AssetProfile, PricePoint, MS_PER_HOUR};

/// 30 days of hourly samples.
pub const DEFAULT_HISTORY_HOURS: usize = 30 * 24;

const NOISE_FLOOR: f64 = 0.95;
const NOISE_SPAN: f64 = 0.10;
const CYCLE_PERIOD: f64 = 30.0;
const CYCLE_AMPLITUDE: f64 = 0.05;

/// Synthesize `hours` hourly samples ending one hour before `now_ms`.
///
/// Each price is `base * U[0.95, 1.05) * (1 + sin(i / 30) * 0.05)`. Adjacent
/// points are independent draws; no smoothing is applied.
pub fn generate_history<R: Rng + ?Sized>(
    profile: &AssetProfile,
    hours: usize,
    now_ms: i64,
    rng: &mut R,
) -> Vec<PricePoint> {
    (0..hours)
        .map(|i| {
            let offset_hours = (hours - i) as i64;
            let timestamp = now_ms - offset_hours * MS_PER_HOUR;
            let noise = NOISE_FLOOR + rng.gen::<f64>() * NOISE_SPAN;
            let cycle = 1.0 + (i as f64 / CYCLE_PERIOD).sin() * CYCLE_AMPLITUDE;
            PricePoint::historical(timestamp, profile.base_price * noise * cycle)
        })
        .collect()
}
