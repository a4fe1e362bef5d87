use rand::Rng;

use crate::error::{AppError, Result};
use crate::model::{AssetProfile, PricePoint, MS_PER_HOUR};

/// 7 days of hourly forecast points.
pub const DEFAULT_HORIZON_HOURS: usize = 7 * 24;

const NOISE_FLOOR: f64 = 0.98;
const NOISE_SPAN: f64 = 0.04;

/// Extrapolate `horizon_hours` points past the last sample of `history`.
///
/// Step `i` (1-based) is priced at `anchor * drift^i * U[0.98, 1.02)`. The
/// drift compounds, so long horizons diverge from the anchor exponentially.
pub fn generate_forecast<R: Rng + ?Sized>(
    history: &[PricePoint],
    profile: &AssetProfile,
    horizon_hours: usize,
    rng: &mut R,
) -> Result<Vec<PricePoint>> {
    let anchor = history.last().ok_or_else(|| {
        AppError::InvalidInput("forecast requires a non-empty price history".to_string())
    })?;

    let drift = profile.drift_direction.hourly_factor();
    let mut compounded = 1.0;
    let mut out = Vec::with_capacity(horizon_hours);
    for step in 1..=horizon_hours {
        compounded *= drift;
        let noise = NOISE_FLOOR + rng.gen::<f64>() * NOISE_SPAN;
        out.push(PricePoint::forecast(
            anchor.timestamp + step as i64 * MS_PER_HOUR,
            anchor.price * compounded * noise,
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DriftDirection;
    use rand::rngs::mock::StepRng;

    #[test]
    fn empty_history_is_invalid_input() {
        let mut rng = StepRng::new(0, 1);
        let profile = AssetProfile::new("t", 1.0, DriftDirection::Up);
        let err = generate_forecast(&[], &profile, 24, &mut rng).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn minimum_noise_tracks_compounded_drift() {
        let mut rng = StepRng::new(0, 0);
        let profile = AssetProfile::new("t", 1.0, DriftDirection::Up);
        let history = [PricePoint::historical(0, 200.0)];
        let pts = generate_forecast(&history, &profile, 3, &mut rng).unwrap();
        for (i, p) in pts.iter().enumerate() {
            let expected = 200.0 * profile.drift_at(i + 1) * 0.98;
            assert!((p.price - expected).abs() < 1e-9);
        }
    }
}
