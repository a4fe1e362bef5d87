use crate::model::{ForecastBucket, PricePoint, MS_PER_DAY};

pub const TIMEFRAME_LABELS: [&str; 3] = ["24 Hours", "1 Week", "1 Month"];

/// Max points averaged per bucket.
const BUCKET_POINTS: usize = 24;

#[derive(Debug, Clone, Copy)]
enum Take {
    Head,
    Tail,
}

/// Bucket a forecast into the fixed prediction-table rows.
///
/// * "24 Hours": `ts < now + 1d`, first 24 matches.
/// * "1 Week": `now + 6d < ts < now + 7d`, first 24 matches.
/// * "1 Month": `ts > now + 29d`, last 24 matches.
///
/// Empty buckets come back as zero rows, so the result always has three rows.
pub fn aggregate(
    forecast: &[PricePoint],
    last_known_price: f64,
    now_ms: i64,
) -> [ForecastBucket; 3] {
    let day = |n: i64| now_ms + n * MS_PER_DAY;

    let next_day = select(forecast, |ts| ts < day(1), Take::Head);
    let one_week = select(forecast, |ts| ts > day(6) && ts < day(7), Take::Head);
    let one_month = select(forecast, |ts| ts > day(29), Take::Tail);

    [
        bucket(TIMEFRAME_LABELS[0], &next_day, last_known_price),
        bucket(TIMEFRAME_LABELS[1], &one_week, last_known_price),
        bucket(TIMEFRAME_LABELS[2], &one_month, last_known_price),
    ]
}

fn select<F>(points: &[PricePoint], keep: F, take: Take) -> Vec<f64>
where
    F: Fn(i64) -> bool,
{
    let matched: Vec<f64> = points
        .iter()
        .filter(|p| keep(p.timestamp))
        .map(|p| p.price)
        .collect();
    match take {
        Take::Head => matched.into_iter().take(BUCKET_POINTS).collect(),
        Take::Tail => {
            let skip = matched.len().saturating_sub(BUCKET_POINTS);
            matched[skip..].to_vec()
        }
    }
}

fn bucket(label: &str, prices: &[f64], last_known_price: f64) -> ForecastBucket {
    if prices.is_empty() {
        return ForecastBucket::empty(label);
    }
    let mean_price = prices.iter().sum::<f64>() / prices.len() as f64;
    ForecastBucket {
        label: label.to_string(),
        mean_price,
        percent_change: percent_change(last_known_price, mean_price),
    }
}

/// `(to - from) / from * 100`, or 0 when `from` is zero.
pub fn percent_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        return 0.0;
    }
    (to - from) / from * 100.0
}
