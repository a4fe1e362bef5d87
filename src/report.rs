use chrono::{TimeZone, Utc};

use crate::chart::{is_uptrend, price_domain, ChartRange};
use crate::model::{AssetListing, ForecastBucket, PricePoint};

/// "$57,832.41"
pub fn format_price(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "+2.54%" / "-1.27%"
pub fn format_change(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e12, "T"), (1e9, "B"), (1e6, "M")];
    for (scale, suffix) in UNITS {
        if value.abs() >= scale {
            return format!("${:.2}{}", value / scale, suffix);
        }
    }
    format_price(value)
}

pub fn format_timestamp(ms: i64) -> String {
    Utc.timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ms.to_string())
}

pub fn render_listing(listings: &[AssetListing]) -> String {
    let mut out = format!(
        "{:<14} {:<6} {:>14} {:>9} {:>11} {:>11}\n",
        "Name", "Symbol", "Price", "24h", "Market Cap", "Volume 24h"
    );
    for l in listings {
        out.push_str(&format!(
            "{:<14} {:<6} {:>14} {:>9} {:>11} {:>11}\n",
            l.name,
            l.symbol,
            format_price(l.price),
            format_change(l.change_24h),
            format_compact(l.market_cap),
            format_compact(l.volume_24h),
        ));
    }
    out
}

pub fn render_prediction_table(symbol: &str, buckets: &[ForecastBucket]) -> String {
    let mut out = format!("{} Price Predictions\n", symbol);
    out.push_str(&format!(
        "{:<10} {:>16} {:>10}\n",
        "Timeframe", "Predicted Price", "Change"
    ));
    for b in buckets {
        out.push_str(&format!(
            "{:<10} {:>16} {:>10}\n",
            b.label,
            format_price(b.mean_price),
            format_change(b.percent_change)
        ));
    }
    out
}

pub fn render_chart_summary(symbol: &str, range: ChartRange, points: &[PricePoint]) -> String {
    let (Some(first), Some(last), Some((lo, hi))) =
        (points.first(), points.last(), price_domain(points))
    else {
        return format!("{} {} chart: no data\n", symbol, range.label());
    };
    let forecast_points = points.iter().filter(|p| p.is_forecast).count();
    let trend = if is_uptrend(points) { "up" } else { "down" };
    format!(
        "{} {} chart: {} points ({} forecast), {} -> {}, trend {}, axis {}..{}\n",
        symbol,
        range.label(),
        points.len(),
        forecast_points,
        format_timestamp(first.timestamp),
        format_timestamp(last.timestamp),
        trend,
        format_price(lo),
        format_price(hi),
    )
}
