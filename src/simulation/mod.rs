pub mod forecast;
pub mod series;
pub mod timeframe;

pub use forecast::{generate_forecast, DEFAULT_HORIZON_HOURS};
pub use series::{generate_history, DEFAULT_HISTORY_HOURS};
pub use timeframe::{aggregate, TIMEFRAME_LABELS};
