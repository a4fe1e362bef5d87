pub mod asset;
pub mod bucket;
pub mod price_point;

pub use asset::{AssetListing, AssetProfile, DriftDirection};
pub use bucket::ForecastBucket;
pub use price_point::{PricePoint, MS_PER_DAY, MS_PER_HOUR};
