pub mod asset_catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod service;
pub mod simulation;

pub use asset_catalog::AssetCatalog;
pub use error::AppError;
pub use model::{AssetListing, AssetProfile, DriftDirection, ForecastBucket, PricePoint};
pub use service::{PredictionTable, PriceService};
