use crate::error::Result;
use crate::model::{AssetListing, AssetProfile, DriftDirection};

pub const FALLBACK_ASSET_ID: &str = "misc";
pub const FALLBACK_BASE_PRICE: f64 = 0.7;

fn icon_url(slug: &str, symbol: &str) -> String {
    format!(
        "https://cryptologos.cc/logos/{}-{}-logo.png",
        slug,
        symbol.to_ascii_lowercase()
    )
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    symbol: &str,
    icon_slug: &str,
    price: f64,
    change_24h: f64,
    market_cap: f64,
    volume_24h: f64,
) -> AssetListing {
    AssetListing {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        price,
        change_24h,
        market_cap,
        volume_24h,
        icon_url: icon_url(icon_slug, symbol),
    }
}

/// Per-asset simulation profiles plus the mock market listing.
///
/// Lookups never fail: ids with no profile resolve to a low-value asset that
/// drifts down, so callers can feed arbitrary ids straight from user input.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    profiles: Vec<AssetProfile>,
    listings: Vec<AssetListing>,
    fallback: AssetProfile,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AssetCatalog {
    pub fn builtin() -> Self {
        Self {
            profiles: vec![
                AssetProfile::new("bitcoin", 57_000.0, DriftDirection::Up),
                AssetProfile::new("ethereum", 3_100.0, DriftDirection::Down),
                AssetProfile::new("solana", 120.0, DriftDirection::Up),
                AssetProfile::new("binancecoin", 415.0, DriftDirection::Down),
                AssetProfile::new("cardano", 1.25, DriftDirection::Up),
                AssetProfile::new("ripple", 0.7, DriftDirection::Down),
            ],
            listings: vec![
                listing(
                    "bitcoin",
                    "Bitcoin",
                    "BTC",
                    "bitcoin",
                    57_832.41,
                    2.54,
                    1_089_420_000_000.0,
                    32_541_000_000.0,
                ),
                listing(
                    "ethereum",
                    "Ethereum",
                    "ETH",
                    "ethereum",
                    3_124.87,
                    -1.27,
                    375_910_000_000.0,
                    19_874_000_000.0,
                ),
                listing(
                    "solana",
                    "Solana",
                    "SOL",
                    "solana",
                    122.35,
                    5.73,
                    52_640_000_000.0,
                    4_785_000_000.0,
                ),
                listing(
                    "binancecoin",
                    "Binance Coin",
                    "BNB",
                    "binance-coin",
                    417.21,
                    -0.35,
                    64_290_000_000.0,
                    2_341_000_000.0,
                ),
                listing(
                    "cardano",
                    "Cardano",
                    "ADA",
                    "cardano",
                    1.27,
                    3.21,
                    42_910_000_000.0,
                    1_654_000_000.0,
                ),
                listing(
                    "ripple",
                    "XRP",
                    "XRP",
                    "xrp",
                    0.72,
                    -2.14,
                    34_520_000_000.0,
                    2_134_000_000.0,
                ),
            ],
            fallback: AssetProfile::new(
                FALLBACK_ASSET_ID,
                FALLBACK_BASE_PRICE,
                DriftDirection::Down,
            ),
        }
    }

    /// Replace built-in profiles by id, appending ids the catalog doesn't know yet.
    ///
    /// Fails on the first profile without a positive, finite base price; the
    /// catalog is left untouched in that case.
    pub fn with_overrides(mut self, overrides: &[AssetProfile]) -> Result<Self> {
        for profile in overrides {
            profile.validate()?;
        }
        for profile in overrides {
            let id = normalize_id(&profile.id);
            let profile = AssetProfile {
                id: id.clone(),
                ..profile.clone()
            };
            match self.profiles.iter_mut().find(|p| p.id == id) {
                Some(existing) => *existing = profile,
                None => self.profiles.push(profile),
            }
        }
        Ok(self)
    }

    pub fn profile(&self, asset_id: &str) -> &AssetProfile {
        self.find_profile(asset_id).unwrap_or(&self.fallback)
    }

    pub fn find_profile(&self, asset_id: &str) -> Option<&AssetProfile> {
        let id = normalize_id(asset_id);
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn is_known(&self, asset_id: &str) -> bool {
        self.find_profile(asset_id).is_some()
    }

    pub fn profiles(&self) -> &[AssetProfile] {
        &self.profiles
    }

    pub fn listings(&self) -> &[AssetListing] {
        &self.listings
    }

    pub fn listing(&self, asset_id: &str) -> Option<&AssetListing> {
        let id = normalize_id(asset_id);
        self.listings.iter().find(|l| l.id == id)
    }

    /// Resolve either an id ("bitcoin") or a ticker symbol ("BTC").
    pub fn resolve_id(&self, query: &str) -> String {
        let q = query.trim();
        self.listings
            .iter()
            .find(|l| l.symbol.eq_ignore_ascii_case(q))
            .map(|l| l.id.clone())
            .unwrap_or_else(|| normalize_id(q))
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}
