use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::model::AssetProfile;
use crate::simulation::{DEFAULT_HISTORY_HOURS, DEFAULT_HORIZON_HOURS};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const SEED_ENV_VAR: &str = "PRICE_SLEUTH_SEED";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub assets: Vec<AssetProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_history_hours")]
    pub history_hours: usize,
    #[serde(default = "default_horizon_hours")]
    pub horizon_hours: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            history_hours: DEFAULT_HISTORY_HOURS,
            horizon_hours: DEFAULT_HORIZON_HOURS,
            seed: None,
        }
    }
}

fn default_history_hours() -> usize {
    DEFAULT_HISTORY_HOURS
}

fn default_horizon_hours() -> usize {
    DEFAULT_HORIZON_HOURS
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit one JSON object per log line instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Parse an interval string (e.g. "1s", "1m", "1h", "1d", "1w", "1M") into milliseconds.
pub fn parse_interval_ms(s: &str) -> Result<u64> {
    let Some((suffix_at, _)) = s.char_indices().last().filter(|(idx, _)| *idx > 0) else {
        bail!("invalid interval '{}': expected format like '1d'", s);
    };

    let (num_str, suffix) = s.split_at(suffix_at);
    let n: u64 = num_str.parse().with_context(|| {
        format!(
            "invalid interval '{}': quantity must be a positive integer",
            s
        )
    })?;
    if n == 0 {
        bail!("invalid interval '{}': quantity must be > 0", s);
    }

    let unit_ms = match suffix {
        "s" => 1_000,
        "m" => 60_000,
        "h" => 3_600_000,
        "d" => 86_400_000,
        "w" => 7 * 86_400_000,
        "M" => 30 * 86_400_000,
        _ => bail!(
            "invalid interval '{}': unsupported suffix '{}', expected one of s/m/h/d/w/M",
            s,
            suffix
        ),
    };

    n.checked_mul(unit_ms)
        .with_context(|| format!("invalid interval '{}': value is too large", s))
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.history_hours == 0 {
            bail!("simulation.history_hours must be > 0");
        }
        if self.horizon_hours == 0 {
            bail!("simulation.horizon_hours must be > 0");
        }
        Ok(())
    }
}

impl Config {
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load `config/default.toml`, falling back to built-in defaults when the file is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = if config_path.exists() {
            let config_str = std::fs::read_to_string(config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            Self::from_toml_str(&config_str)
                .with_context(|| format!("invalid config in {}", config_path.display()))?
        } else {
            Config::default()
        };

        if let Ok(raw) = std::env::var(SEED_ENV_VAR) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be an unsigned integer", SEED_ENV_VAR))?;
            config.simulation.seed = Some(seed);
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        for asset in &self.assets {
            asset.validate()?;
        }
        Ok(())
    }
}
