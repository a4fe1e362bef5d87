use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

use price_sleuth::chart::{chart_window, is_uptrend, price_domain, ChartRange};
use price_sleuth::config::Config;
use price_sleuth::model::{AssetListing, ForecastBucket};
use price_sleuth::report;
use price_sleuth::PriceService;

#[derive(Debug)]
struct CliArgs {
    asset: String,
    range: ChartRange,
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    asset_id: &'a str,
    listing: Option<&'a AssetListing>,
    last_known_price: f64,
    range: String,
    uptrend: bool,
    domain: Option<(f64, f64)>,
    points: usize,
    predictions: &'a [ForecastBucket],
}

fn print_usage() {
    println!("price-sleuth [ASSET] [--range 1d|7d|30d|prediction] [--json]");
    println!();
    println!("  ASSET      asset id or ticker (default: bitcoin)");
    println!("  --range    chart window to summarize (default: 7d)");
    println!("  --json     print a JSON report instead of text tables");
}

fn parse_args(args: &[String]) -> Result<Option<CliArgs>> {
    let mut out = CliArgs {
        asset: "bitcoin".to_string(),
        range: ChartRange::default(),
        json: false,
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "help" | "--help" | "-h" => return Ok(None),
            "--json" => out.json = true,
            "--range" => {
                let raw = iter
                    .next()
                    .ok_or_else(|| anyhow!("`--range` requires a value"))?;
                out.range = ChartRange::parse(raw)
                    .with_context(|| format!("invalid --range '{}'", raw))?;
            }
            flag if flag.starts_with("--") => bail!("unknown flag '{}'", flag),
            asset => out.asset = asset.to_string(),
        }
    }
    Ok(Some(out))
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.logging.level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if config.logging.json {
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(cli) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    let config = Config::load()?;
    init_tracing(&config);
    tracing::info!(
        history_hours = config.simulation.history_hours,
        horizon_hours = config.simulation.horizon_hours,
        seeded = config.simulation.seed.is_some(),
        "Starting price-sleuth"
    );

    let mut service = PriceService::from_config(&config)?;
    let asset_id = service.catalog().resolve_id(&cli.asset);
    let now_ms = chrono::Utc::now().timestamp_millis();
    let table = service.prediction_table(&asset_id, now_ms)?;
    let points = chart_window(&table.history, &table.forecast, cli.range);

    let listing = service.catalog().listing(&asset_id);
    let symbol = listing
        .map(|l| l.symbol.clone())
        .unwrap_or_else(|| asset_id.to_ascii_uppercase());

    if cli.json {
        let out = JsonReport {
            asset_id: &asset_id,
            listing,
            last_known_price: table.last_known_price,
            range: cli.range.label(),
            uptrend: is_uptrend(&points),
            domain: price_domain(&points),
            points: points.len(),
            predictions: &table.buckets,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print!("{}", report::render_listing(service.catalog().listings()));
    println!();
    print!("{}", report::render_chart_summary(&symbol, cli.range, &points));
    println!();
    print!("{}", report::render_prediction_table(&symbol, &table.buckets));
    Ok(())
}
