use anyhow::Context;
use auction_fixtures::{FixtureConfig, FixtureError, ScenarioGenerator, ScriptFiles};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "auction_fixtures=info";

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn print_help() {
    eprintln!(
        r#"Auction Fixtures - buyer/seller scripts for the double-auction benchmark

USAGE:
    auction-fixtures [OPTIONS]

OPTIONS:
    --config <PATH>             Load configuration from JSON file
    --buyers <N>                Number of buyers (default: 2)
    --sellers <N>               Number of sellers (default: 2)
    --seed <SEED>               Random seed (default: OS entropy)
    --sampled                   Build every agent from the sampled values
    --enrollment-out <PATH>     Enrollment script (default: accountReg.sh)
    --bid-out <PATH>            Bid script (default: bidConfig.sh)
    --help                      Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                    Log level filter

EXAMPLES:
    # Reproduce the reference fixtures
    auction-fixtures

    # 50 sampled buyers and sellers, reproducible
    auction-fixtures --buyers 50 --sellers 50 --sampled --seed 7
"#
    );
}

/// Command line overrides applied on top of the config file
#[derive(Debug, Default)]
struct Args {
    config_path: Option<String>,
    buyers: Option<usize>,
    sellers: Option<usize>,
    seed: Option<u64>,
    sampled: bool,
    enrollment_out: Option<String>,
    bid_out: Option<String>,
    help: bool,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, FixtureError> {
    let raw = value.ok_or_else(|| FixtureError::InvalidArgument(format!("{flag} requires a value")))?;
    raw.parse::<T>()
        .map_err(|_| FixtureError::InvalidArgument(format!("invalid {flag}: {raw}")))
}

fn parse_args(args: &[String]) -> Result<Args, FixtureError> {
    let mut parsed = Args::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => parsed.help = true,
            "--config" | "-c" => parsed.config_path = Some(parse_value(arg, iter.next())?),
            "--buyers" => parsed.buyers = Some(parse_value(arg, iter.next())?),
            "--sellers" => parsed.sellers = Some(parse_value(arg, iter.next())?),
            "--seed" => parsed.seed = Some(parse_value(arg, iter.next())?),
            "--sampled" => parsed.sampled = true,
            "--enrollment-out" => parsed.enrollment_out = Some(parse_value(arg, iter.next())?),
            "--bid-out" => parsed.bid_out = Some(parse_value(arg, iter.next())?),
            other => {
                return Err(FixtureError::InvalidArgument(format!(
                    "unknown argument: {other}"
                )));
            }
        }
    }

    Ok(parsed)
}

fn resolve_config(args: &Args) -> anyhow::Result<FixtureConfig> {
    let mut config = match &args.config_path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            FixtureConfig::from_file(path)?
        }
        None => FixtureConfig::default(),
    };

    if let Some(buyers) = args.buyers {
        config.generation.buyers = buyers;
    }
    if let Some(sellers) = args.sellers {
        config.generation.sellers = sellers;
    }
    if let Some(seed) = args.seed {
        config.generation.seed = Some(seed);
    }
    if args.sampled {
        config.generation.use_sampled_values = true;
    }
    if let Some(path) = &args.enrollment_out {
        config.enrollment_path = path.into();
    }
    if let Some(path) = &args.bid_out {
        config.bid_path = path.into();
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let raw: Vec<String> = std::env::args().collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            print_help();
            std::process::exit(1);
        }
    };
    if args.help {
        print_help();
        return Ok(());
    }

    let config = resolve_config(&args)?;
    tracing::info!(
        buyers = config.generation.buyers,
        sellers = config.generation.sellers,
        seed = ?config.generation.seed,
        sampled = config.generation.use_sampled_values,
        "Generating auction fixtures"
    );

    let scenario = ScenarioGenerator::from_config(&config.generation)
        .generate(config.generation.buyers, config.generation.sellers);

    let files = ScriptFiles::create(&config.enrollment_path, &config.bid_path)
        .context("failed to open output scripts")?;
    let summary = files.write(&scenario).with_context(|| {
        format!(
            "failed to write {} / {}",
            config.enrollment_path.display(),
            config.bid_path.display()
        )
    })?;

    tracing::info!(
        "Wrote {} enrollment and {} bid commands",
        summary.enrollment_lines,
        summary.bid_lines
    );
    Ok(())
}
