use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use homeval::application::valuation::ValuationService;
use homeval::config::Config;
use homeval::domain::ports::NoiseSource;
use homeval::domain::valuation::{Features, Location, ValuationReport};
use homeval::infrastructure::simulation::{SeededNoise, ThreadRngNoise};
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Residential property price estimation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the price of a property
    Estimate(EstimateArgs),
    /// Show the model comparison table, best model first
    Models {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct EstimateArgs {
    /// Living area in square feet (500-10000)
    #[arg(long, default_value_t = 2000.0)]
    sqft: f64,

    /// Number of bedrooms (1-6)
    #[arg(long, default_value_t = 3)]
    bedrooms: u32,

    /// Number of bathrooms in half steps (1-5)
    #[arg(long, default_value_t = 2.0)]
    bathrooms: f64,

    /// Age of the building in years (0-100)
    #[arg(long, default_value_t = 10)]
    age: u32,

    /// Location type: urban, suburban or rural
    #[arg(long, default_value = "suburban")]
    location: Location,

    /// Garage spaces (0-4)
    #[arg(long, default_value_t = 2)]
    garage: u32,

    /// Property has a swimming pool
    #[arg(long)]
    pool: bool,

    /// Property was recently renovated
    #[arg(long)]
    renovated: bool,

    /// Seed the noise source for a reproducible estimate (overrides VALUATION_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

impl EstimateArgs {
    fn features(&self) -> Features {
        Features {
            sqft: self.sqft,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            age: self.age,
            location: self.location,
            garage: self.garage,
            pool: self.pool,
            renovated: self.renovated,
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Estimate(args) => {
            let features = args.features();
            features
                .validate_practical()
                .context("Property features rejected")?;

            let noise: Arc<dyn NoiseSource> = match args.seed.or(config.seed) {
                Some(seed) => {
                    info!("Using seeded noise source (seed={})", seed);
                    Arc::new(SeededNoise::new(seed))
                }
                None => Arc::new(ThreadRngNoise),
            };

            let service = ValuationService::from_config(&config, noise)?;
            let report = service.appraise(&features)?;

            if args.json {
                println!("{}", report.to_json_pretty()?);
            } else {
                print_report(&report);
            }
        }
        Commands::Models { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config.catalog)?);
            } else {
                println!(
                    "{:<20} {:<16} {:>9} {:>10} {:>10} {:>6} {:>8}",
                    "Model", "Status", "Accuracy", "MAE", "RMSE", "R²", "Train"
                );
                for model in config.catalog.ranked() {
                    println!(
                        "{:<20} {:<16} {:>8.1}% {:>10} {:>10} {:>6.3} {:>8}",
                        model.name,
                        model.status.label(),
                        model.accuracy,
                        format_price(Decimal::from_f64_retain(model.mae).unwrap_or_default()),
                        format_price(Decimal::from_f64_retain(model.rmse).unwrap_or_default()),
                        model.r2,
                        model.training_time
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_report(report: &ValuationReport) {
    let estimate = &report.estimate;
    let analysis = &report.analysis;
    let delta = &analysis.market_delta;

    println!("Predicted price:  {}", format_price(estimate.price));
    println!(
        "Range:            {} - {}",
        format_price(analysis.price_range.low),
        format_price(analysis.price_range.high)
    );
    println!(
        "Confidence:       {} - {}%",
        analysis.confidence_tier, estimate.confidence
    );
    println!("                  {}", analysis.advisory());
    println!("Model:            {}", estimate.model_name);
    println!("Market average:   {}", format_price(delta.market_average));
    println!(
        "Difference:       {}{} ({:.1}%)",
        if delta.is_above_market() { "+" } else { "" },
        format_price(delta.amount),
        delta.percent
    );
}

/// Whole-dollar amount with thousands separators, e.g. `$625,000`.
fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}", sign, grouped)
}
