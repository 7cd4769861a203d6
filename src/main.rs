use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use hbit::chart::{derive_chart, ChartLayout};
use hbit::config::{AppConfig, Locale};
use hbit::detail::{fetch_activity_detail, fetch_activity_detail_partial};
use hbit::models::ZoneTimeSpent;
use hbit::report;
use hbit::score::{compute_score, training_score, SampleStats};
use hbit::HeartRateClient;

#[derive(Parser)]
#[command(name = "hbit", about = "Heart rate charts and training scores for Hbit activities")]
struct Cli {
    /// Overrides `api_base_url` from the configuration
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, global = true)]
    token: Option<String>,

    #[arg(long, value_enum, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load one activity and print its heart rate report
    Detail {
        activity_id: i64,
        /// Show whatever loaded instead of failing on the first error
        #[arg(long)]
        partial: bool,
        /// Print the chart layout and score as JSON
        #[arg(long, conflicts_with = "partial")]
        json: bool,
    },
    /// Print the heart rate zone model
    Zones,
    /// Compute a training score from summary values
    Score {
        #[arg(long)]
        avg: i32,
        #[arg(long)]
        min: i32,
        #[arg(long)]
        max: i32,
    },
}

#[derive(Serialize)]
struct DetailJson<'a> {
    activity_id: i64,
    stats: SampleStats,
    score: Option<i32>,
    chart: ChartLayout,
    time_spent: &'a ZoneTimeSpent,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(url) = cli.base_url {
        config.api_base_url = url;
    }
    if let Some(token) = cli.token {
        config.api_token = Some(token);
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Score { avg, min, max } => {
            println!("{}", compute_score(avg, min, max));
        }
        Command::Zones => {
            let client = HeartRateClient::from_config(&config)?;
            let zones = client
                .fetch_zones()
                .await
                .map_err(|e| anyhow::anyhow!(e.localized(config.locale)))?;
            if !zones.is_ordered() {
                tracing::warn!("Zone limits are not strictly increasing: {:?}", zones);
            }
            println!("{}", serde_json::to_string_pretty(&zones)?);
        }
        Command::Detail {
            activity_id,
            partial,
            json,
        } => {
            let client = HeartRateClient::from_config(&config)?;
            if partial {
                let detail = fetch_activity_detail_partial(&client, activity_id).await;
                print!("{}", report::render_partial(&detail, config.locale));
                return Ok(());
            }

            let detail = fetch_activity_detail(&client, activity_id)
                .await
                .map_err(|e| anyhow::anyhow!(e.localized(config.locale)))
                .with_context(|| format!("Failed to load activity {}", activity_id))?;

            if json {
                let out = DetailJson {
                    activity_id,
                    stats: SampleStats::from_samples(&detail.samples),
                    score: training_score(&detail.samples),
                    chart: derive_chart(&detail.samples, Some(&detail.zones)),
                    time_spent: &detail.time_spent,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", report::render_detail(&detail, config.locale));
            }
        }
    }

    Ok(())
}
