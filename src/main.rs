use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use scraper::Html;
use size_advisor_lib::application::{spawn_page_agent, FindSizeError, SizeAdvisor};
use size_advisor_lib::domain::UserMeasurements;
use size_advisor_lib::infrastructure::{
    init_logging_with_config, AppConfig, ConfigManager, JsonFileMeasurementStore, MeasurementStore,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Find the best-fit size on a saved product page
#[derive(Parser, Debug)]
#[command(name = "size-advisor", version)]
#[command(about = "Product page size discovery and size recommendation", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend a size for the given page
    Find {
        #[command(flatten)]
        page: PageArg,

        #[command(flatten)]
        measurements: MeasurementArgs,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the sizing information found on the page
    Inspect {
        #[command(flatten)]
        page: PageArg,
    },

    /// Print the stored measurements
    Measurements,
}

#[derive(Args, Debug)]
struct PageArg {
    /// Saved HTML of the product page
    #[arg(long = "page", value_name = "FILE")]
    path: PathBuf,
}

#[derive(Args, Debug)]
struct MeasurementArgs {
    /// Chest measurement in inches
    #[arg(long)]
    chest: Option<f64>,

    /// Shoulder measurement in inches
    #[arg(long)]
    shoulders: Option<f64>,

    /// Length in inches
    #[arg(long)]
    length: Option<f64>,
}

impl From<&MeasurementArgs> for UserMeasurements {
    fn from(args: &MeasurementArgs) -> Self {
        Self {
            chest: args.chest,
            shoulders: args.shoulders,
            length: args.length,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).await?;
    init_logging_with_config(&config.logging)?;
    debug!("Loaded configuration: {:?}", config);

    let store = JsonFileMeasurementStore::new(config.storage.resolved_measurements_path()?);
    debug!("Measurements file: {:?}", store.path());

    match cli.command {
        Command::Find {
            page,
            measurements,
            json,
        } => find(&config, &store, &page.path, &measurements, json).await,
        Command::Inspect { page } => inspect(&config, &page.path).await,
        Command::Measurements => {
            let stored = store.load().await?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
            Ok(())
        }
    }
}

async fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => ConfigManager::with_path(path.to_path_buf()).load_config(),
        None => ConfigManager::new()?.initialize_on_first_run().await,
    }
}

async fn read_page(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read page {path:?}"))
}

async fn find(
    config: &AppConfig,
    store: &JsonFileMeasurementStore,
    page_path: &Path,
    args: &MeasurementArgs,
    json: bool,
) -> Result<()> {
    let entered = UserMeasurements::from(args);
    let stored = store.load().await?.unwrap_or_default();
    let measurements = stored.merged_with(entered);

    if !entered.is_empty() {
        store.save(&measurements).await?;
    }

    let page_source = read_page(page_path).await?;
    let advisor = SizeAdvisor::from_config(config)?;
    let (client, agent) = spawn_page_agent(
        advisor,
        page_source,
        config.messaging.channel_capacity,
        config.messaging.response_timeout(),
    );

    info!("Requesting size for {:?}", page_path);
    let result = client.find_size(measurements).await;
    drop(client);
    agent.await.context("Page agent task failed")?;

    match result {
        Ok(response) if json => println!("{}", serde_json::to_string_pretty(&response)?),
        Ok(response) => println!("{}", response.display_text()),
        Err(FindSizeError::NoResponse) => println!("{}", FindSizeError::NoResponse),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

async fn inspect(config: &AppConfig, page_path: &Path) -> Result<()> {
    let page_source = read_page(page_path).await?;
    let advisor = SizeAdvisor::from_config(config)?;

    let size_info = advisor.inspect(&Html::parse_document(&page_source));
    println!("{}", serde_json::to_string_pretty(&size_info)?);
    Ok(())
}
